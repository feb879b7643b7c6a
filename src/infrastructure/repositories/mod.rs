// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod memory;
pub mod postgres_person_repository;
pub mod postgres_team_repository;

pub use memory::{InMemoryPersonRepository, InMemoryTeamRepository};
pub use postgres_person_repository::PostgresPersonRepository;
pub use postgres_team_repository::PostgresTeamRepository;
