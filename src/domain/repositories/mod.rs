// Repository traits (ports) for the domain layer

pub mod person_repository;
pub mod team_repository;

pub use person_repository::PersonRepository;
pub use team_repository::TeamRepository;
