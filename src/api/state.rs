use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{PersonRepository, TeamRepository};
use crate::infrastructure::repositories::{
    InMemoryPersonRepository, InMemoryTeamRepository, PostgresPersonRepository,
    PostgresTeamRepository,
};

/// Shared handler state: repository adapters behind their domain ports
#[derive(Clone)]
pub struct AppState {
    pub people: Arc<dyn PersonRepository>,
    pub teams: Arc<dyn TeamRepository>,
}

impl AppState {
    /// State backed by PostgreSQL adapters
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            people: Arc::new(PostgresPersonRepository::new(pool.clone())),
            teams: Arc::new(PostgresTeamRepository::new(pool)),
        }
    }

    /// State backed by in-memory adapters, for tests and local development
    pub fn in_memory() -> Self {
        Self {
            people: Arc::new(InMemoryPersonRepository::new()),
            teams: Arc::new(InMemoryTeamRepository::new()),
        }
    }
}
