use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team::from_persistence(row.id, row.name, row.created_at)
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save team: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        let row: Option<TeamRow> =
            sqlx::query_as("SELECT id, name, created_at FROM teams WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| format!("Failed to find team by id: {}", e))?;

        Ok(row.map(Team::from))
    }

    async fn find_all(&self) -> Result<Vec<Team>, String> {
        let rows: Vec<TeamRow> =
            sqlx::query_as("SELECT id, name, created_at FROM teams ORDER BY created_at, id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| format!("Failed to list teams: {}", e))?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete team: {}", e))?;

        if result.rows_affected() == 0 {
            return Err(format!("Team not found: {}", id));
        }

        Ok(())
    }
}
