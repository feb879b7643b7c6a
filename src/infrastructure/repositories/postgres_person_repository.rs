use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::person::{DogDisposition, Person};
use crate::domain::repositories::PersonRepository;
use crate::domain::team::Team;

/// PostgreSQL implementation of PersonRepository
///
/// People are stored with a nullable team reference; reads join the team
/// in so the aggregate comes back fully loaded. `find_all` orders by
/// creation time, which fixes the desk layout input order.
pub struct PostgresPersonRepository {
    pool: PgPool,
}

impl PostgresPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PersonRow {
    id: Uuid,
    name: String,
    dog_status: DogDisposition,
    created_at: DateTime<Utc>,
    team_id: Option<Uuid>,
    team_name: Option<String>,
    team_created_at: Option<DateTime<Utc>>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        let team = match (row.team_id, row.team_name, row.team_created_at) {
            (Some(id), Some(name), Some(created_at)) => {
                Some(Team::from_persistence(id, name, created_at))
            }
            _ => None,
        };

        Person::from_persistence(row.id, row.name, row.dog_status, team, row.created_at)
    }
}

const SELECT_PERSON: &str = r#"
    SELECT p.id, p.name, p.dog_status, p.created_at,
           t.id AS team_id, t.name AS team_name, t.created_at AS team_created_at
    FROM people p
    LEFT JOIN teams t ON t.id = p.team_id
"#;

#[async_trait]
impl PersonRepository for PostgresPersonRepository {
    async fn save(&self, person: &Person) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO people (id, name, dog_status, team_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                dog_status = EXCLUDED.dog_status,
                team_id = EXCLUDED.team_id
            "#,
        )
        .bind(person.id())
        .bind(person.name())
        .bind(person.dog_status())
        .bind(person.team().map(|t| t.id()))
        .bind(person.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save person: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Person>, String> {
        let row: Option<PersonRow> =
            sqlx::query_as(&format!("{} WHERE p.id = $1", SELECT_PERSON))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| format!("Failed to find person by id: {}", e))?;

        Ok(row.map(Person::from))
    }

    async fn find_all(&self) -> Result<Vec<Person>, String> {
        let rows: Vec<PersonRow> =
            sqlx::query_as(&format!("{} ORDER BY p.created_at, p.id", SELECT_PERSON))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| format!("Failed to list people: {}", e))?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn clear_team(&self, team_id: Uuid) -> Result<(), String> {
        sqlx::query("UPDATE people SET team_id = NULL WHERE team_id = $1")
            .bind(team_id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to clear team membership: {}", e))?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete person: {}", e))?;

        if result.rows_affected() == 0 {
            return Err(format!("Person not found: {}", id));
        }

        Ok(())
    }
}
