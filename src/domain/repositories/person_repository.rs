use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::person::Person;

/// Repository trait for the Person aggregate
///
/// Defines the contract for persisting and retrieving people.
/// Implementations should handle storage-specific details.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Save a person (insert or update)
    async fn save(&self, person: &Person) -> Result<(), String>;

    /// Find a person by id, with their team loaded
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Person>, String>;

    /// All people in creation order, with teams loaded. This order is the
    /// input order of the desk layout calculation.
    async fn find_all(&self) -> Result<Vec<Person>, String>;

    /// Remove the given team from everyone who is on it
    async fn clear_team(&self, team_id: Uuid) -> Result<(), String>;

    /// Delete a person by id
    async fn delete(&self, id: Uuid) -> Result<(), String>;
}
