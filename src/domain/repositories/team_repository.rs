use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::team::Team;

/// Repository trait for the Team entity
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update)
    async fn save(&self, team: &Team) -> Result<(), String>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String>;

    /// All teams in creation order
    async fn find_all(&self) -> Result<Vec<Team>, String>;

    /// Delete a team by ID
    async fn delete(&self, id: Uuid) -> Result<(), String>;
}
