use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Team entity
///
/// A named grouping of people. The desk arrangement treats a team purely
/// as a grouping key and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team
    ///
    /// # Arguments
    /// * `id` - Caller-chosen id for upserts, or `None` to generate one
    /// * `name` - Display name (cannot be empty)
    pub fn new(id: Option<Uuid>, name: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        Ok(Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            name,
            created_at: Utc::now(),
        })
    }

    /// Changes the team's display name
    pub fn rename(&mut self, name: String) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        self.name = name;
        Ok(())
    }

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(id: Uuid, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_team_with_valid_name() {
        let team = Team::new(None, "Platform".to_string());

        assert!(team.is_ok());
        assert_eq!(team.unwrap().name(), "Platform");
    }

    #[test]
    fn create_team_with_empty_name_fails() {
        assert!(Team::new(None, "".to_string()).is_err());
    }

    #[test]
    fn create_team_with_caller_chosen_id() {
        let id = Uuid::new_v4();
        let team = Team::new(Some(id), "Data".to_string()).unwrap();

        assert_eq!(team.id(), id);
    }

    #[test]
    fn rename_team() {
        let mut team = Team::new(None, "Old".to_string()).unwrap();

        team.rename("New".to_string()).unwrap();
        assert_eq!(team.name(), "New");

        assert!(team.rename("  ".to_string()).is_err());
        assert_eq!(team.name(), "New");
    }
}
