use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::events::PersonEvent;
use super::value_objects::DogDisposition;
use crate::domain::team::Team;

/// Person aggregate root
///
/// Represents one occupant of the desk row: a display name, a dog
/// disposition, and at most one team membership.
///
/// # Invariants
/// - Name cannot be empty
/// - A person belongs to at most one team
///
/// # Example
/// ```
/// use deskplanner_api::domain::person::{DogDisposition, Person};
///
/// let (person, events) = Person::new(
///     None,
///     "Alice".to_string(),
///     DogDisposition::Like,
/// ).expect("valid person");
///
/// assert_eq!(person.name(), "Alice");
/// assert!(person.team().is_none());
/// assert!(!events.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Person {
    id: Uuid,
    name: String,
    dog_status: DogDisposition,
    team: Option<Team>,
    created_at: DateTime<Utc>,
}

impl Person {
    /// Creates a new Person aggregate
    ///
    /// # Arguments
    /// * `id` - Caller-chosen id for upserts, or `None` to generate one
    /// * `name` - Display name (cannot be empty)
    /// * `dog_status` - The person's dog disposition
    ///
    /// # Returns
    /// * `Ok((Person, Vec<PersonEvent>))` - New person and events generated
    /// * `Err(String)` - If any invariant is violated
    pub fn new(
        id: Option<Uuid>,
        name: String,
        dog_status: DogDisposition,
    ) -> Result<(Self, Vec<PersonEvent>), String> {
        if name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        let person = Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            name,
            dog_status,
            team: None,
            created_at: Utc::now(),
        };

        let events = vec![PersonEvent::Created {
            person_id: person.id,
            name: person.name.clone(),
            dog_status,
        }];

        Ok((person, events))
    }

    /// Changes the person's display name
    ///
    /// # Returns
    /// * `Ok(PersonEvent)` - Renamed event generated
    /// * `Err(String)` - If the new name is empty
    pub fn rename(&mut self, name: String) -> Result<PersonEvent, String> {
        if name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        self.name = name;

        Ok(PersonEvent::Renamed {
            person_id: self.id,
            name: self.name.clone(),
        })
    }

    /// Changes the person's dog disposition
    pub fn set_dog_status(&mut self, dog_status: DogDisposition) -> PersonEvent {
        self.dog_status = dog_status;

        PersonEvent::DogStatusChanged {
            person_id: self.id,
            dog_status,
        }
    }

    /// Moves the person onto a team, or off their current one with `None`
    pub fn assign_team(&mut self, team: Option<Team>) -> PersonEvent {
        let team_id = team.as_ref().map(|t| t.id());
        self.team = team;

        PersonEvent::TeamChanged {
            person_id: self.id,
            team_id,
        }
    }

    // ===== Getters =====

    /// Returns the person's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the person's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the person's dog disposition
    pub fn dog_status(&self) -> DogDisposition {
        self.dog_status
    }

    /// Returns the person's team, if they are on one
    pub fn team(&self) -> Option<&Team> {
        self.team.as_ref()
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Person from persistence layer data
    ///
    /// Bypasses business rule validation since the data was validated
    /// before it was stored. Only to be used by repository implementations.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        dog_status: DogDisposition,
        team: Option<Team>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            dog_status,
            team,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_person_with_valid_name() {
        let result = Person::new(None, "Alice".to_string(), DogDisposition::Like);

        assert!(result.is_ok());
        let (person, events) = result.unwrap();

        assert_eq!(person.name(), "Alice");
        assert_eq!(person.dog_status(), DogDisposition::Like);
        assert!(person.team().is_none());
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn create_person_with_empty_name_fails() {
        let result = Person::new(None, "".to_string(), DogDisposition::Have);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Name cannot be empty"));
    }

    #[test]
    fn create_person_with_whitespace_name_fails() {
        let result = Person::new(None, "   ".to_string(), DogDisposition::Have);

        assert!(result.is_err());
    }

    #[test]
    fn create_person_with_caller_chosen_id() {
        let id = Uuid::new_v4();
        let (person, _) = Person::new(Some(id), "Bob".to_string(), DogDisposition::Avoid).unwrap();

        assert_eq!(person.id(), id);
    }

    #[test]
    fn person_generates_created_event() {
        let (person, events) =
            Person::new(None, "Charlie".to_string(), DogDisposition::Avoid).unwrap();

        assert_eq!(events.len(), 1);
        match &events[0] {
            PersonEvent::Created {
                person_id,
                name,
                dog_status,
            } => {
                assert_eq!(*person_id, person.id());
                assert_eq!(name, "Charlie");
                assert_eq!(*dog_status, DogDisposition::Avoid);
            }
            _ => panic!("Expected Created event"),
        }
    }

    #[test]
    fn rename_rejects_empty_name() {
        let (mut person, _) = Person::new(None, "Dana".to_string(), DogDisposition::Like).unwrap();

        assert!(person.rename("".to_string()).is_err());
        assert_eq!(person.name(), "Dana");
    }

    #[test]
    fn set_dog_status_emits_event() {
        let (mut person, _) = Person::new(None, "Eve".to_string(), DogDisposition::Like).unwrap();

        let event = person.set_dog_status(DogDisposition::Have);

        assert_eq!(person.dog_status(), DogDisposition::Have);
        match event {
            PersonEvent::DogStatusChanged { dog_status, .. } => {
                assert_eq!(dog_status, DogDisposition::Have)
            }
            _ => panic!("Expected DogStatusChanged event"),
        }
    }

    #[test]
    fn assign_and_clear_team() {
        let team = Team::new(None, "Platform".to_string()).unwrap();
        let (mut person, _) = Person::new(None, "Finn".to_string(), DogDisposition::Like).unwrap();

        person.assign_team(Some(team.clone()));
        assert_eq!(person.team().map(|t| t.id()), Some(team.id()));

        let event = person.assign_team(None);
        assert!(person.team().is_none());
        match event {
            PersonEvent::TeamChanged { team_id, .. } => assert!(team_id.is_none()),
            _ => panic!("Expected TeamChanged event"),
        }
    }
}
