use uuid::Uuid;

use super::value_objects::DogDisposition;

/// Domain events that occur within the Person aggregate
///
/// Emitted by constructors and mutators so callers can publish or audit
/// changes to the office roster.
#[derive(Debug, Clone)]
pub enum PersonEvent {
    /// Fired when a person is added to the roster
    Created {
        person_id: Uuid,
        name: String,
        dog_status: DogDisposition,
    },
    /// Fired when a person's display name changes
    Renamed { person_id: Uuid, name: String },
    /// Fired when a person's dog status changes
    DogStatusChanged {
        person_id: Uuid,
        dog_status: DogDisposition,
    },
    /// Fired when a person joins a team or leaves their current one
    TeamChanged {
        person_id: Uuid,
        team_id: Option<Uuid>,
    },
}

impl PersonEvent {
    /// Returns the person_id for this event
    pub fn person_id(&self) -> Uuid {
        match self {
            PersonEvent::Created { person_id, .. } => *person_id,
            PersonEvent::Renamed { person_id, .. } => *person_id,
            PersonEvent::DogStatusChanged { person_id, .. } => *person_id,
            PersonEvent::TeamChanged { person_id, .. } => *person_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_event_carries_person_id() {
        let person_id = Uuid::new_v4();
        let event = PersonEvent::Created {
            person_id,
            name: "Alice".to_string(),
            dog_status: DogDisposition::Like,
        };

        assert_eq!(event.person_id(), person_id);
    }

    #[test]
    fn team_changed_event_carries_person_id() {
        let person_id = Uuid::new_v4();
        let event = PersonEvent::TeamChanged {
            person_id,
            team_id: None,
        };

        assert_eq!(event.person_id(), person_id);
    }
}
