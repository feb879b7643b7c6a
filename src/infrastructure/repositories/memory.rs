use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

use crate::domain::person::Person;
use crate::domain::repositories::{PersonRepository, TeamRepository};
use crate::domain::team::Team;

/// In-memory implementation of PersonRepository
///
/// Backs tests and database-free development. Insertion order is
/// creation order, matching the Postgres adapter's `find_all` contract;
/// updates keep their slot.
#[derive(Default)]
pub struct InMemoryPersonRepository {
    people: RwLock<Vec<Person>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn save(&self, person: &Person) -> Result<(), String> {
        let mut people = self
            .people
            .write()
            .map_err(|_| "people store poisoned".to_string())?;

        match people.iter_mut().find(|p| p.id() == person.id()) {
            Some(existing) => *existing = person.clone(),
            None => people.push(person.clone()),
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Person>, String> {
        let people = self
            .people
            .read()
            .map_err(|_| "people store poisoned".to_string())?;

        Ok(people.iter().find(|p| p.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Person>, String> {
        let people = self
            .people
            .read()
            .map_err(|_| "people store poisoned".to_string())?;

        Ok(people.clone())
    }

    async fn clear_team(&self, team_id: Uuid) -> Result<(), String> {
        let mut people = self
            .people
            .write()
            .map_err(|_| "people store poisoned".to_string())?;

        for person in people.iter_mut() {
            if person.team().map(|t| t.id()) == Some(team_id) {
                person.assign_team(None);
            }
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        let mut people = self
            .people
            .write()
            .map_err(|_| "people store poisoned".to_string())?;

        let before = people.len();
        people.retain(|p| p.id() != id);

        if people.len() == before {
            return Err(format!("Person not found: {}", id));
        }

        Ok(())
    }
}

/// In-memory implementation of TeamRepository
#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<Vec<Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        let mut teams = self
            .teams
            .write()
            .map_err(|_| "team store poisoned".to_string())?;

        match teams.iter_mut().find(|t| t.id() == team.id()) {
            Some(existing) => *existing = team.clone(),
            None => teams.push(team.clone()),
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        let teams = self
            .teams
            .read()
            .map_err(|_| "team store poisoned".to_string())?;

        Ok(teams.iter().find(|t| t.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Team>, String> {
        let teams = self
            .teams
            .read()
            .map_err(|_| "team store poisoned".to_string())?;

        Ok(teams.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        let mut teams = self
            .teams
            .write()
            .map_err(|_| "team store poisoned".to_string())?;

        let before = teams.len();
        teams.retain(|t| t.id() != id);

        if teams.len() == before {
            return Err(format!("Team not found: {}", id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::DogDisposition;

    #[tokio::test]
    async fn save_and_find_person() {
        let repo = InMemoryPersonRepository::new();
        let (person, _) = Person::new(None, "Alice".to_string(), DogDisposition::Like).unwrap();

        repo.save(&person).await.unwrap();

        let found = repo.find_by_id(person.id()).await.unwrap();
        assert_eq!(found.map(|p| p.id()), Some(person.id()));
    }

    #[tokio::test]
    async fn find_all_keeps_creation_order() {
        let repo = InMemoryPersonRepository::new();
        let mut ids = Vec::new();
        for name in ["First", "Second", "Third"] {
            let (person, _) =
                Person::new(None, name.to_string(), DogDisposition::Like).unwrap();
            ids.push(person.id());
            repo.save(&person).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        let found: Vec<Uuid> = all.iter().map(Person::id).collect();
        assert_eq!(found, ids);
    }

    #[tokio::test]
    async fn save_updates_in_place() {
        let repo = InMemoryPersonRepository::new();
        let (mut person, _) = Person::new(None, "Ann".to_string(), DogDisposition::Like).unwrap();
        repo.save(&person).await.unwrap();

        person.set_dog_status(DogDisposition::Have);
        repo.save(&person).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].dog_status(), DogDisposition::Have);
    }

    #[tokio::test]
    async fn clear_team_detaches_members() {
        let repo = InMemoryPersonRepository::new();
        let team = Team::new(None, "Platform".to_string()).unwrap();
        let (mut person, _) = Person::new(None, "Bo".to_string(), DogDisposition::Like).unwrap();
        person.assign_team(Some(team.clone()));
        repo.save(&person).await.unwrap();

        repo.clear_team(team.id()).await.unwrap();

        let found = repo.find_by_id(person.id()).await.unwrap().unwrap();
        assert!(found.team().is_none());
    }

    #[tokio::test]
    async fn delete_missing_person_errors() {
        let repo = InMemoryPersonRepository::new();

        let result = repo.delete(Uuid::new_v4()).await;
        assert!(result.unwrap_err().contains("not found"));
    }

    #[tokio::test]
    async fn team_round_trip() {
        let repo = InMemoryTeamRepository::new();
        let team = Team::new(None, "Data".to_string()).unwrap();

        repo.save(&team).await.unwrap();
        assert!(repo.find_by_id(team.id()).await.unwrap().is_some());

        repo.delete(team.id()).await.unwrap();
        assert!(repo.find_by_id(team.id()).await.unwrap().is_none());
    }
}
