use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::teams::TeamResponse;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::person::{DogDisposition, Person};
use crate::domain::team::Team;

/// Request body for creating or updating a person
#[derive(Debug, Deserialize)]
pub struct PutPersonRequest {
    pub id: Option<Uuid>,
    pub name: String,
    pub dog_status: DogDisposition,
    pub team_id: Option<Uuid>,
}

/// Request body for changing a person's dog status
#[derive(Debug, Deserialize)]
pub struct UpdateDogStatusRequest {
    pub dog_status: DogDisposition,
}

/// Request body for moving a person between teams
///
/// A null `team_id` takes the person off their current team.
#[derive(Debug, Deserialize)]
pub struct AssignTeamRequest {
    pub team_id: Option<Uuid>,
}

/// Person as returned by the API
#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub id: Uuid,
    pub name: String,
    pub dog_status: DogDisposition,
    pub team: Option<TeamResponse>,
}

impl From<&Person> for PersonResponse {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id(),
            name: person.name().to_string(),
            dog_status: person.dog_status(),
            team: person.team().map(TeamResponse::from),
        }
    }
}

async fn resolve_team(state: &AppState, team_id: Option<Uuid>) -> Result<Option<Team>, ApiError> {
    match team_id {
        Some(id) => {
            let team = state
                .teams
                .find_by_id(id)
                .await
                .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
                .ok_or_else(|| ApiError::bad_request(format!("Team not found: {}", id)))?;

            Ok(Some(team))
        }
        None => Ok(None),
    }
}

/// Create or update a person
///
/// POST /api/people
///
/// With no id a new person is created. With an id the named person is
/// updated, or created under that id when it does not exist yet.
pub async fn put_person(
    State(state): State<AppState>,
    Json(req): Json<PutPersonRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), ApiError> {
    let team = resolve_team(&state, req.team_id).await?;

    let existing = match req.id {
        Some(id) => state
            .people
            .find_by_id(id)
            .await
            .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?,
        None => None,
    };

    match existing {
        Some(mut person) => {
            person.rename(req.name).map_err(|e| ApiError::bad_request(e))?;
            person.set_dog_status(req.dog_status);
            person.assign_team(team);

            state.people.save(&person).await.map_err(|e| {
                ApiError::internal_server_error(format!("Failed to save person: {}", e))
            })?;

            Ok((StatusCode::OK, Json(PersonResponse::from(&person))))
        }
        None => {
            let (mut person, _events) = Person::new(req.id, req.name, req.dog_status)
                .map_err(|e| ApiError::bad_request(e))?;
            person.assign_team(team);

            state.people.save(&person).await.map_err(|e| {
                ApiError::internal_server_error(format!("Failed to save person: {}", e))
            })?;

            Ok((StatusCode::CREATED, Json(PersonResponse::from(&person))))
        }
    }
}

/// Get all people in creation order
///
/// GET /api/people
pub async fn list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    let people = state
        .people
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(people.iter().map(PersonResponse::from).collect()))
}

/// Get a person by ID
///
/// GET /api/people/:id
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PersonResponse>, ApiError> {
    let person = state
        .people
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Person not found: {}", id)))?;

    Ok(Json(PersonResponse::from(&person)))
}

/// Change a person's dog status
///
/// PUT /api/people/:id/dog-status
pub async fn update_dog_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDogStatusRequest>,
) -> Result<Json<PersonResponse>, ApiError> {
    let mut person = state
        .people
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Person not found: {}", id)))?;

    person.set_dog_status(req.dog_status);

    state
        .people
        .save(&person)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save person: {}", e)))?;

    Ok(Json(PersonResponse::from(&person)))
}

/// Move a person onto a team, or off their current one
///
/// PUT /api/people/:id/team
pub async fn assign_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AssignTeamRequest>,
) -> Result<Json<PersonResponse>, ApiError> {
    let team = resolve_team(&state, req.team_id).await?;

    let mut person = state
        .people
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Person not found: {}", id)))?;

    person.assign_team(team);

    state
        .people
        .save(&person)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save person: {}", e)))?;

    Ok(Json(PersonResponse::from(&person)))
}

/// Delete a person
///
/// DELETE /api/people/:id
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.people.delete(id).await.map_err(|e| {
        if e.contains("not found") {
            ApiError::not_found(e)
        } else {
            ApiError::internal_server_error(format!("Failed to delete person: {}", e))
        }
    })?;

    Ok(StatusCode::NO_CONTENT)
}
