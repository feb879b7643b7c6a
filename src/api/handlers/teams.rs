use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::team::Team;

/// Request body for creating or updating a team
#[derive(Debug, Deserialize)]
pub struct PutTeamRequest {
    pub id: Option<Uuid>,
    pub name: String,
}

/// Team as returned by the API
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
        }
    }
}

/// Create or update a team
///
/// POST /api/teams
///
/// With no id a new team is created. With an id the named team is
/// renamed, or created under that id when it does not exist yet.
pub async fn put_team(
    State(state): State<AppState>,
    Json(req): Json<PutTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let existing = match req.id {
        Some(id) => state
            .teams
            .find_by_id(id)
            .await
            .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?,
        None => None,
    };

    match existing {
        Some(mut team) => {
            team.rename(req.name).map_err(|e| ApiError::bad_request(e))?;

            state
                .teams
                .save(&team)
                .await
                .map_err(|e| ApiError::internal_server_error(format!("Failed to save team: {}", e)))?;

            Ok((StatusCode::OK, Json(TeamResponse::from(&team))))
        }
        None => {
            let team = Team::new(req.id, req.name).map_err(|e| ApiError::bad_request(e))?;

            state
                .teams
                .save(&team)
                .await
                .map_err(|e| ApiError::internal_server_error(format!("Failed to save team: {}", e)))?;

            Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
        }
    }
}

/// Get all teams
///
/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state
        .teams
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team
///
/// DELETE /api/teams/:id
///
/// Members of the deleted team become teamless.
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.teams.delete(id).await.map_err(|e| {
        if e.contains("not found") {
            ApiError::not_found(e)
        } else {
            ApiError::internal_server_error(format!("Failed to delete team: {}", e))
        }
    })?;

    state
        .people
        .clear_team(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to clear membership: {}", e)))?;

    Ok(StatusCode::NO_CONTENT)
}
