use axum::{extract::State, Json};
use serde::Serialize;

use super::people::PersonResponse;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::layout::calculate_desk_layout;

/// One assigned desk in the calculated row
#[derive(Debug, Serialize)]
pub struct DeskAssignment {
    pub position: usize,
    pub person: PersonResponse,
}

/// Get the calculated desk layout
///
/// GET /api/desk-layout
///
/// Fetches everyone in creation order, runs the arrangement, and assigns
/// contiguous 1-based desk positions. All ordering decisions live in the
/// calculator; this handler only numbers the result.
pub async fn get_desk_layout(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeskAssignment>>, ApiError> {
    let people = state
        .people
        .find_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    let arranged = calculate_desk_layout(people);

    let assignments = arranged
        .iter()
        .enumerate()
        .map(|(index, person)| DeskAssignment {
            position: index + 1,
            person: PersonResponse::from(person),
        })
        .collect();

    Ok(Json(assignments))
}
