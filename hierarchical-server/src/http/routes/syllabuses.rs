//! Syllabus endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::SyllabusStore;
use crate::http::error::ApiError;
use crate::http::extractors::ValidSyllabusId;
use crate::http::server::AppState;
use crate::models::Syllabus;

/// GET /v1/syllabuses/{id} - a syllabus with its parent-side relations
async fn get_syllabus<S: SyllabusStore>(
    State(state): State<Arc<AppState<S>>>,
    ValidSyllabusId(id): ValidSyllabusId,
) -> Result<Json<Syllabus>, ApiError> {
    let syllabus = state.service.get_by_id(&id).await?;
    Ok(Json(syllabus))
}

/// Syllabus routes
pub fn router<S: SyllabusStore>() -> Router<Arc<AppState<S>>> {
    Router::new().route("/v1/syllabuses/{id}", get(get_syllabus::<S>))
}
