//! Guide Handlers
//!
//! HTTP handlers for guide CRUD endpoints.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::application::dto::request::{CreateGuideRequest, GuidesListQuery, UpdateGuideRequest};
use crate::application::dto::response::{GuideListResponse, GuideResponse};
use crate::presentation::http::extractors::{IdPath, ValidatedJson, ValidatedQuery};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List every guide
///
/// GET /api/guides
pub async fn list_all(State(state): State<AppState>) -> Result<Json<GuideListResponse>, AppError> {
    let guides = state.guides.get_all().await?;
    Ok(Json(guides.into()))
}

/// List active guides
///
/// GET /api/guides_active?min_experience=3
///
/// Ordered by experience (most first), then name.
pub async fn list_active(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<GuidesListQuery>,
) -> Result<Json<GuideListResponse>, AppError> {
    let guides = state.guides.find_active(query.min_experience).await?;
    Ok(Json(guides.into()))
}

/// Get a guide by ID
///
/// GET /api/guides/{id}
pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<GuideResponse>, AppError> {
    let guide = state.guides.get_by_id(id).await?;
    Ok(Json(guide.into()))
}

/// Create a guide
///
/// POST /api/guides
///
/// `is_active` may be omitted and defaults to `true`. Responds 201 with a
/// `Location` header pointing at the new guide.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateGuideRequest>,
) -> Result<impl IntoResponse, AppError> {
    let guide = state.guides.create(body.into_dto()).await?;
    let location = format!("/guides/{}", guide.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(GuideResponse::from(guide)),
    ))
}

/// Replace a guide's fields
///
/// PUT /api/guides/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(body): ValidatedJson<UpdateGuideRequest>,
) -> Result<Json<GuideResponse>, AppError> {
    let guide = state.guides.update(id, body.into_dto()).await?;
    Ok(Json(guide.into()))
}

/// Delete a guide and its bookings
///
/// DELETE /api/guides/{id}
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.guides.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
