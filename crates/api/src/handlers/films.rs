//! Handlers for the film CRUD endpoints.
//!
//! Bodies are extracted as raw JSON and validated by the parse functions in
//! `filmdex_core::film`, so a body that fails the structural check maps to
//! 400 rather than axum's default extractor rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use filmdex_core::film::{FilmPatch, NewFilm};
use filmdex_core::store::{parse_film_id, parse_min_duration};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct ListFilmsParams {
    /// Raw `minimum-duration` filter; validated in `filmdex_core`.
    #[serde(rename = "minimum-duration")]
    pub minimum_duration: Option<String>,
}

/// Unwrap a JSON body extraction, mapping malformed bodies to 400.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    let Json(value) = body.map_err(|err| AppError::BadRequest(err.to_string()))?;
    Ok(value)
}

/// GET /films
///
/// List all films, optionally filtered to `duration >= minimum-duration`.
pub async fn list_films(
    State(state): State<AppState>,
    Query(params): Query<ListFilmsParams>,
) -> AppResult<impl IntoResponse> {
    let min_duration = match params.minimum_duration.as_deref() {
        Some(raw) => Some(parse_min_duration(raw)?),
        None => None,
    };

    let films = state.store.read().await.list(min_duration);
    Ok(Json(films))
}

/// GET /films/{id}
pub async fn get_film(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_film_id(&id)?;
    let film = state.store.read().await.get(id)?;
    Ok(Json(film))
}

/// POST /films
///
/// Create a film from the request body. 201 on success, 409 when a film
/// with the same title and director already exists.
pub async fn create_film(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let new_film = NewFilm::parse(&json_body(body)?)?;
    let film = state.store.write().await.create(new_film)?;

    tracing::info!(id = film.id, title = %film.title, "Film created");

    Ok((StatusCode::CREATED, Json(film)))
}

/// PUT /films/{id}
///
/// Replace the film with the given id, or create a new film (under a fresh
/// id, ignoring the one in the URL) when no film matches.
pub async fn replace_film(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_film_id(&id)?;
    let new_film = NewFilm::parse(&json_body(body)?)?;

    let (film, created) = state.store.write().await.replace_or_create(id, new_film);

    tracing::info!(id = film.id, created, "Film replaced or created");

    Ok(Json(film))
}

/// PATCH /films/{id}
///
/// Merge a partial update over an existing film. Patch fields win; `id`
/// is never changed.
pub async fn patch_film(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_film_id(&id)?;
    let patch = FilmPatch::parse(&json_body(body)?)?;

    let film = state.store.write().await.partial_update(id, patch)?;

    tracing::info!(id = film.id, "Film updated");

    Ok(Json(film))
}

/// DELETE /films/{id}
///
/// Remove a film and return the deleted record.
pub async fn delete_film(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_film_id(&id)?;
    let film = state.store.write().await.delete(id)?;

    tracing::info!(id = film.id, title = %film.title, "Film deleted");

    Ok(Json(film))
}
