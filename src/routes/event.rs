use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::event_dto::{CreateEventPayload, UpdateEventPayload},
    error::Result,
    routes::parse_id,
    AppState,
};

#[axum::debug_handler]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let events = state.event_service.list().await?;
    Ok(Json(events))
}

#[axum::debug_handler]
pub async fn get_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "event")?;
    let event = state.event_service.get_by_id(id).await?;
    Ok(Json(event))
}

#[axum::debug_handler]
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventPayload>,
) -> Result<impl IntoResponse> {
    let event = state.event_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[axum::debug_handler]
pub async fn update_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(payload): Json<UpdateEventPayload>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "event")?;
    let event = state.event_service.update(id, payload).await?;
    Ok(Json(event))
}

#[axum::debug_handler]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "event")?;
    state.event_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
