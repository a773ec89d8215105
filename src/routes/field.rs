use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{dto::field_dto::CreateFieldPayload, error::Result, AppState};

#[axum::debug_handler]
pub async fn list_fields(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let fields = state.field_service.list().await?;
    Ok(Json(fields))
}

#[axum::debug_handler]
pub async fn create_field(
    State(state): State<AppState>,
    Json(payload): Json<CreateFieldPayload>,
) -> Result<impl IntoResponse> {
    let field = state.field_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(field)))
}
