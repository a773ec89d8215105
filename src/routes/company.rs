use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::company_dto::{CreateCompanyPayload, UpdateCompanyPayload},
    error::Result,
    middleware::identity::CurrentUser,
    routes::parse_id,
    AppState,
};

#[axum::debug_handler]
pub async fn list_companies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let companies = state.company_service.list().await?;
    Ok(Json(companies))
}

#[axum::debug_handler]
pub async fn get_company(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "company")?;
    let company = state.company_service.get_by_id(id).await?;
    Ok(Json(company))
}

#[utoipa::path(
    post,
    path = "/api/companies",
    request_body = CreateCompanyPayload,
    responses(
        (status = 201, description = "Company created successfully"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_company(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(payload): Json<CreateCompanyPayload>,
) -> Result<impl IntoResponse> {
    let changed_by = user.map(|Extension(CurrentUser(u))| u.id);
    let company = state.company_service.create(payload, changed_by).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

#[axum::debug_handler]
pub async fn update_company(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(raw_id): Path<String>,
    Json(payload): Json<UpdateCompanyPayload>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "company")?;
    let changed_by = user.map(|Extension(CurrentUser(u))| u.id);
    let company = state.company_service.update(id, payload, changed_by).await?;
    Ok(Json(company))
}

#[axum::debug_handler]
pub async fn delete_company(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "company")?;
    let changed_by = user.map(|Extension(CurrentUser(u))| u.id);
    state.company_service.delete(id, changed_by).await?;
    Ok(StatusCode::NO_CONTENT)
}
