use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::application_dto::{
        ApplicationListItem, ApplicationResponse, ApplyPayload, UpdateApplicationStatusPayload,
    },
    error::{Error, Result},
    middleware::identity::CurrentUser,
    routes::{ensure_can_manage, parse_id},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/vacancies/{id}/apply",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    request_body = ApplyPayload,
    responses(
        (status = 201, description = "Application submitted"),
        (status = 401, description = "No identity"),
        (status = 409, description = "Already applied to this vacancy")
    )
)]
#[axum::debug_handler]
pub async fn apply_to_vacancy(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(raw_id): Path<String>,
    Json(payload): Json<ApplyPayload>,
) -> Result<impl IntoResponse> {
    let vacancy_id = parse_id(&raw_id, "vacancy")?;
    let Some(Extension(CurrentUser(user))) = user else {
        return Err(Error::Unauthorized("Authentication required".to_string()));
    };
    let application = state
        .application_service
        .apply(vacancy_id, user.id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(ApplicationResponse::from(application))))
}

#[axum::debug_handler]
pub async fn list_vacancy_applications(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    let vacancy_id = parse_id(&raw_id, "vacancy")?;
    let current = user.map(|Extension(current)| current);
    let vacancy = state.vacancy_service.get_by_id(vacancy_id).await?;
    ensure_can_manage(current.as_ref(), vacancy.company_id)?;
    let applications = state.application_service.list_for_vacancy(vacancy_id).await?;
    let items: Vec<ApplicationListItem> = applications.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[axum::debug_handler]
pub async fn update_application_status(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(raw_id): Path<String>,
    Json(payload): Json<UpdateApplicationStatusPayload>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "application")?;
    let current = user.map(|Extension(current)| current);
    let existing = state.application_service.get_by_id(id).await?;
    let vacancy = state.vacancy_service.get_by_id(existing.vacancy_id).await?;
    ensure_can_manage(current.as_ref(), vacancy.company_id)?;
    let changed_by = current.as_ref().map(|CurrentUser(u)| u.id);
    let application = state
        .application_service
        .update_status(id, &payload.status, changed_by)
        .await?;
    Ok(Json(ApplicationResponse::from(application)))
}
