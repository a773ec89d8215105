use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::vacancy_dto::{
        CreateVacancyPayload, UpdateVacancyPayload, VacancyListResponse, VacancyResponse,
    },
    error::Result,
    filters::{VacancyFilter, VacancyQuery},
    middleware::identity::CurrentUser,
    routes::{ensure_can_manage, parse_id},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/vacancies",
    params(
        ("position" = Option<String>, Query, description = "Substring match against the title"),
        ("specialization" = Option<String>, Query, description = "Field of study id, -1 for any"),
        ("employment_type" = Option<String>, Query, description = "Employment type code, -1 for any"),
        ("experience" = Option<String>, Query, description = "Experience code, -1 for any"),
        ("is_active" = Option<String>, Query, description = "Explicit active flag"),
        ("salary_min" = Option<String>, Query, description = "Lower salary bound"),
        ("city" = Option<String>, Query, description = "Exact city, case-insensitive"),
        ("company__industry" = Option<String>, Query, description = "Substring match against the company industry"),
        ("ordering" = Option<String>, Query, description = "salary_min | -salary_min | salary_max | -salary_max"),
        ("scope" = Option<String>, Query, description = "mine = own company's vacancies"),
        ("page" = Option<i64>, Query, description = "Page number"),
        ("per_page" = Option<i64>, Query, description = "Items per page")
    ),
    responses(
        (status = 200, description = "List of vacancies", body = Json<VacancyListResponse>),
        (status = 400, description = "Invalid filter value")
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Query(query): Query<VacancyQuery>,
) -> Result<impl IntoResponse> {
    let current = user.map(|Extension(current)| current);
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
    let mut filter = VacancyFilter::parse(&query)?;

    let company_scope = if query.scope.as_deref() == Some("mine") {
        match current.as_ref().and_then(|CurrentUser(u)| u.company_id) {
            Some(company_id) => Some(company_id),
            // No identity or no affiliation: an empty page, never an error
            // and never the global set.
            None => {
                return Ok(Json(VacancyListResponse {
                    items: vec![],
                    total: 0,
                    page,
                    per_page,
                    total_pages: 0,
                }))
            }
        }
    } else {
        // The default listing path hides archived vacancies unless the
        // caller asked for an explicit flag.
        if filter.is_active.is_none() {
            filter.is_active = Some(true);
        }
        None
    };

    let list = state
        .vacancy_service
        .list(&filter, page, per_page, company_scope)
        .await?;
    Ok(Json(VacancyListResponse::from(list)))
}

#[utoipa::path(
    get,
    path = "/api/vacancies/{id}",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy found", body = Json<VacancyResponse>),
        (status = 400, description = "Non-numeric ID"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "vacancy")?;
    let vacancy = state.vacancy_service.get_by_id(id).await?;
    Ok(Json(VacancyResponse::from(vacancy)))
}

#[utoipa::path(
    post,
    path = "/api/vacancies",
    request_body = CreateVacancyPayload,
    responses(
        (status = 201, description = "Vacancy created successfully", body = Json<VacancyResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Json(payload): Json<CreateVacancyPayload>,
) -> Result<impl IntoResponse> {
    let current = user.map(|Extension(current)| current);
    ensure_can_manage(current.as_ref(), payload.company_id)?;
    let changed_by = current.as_ref().map(|CurrentUser(u)| u.id);
    let vacancy = state.vacancy_service.create(payload, changed_by).await?;
    Ok((StatusCode::CREATED, Json(VacancyResponse::from(vacancy))))
}

#[utoipa::path(
    patch,
    path = "/api/vacancies/{id}",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    request_body = UpdateVacancyPayload,
    responses(
        (status = 200, description = "Vacancy updated successfully", body = Json<VacancyResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn update_vacancy(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(raw_id): Path<String>,
    Json(payload): Json<UpdateVacancyPayload>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "vacancy")?;
    let current = user.map(|Extension(current)| current);
    let existing = state.vacancy_service.get_by_id(id).await?;
    ensure_can_manage(current.as_ref(), existing.company_id)?;
    let changed_by = current.as_ref().map(|CurrentUser(u)| u.id);
    let vacancy = state.vacancy_service.update(id, payload, changed_by).await?;
    Ok(Json(VacancyResponse::from(vacancy)))
}

#[utoipa::path(
    post,
    path = "/api/vacancies/{id}/archive",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy archived", body = Json<VacancyResponse>),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn archive_vacancy(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "vacancy")?;
    let current = user.map(|Extension(current)| current);
    let existing = state.vacancy_service.get_by_id(id).await?;
    ensure_can_manage(current.as_ref(), existing.company_id)?;
    let changed_by = current.as_ref().map(|CurrentUser(u)| u.id);
    let vacancy = state.vacancy_service.archive(id, changed_by).await?;
    Ok(Json(VacancyResponse::from(vacancy)))
}

#[utoipa::path(
    delete,
    path = "/api/vacancies/{id}",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 204, description = "Vacancy deleted successfully"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_vacancy(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "vacancy")?;
    let current = user.map(|Extension(current)| current);
    let existing = state.vacancy_service.get_by_id(id).await?;
    ensure_can_manage(current.as_ref(), existing.company_id)?;
    let changed_by = current.as_ref().map(|CurrentUser(u)| u.id);
    state.vacancy_service.delete(id, changed_by).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Revision trail of one vacancy, newest snapshot first.
#[axum::debug_handler]
pub async fn get_vacancy_history(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = parse_id(&raw_id, "vacancy")?;
    let current = user.map(|Extension(current)| current);
    let existing = state.vacancy_service.get_by_id(id).await?;
    ensure_can_manage(current.as_ref(), existing.company_id)?;
    let revisions = state.history_service.list("vacancy", id).await?;
    Ok(Json(revisions))
}
