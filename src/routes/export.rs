use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{error::Result, routes::parse_id, services::export_service::ExportService, AppState};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Export a company's active vacancies as XLSX. A company with nothing to
/// show still yields a valid workbook with the header row only.
#[utoipa::path(
    get,
    path = "/api/companies/{id}/export",
    params(
        ("id" = i64, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "XLSX attachment"),
        (status = 400, description = "Non-numeric ID")
    )
)]
#[axum::debug_handler]
pub async fn export_company_vacancies(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    let company_id = parse_id(&raw_id, "company")?;
    let rows = state.vacancy_service.list_for_export(company_id).await?;
    let buffer = ExportService::generate_vacancies_xlsx(&rows)?;

    let disposition = format!("attachment; filename=\"vacancies_{}.xlsx\"", company_id);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    ))
}
