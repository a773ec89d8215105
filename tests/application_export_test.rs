use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    routing::{get, patch, post},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn ensure_test_env() -> bool {
    dotenvy::dotenv().ok();
    if env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set; skipping DB-backed test");
        return false;
    }
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("PUBLIC_RPS", "1000");
    env::set_var("PARTNER_RPS", "1000");
    let _ = careercenter_backend::config::init_config();
    true
}

async fn seed_user(pool: &sqlx::PgPool, email: &str, role: &str, company_id: Option<i64>) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, full_name, role, company_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(email)
    .bind("Test User")
    .bind(role)
    .bind(company_id)
    .fetch_one(pool)
    .await
    .expect("seed user")
}

#[tokio::test]
async fn applications_and_export_flow() {
    if !ensure_test_env() {
        return;
    }
    let pool = careercenter_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");

    let suffix = Utc::now().timestamp_micros();
    let company_id: i64 =
        sqlx::query_scalar("INSERT INTO companies (name, industry) VALUES ($1, 'IT') RETURNING id")
            .bind(format!("Export {}", suffix))
            .fetch_one(&pool)
            .await
            .expect("seed company");
    let empty_company_id: i64 =
        sqlx::query_scalar("INSERT INTO companies (name) VALUES ($1) RETURNING id")
            .bind(format!("Empty {}", suffix))
            .fetch_one(&pool)
            .await
            .expect("seed empty company");
    let vacancy_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO vacancies
            (title, description, company_id, city, salary_min, salary_max, employment_type,
             experience, schedule, requirements, responsibilities, conditions)
        VALUES ($1, 'desc', $2, 'Kazan', 100000, 150000, 'full', '1-3', 'office', 'r', 'r', 'c')
        RETURNING id
        "#,
    )
    .bind(format!("apply-target {}", suffix))
    .bind(company_id)
    .fetch_one(&pool)
    .await
    .expect("seed vacancy");

    let student_email = format!("student_{}@example.com", suffix);
    seed_user(&pool, &student_email, "student", None).await;

    let app_state = careercenter_backend::AppState::new(pool.clone());
    let app = Router::new()
        .route(
            "/api/vacancies/:id/apply",
            post(careercenter_backend::routes::application::apply_to_vacancy),
        )
        .route(
            "/api/vacancies/:id/applications",
            get(careercenter_backend::routes::application::list_vacancy_applications),
        )
        .route(
            "/api/applications/:id/status",
            patch(careercenter_backend::routes::application::update_application_status),
        )
        .route(
            "/api/companies/:id/export",
            get(careercenter_backend::routes::export::export_company_vacancies),
        )
        .with_state(app_state)
        .layer(axum::middleware::from_fn_with_state(
            pool.clone(),
            careercenter_backend::middleware::identity::resolve_identity,
        ));

    // Applying needs an identity.
    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/vacancies/{}/apply", vacancy_id))
        .header("content-type", "application/json")
        .body(Body::from(json!({}).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // First application goes through.
    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/vacancies/{}/apply", vacancy_id))
        .header("content-type", "application/json")
        .header("x-user-email", &student_email)
        .body(Body::from(
            json!({"notes": "Looking forward", "resume_file_url": "https://cv.example/1.pdf"})
                .to_string(),
        ))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let application: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(application["status"], "pending");
    let application_id = application["id"].as_i64().expect("application id");

    // The duplicate is rejected before persistence.
    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/vacancies/{}/apply", vacancy_id))
        .header("content-type", "application/json")
        .header("x-user-email", &student_email)
        .body(Body::from(json!({}).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Partners review applications with applicant data attached.
    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/vacancies/{}/applications", vacancy_id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let listed: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["applicant_email"], student_email.as_str());

    // Status moves through the vocabulary; values outside it are rejected.
    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/api/applications/{}/status", application_id))
        .header("content-type", "application/json")
        .body(Body::from(json!({"status": "reviewed"}).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/api/applications/{}/status", application_id))
        .header("content-type", "application/json")
        .body(Body::from(json!({"status": "archived"}).to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Export carries the XLSX content type and a company-tagged filename.
    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/companies/{}/export", company_id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(
        content_type,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains(&format!("vacancies_{}.xlsx", company_id)));
    let bytes = to_bytes(resp.into_body(), 10 * 1024 * 1024).await.unwrap();
    assert_eq!(&bytes[..2], b"PK");

    // A company with no active vacancies still yields a valid workbook.
    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/companies/{}/export", empty_company_id))
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 10 * 1024 * 1024).await.unwrap();
    assert_eq!(&bytes[..2], b"PK");

    // Non-numeric company id in the path is a client error.
    let req = Request::builder()
        .method("GET")
        .uri("/api/companies/acme/export")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
