use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use chrono::{Duration, Utc};
use serde_json::Value as JsonValue;
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

async fn seed_company(pool: &sqlx::PgPool, name: &str, industry: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO companies (name, industry) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(industry)
    .fetch_one(pool)
    .await
    .expect("seed company")
}

#[allow(clippy::too_many_arguments)]
async fn seed_vacancy(
    pool: &sqlx::PgPool,
    company_id: i64,
    field_id: Option<i64>,
    title: &str,
    is_active: bool,
    salary_min: Option<i32>,
    city: &str,
    employment_type: Option<&str>,
    created_offset_minutes: i64,
) -> i64 {
    let created_at = Utc::now() - Duration::minutes(created_offset_minutes);
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO vacancies
            (title, description, company_id, field_id, is_active, salary_min, city,
             employment_type, requirements, responsibilities, conditions, created_at)
        VALUES ($1, 'desc', $2, $3, $4, $5, $6, $7, 'req', 'resp', 'cond', $8)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(company_id)
    .bind(field_id)
    .bind(is_active)
    .bind(salary_min)
    .bind(city)
    .bind(employment_type)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .expect("seed vacancy")
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
    };
    (status, body)
}

fn item_ids(body: &JsonValue) -> Vec<i64> {
    body["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["id"].as_i64())
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn filter_pipeline_end_to_end() {
    if !ensure_test_env() {
        return;
    }
    let pool = careercenter_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");

    let suffix = Utc::now().timestamp_micros();
    let it_company = seed_company(&pool, &format!("Acme {}", suffix), "Software").await;
    let fin_company = seed_company(&pool, &format!("FinCo {}", suffix), "Finance").await;
    let field_id: i64 =
        sqlx::query_scalar("INSERT INTO fields_of_study (name) VALUES ($1) RETURNING id")
            .bind(format!("Applied CS {}", suffix))
            .fetch_one(&pool)
            .await
            .expect("seed field");

    let tag = format!("vac{}", suffix);
    let backend = seed_vacancy(
        &pool,
        it_company,
        Some(field_id),
        &format!("{} backend", tag),
        true,
        Some(100_000),
        "Kazan",
        Some("full"),
        30,
    )
    .await;
    let frontend = seed_vacancy(
        &pool,
        it_company,
        None,
        &format!("{} frontend", tag),
        true,
        None,
        "Moscow",
        Some("part"),
        5,
    )
    .await;
    let archived = seed_vacancy(
        &pool,
        fin_company,
        None,
        &format!("{} archived", tag),
        false,
        Some(500_000),
        "Kazan",
        None,
        1,
    )
    .await;

    let app_state = careercenter_backend::AppState::new(pool.clone());
    let app = Router::new()
        .route(
            "/api/vacancies",
            get(careercenter_backend::routes::vacancy::list_vacancies),
        )
        .with_state(app_state);

    // Default path: archived vacancies hidden, newest first.
    let (status, body) = get_json(&app, &format!("/api/vacancies?position={}", tag)).await;
    assert_eq!(status, StatusCode::OK);
    let ids = item_ids(&body);
    assert_eq!(ids, vec![frontend, backend]);

    // Salary threshold drops rows whose own salary_min is unset.
    let (status, body) = get_json(
        &app,
        &format!("/api/vacancies?position={}&salary_min=50000", tag),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_ids(&body), vec![backend]);

    // Threshold above every row keeps the result empty but successful.
    let (status, body) = get_json(
        &app,
        &format!("/api/vacancies?position={}&salary_min=900000", tag),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(item_ids(&body).is_empty());

    // Out-of-vocabulary enum values are client errors.
    let (status, _) = get_json(
        &app,
        &format!("/api/vacancies?position={}&employment_type=freelance", tag),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Sentinel value means "any".
    let (status, body) = get_json(
        &app,
        &format!(
            "/api/vacancies?position={}&employment_type=-1&experience=-1",
            tag
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_ids(&body).len(), 2);

    // A specialization id that resolves narrows the set; one that does not
    // is an error, never an empty success.
    let (status, body) = get_json(
        &app,
        &format!("/api/vacancies?position={}&specialization={}", tag, field_id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_ids(&body), vec![backend]);

    let (status, body) = get_json(
        &app,
        &format!("/api/vacancies?position={}&specialization=999999999", tag),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid specialization");

    // City matches exactly but case-insensitively.
    let (status, body) = get_json(
        &app,
        &format!("/api/vacancies?position={}&city=KAZAN", tag),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_ids(&body), vec![backend]);

    // Industry traverses the company relation; explicit is_active reaches
    // archived rows.
    let (status, body) = get_json(
        &app,
        &format!(
            "/api/vacancies?position={}&company__industry=fin&is_active=false",
            tag
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_ids(&body), vec![archived]);

    // Ascending salary ordering, salary-less rows at the end.
    let (status, body) = get_json(
        &app,
        &format!("/api/vacancies?position={}&ordering=salary_min", tag),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_ids(&body), vec![backend, frontend]);

    let (status, _) = get_json(
        &app,
        &format!("/api/vacancies?position={}&ordering=title", tag),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // "mine" without identity is an empty page, not an error.
    let (status, body) = get_json(&app, &format!("/api/vacancies?position={}&scope=mine", tag)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(item_ids(&body).is_empty());
    assert_eq!(body["total"], 0);

    // Company data rides along in the same response.
    let (_, body) = get_json(&app, &format!("/api/vacancies?position={}", tag)).await;
    assert_eq!(body["items"][1]["company"]["industry"], "Software");
}
