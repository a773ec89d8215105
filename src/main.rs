use axum::{
    routing::{get, patch, post},
    Router,
};
use careercenter_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::{identity, rate_limit},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route("/api/vacancies", get(routes::vacancy::list_vacancies))
        .route("/api/vacancies/:id", get(routes::vacancy::get_vacancy))
        .route(
            "/api/vacancies/:id/apply",
            post(routes::application::apply_to_vacancy),
        )
        .route("/api/fields", get(routes::field::list_fields))
        .route("/api/events", get(routes::event::list_events))
        .route("/api/events/:id", get(routes::event::get_event))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::RateLimiter::per_second(config.public_rps),
            rate_limit::rps_middleware,
        ));

    let partner_api = Router::new()
        .route("/api/vacancies", post(routes::vacancy::create_vacancy))
        .route(
            "/api/vacancies/:id",
            patch(routes::vacancy::update_vacancy).delete(routes::vacancy::delete_vacancy),
        )
        .route(
            "/api/vacancies/:id/archive",
            post(routes::vacancy::archive_vacancy),
        )
        .route(
            "/api/vacancies/:id/history",
            get(routes::vacancy::get_vacancy_history),
        )
        .route(
            "/api/vacancies/:id/applications",
            get(routes::application::list_vacancy_applications),
        )
        .route(
            "/api/applications/:id/status",
            patch(routes::application::update_application_status),
        )
        .route(
            "/api/companies",
            get(routes::company::list_companies).post(routes::company::create_company),
        )
        .route(
            "/api/companies/:id",
            get(routes::company::get_company)
                .patch(routes::company::update_company)
                .delete(routes::company::delete_company),
        )
        .route(
            "/api/companies/:id/export",
            get(routes::export::export_company_vacancies),
        )
        .route("/api/events", post(routes::event::create_event))
        .route(
            "/api/events/:id",
            patch(routes::event::update_event).delete(routes::event::delete_event),
        )
        .route("/api/fields", post(routes::field::create_field))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::RateLimiter::per_second(config.partner_rps),
            rate_limit::rps_middleware,
        ));

    let app = base_routes
        .merge(public_api)
        .merge(partner_api)
        .with_state(app_state.clone())
        .layer(axum::middleware::from_fn_with_state(
            app_state.pool.clone(),
            identity::resolve_identity,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
