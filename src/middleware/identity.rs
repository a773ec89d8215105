use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use sqlx::PgPool;

use crate::models::user::User;

/// Identity established by the upstream gateway. Authentication itself is an
/// external concern; this service only resolves the forwarded email to a
/// user row for scoping and attribution.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

pub const IDENTITY_HEADER: &str = "x-user-email";

pub async fn resolve_identity(
    State(pool): State<PgPool>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let email = req
        .headers()
        .get(IDENTITY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    if let Some(email) = email {
        match sqlx::query_as::<_, User>(
            "SELECT id, email, full_name, role, company_id, created_at FROM users WHERE email = $1",
        )
        .bind(&email)
        .fetch_optional(&pool)
        .await
        {
            Ok(Some(user)) => {
                req.extensions_mut().insert(CurrentUser(user));
            }
            Ok(None) => {
                tracing::warn!(email = %email, "identity header did not resolve to a user");
            }
            Err(err) => {
                tracing::error!(error = ?err, "identity lookup failed");
            }
        }
    }

    next.run(req).await
}
