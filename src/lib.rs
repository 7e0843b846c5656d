pub mod auth;
pub mod config;
pub mod db;
pub mod email;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::email::Mailer;
use crate::state::{AppState, SharedState};

/// Front-end origins allowed to call the API with credentials.
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "https://gatehouse-web.vercel.app"];

pub fn build_app(pool: PgPool, config: Config) -> Router {
    // Build mailer
    let mailer = config.smtp.as_ref().and_then(|smtp| match Mailer::new(smtp) {
        Ok(mailer) => {
            tracing::info!("SMTP configured");
            Some(Arc::new(mailer))
        }
        Err(e) => {
            tracing::warn!("SMTP not available: {e}");
            None
        }
    });

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        mailer,
    });

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(ALLOWED_ORIGINS.map(HeaderValue::from_static)))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        .merge(routes::auth_routes())
        .route("/", get(root))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "gatehouse backend running" }))
}
