pub mod auth;

use axum::Router;
use axum::routing::post;

use crate::state::SharedState;

pub fn auth_routes() -> Router<SharedState> {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/forgot-password", post(auth::forgot_password))
        .route("/auth/reset-password", post(auth::reset_password))
}
