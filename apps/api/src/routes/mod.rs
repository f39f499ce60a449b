pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::guidance::handlers as guidance;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions & profile
        .route(
            "/api/v1/sessions",
            post(session::handle_create_session).delete(session::handle_delete_session),
        )
        .route("/api/v1/sessions/signup", post(session::handle_signup))
        .route("/api/v1/sessions/login", post(session::handle_login))
        .route("/api/v1/sessions/logout", post(session::handle_logout))
        .route(
            "/api/v1/profile",
            get(session::handle_get_profile).put(session::handle_update_profile),
        )
        // Opportunities (program filter)
        .route("/api/v1/opportunities", get(catalog::handle_opportunities))
        // Career guidance
        .route("/api/v1/guidance", get(guidance::handle_get_guidance))
        .route("/api/v1/guidance/ask", post(guidance::handle_ask))
        .route("/api/v1/guidance/clear", post(guidance::handle_clear_guidance))
        // Emotional support
        .route("/api/v1/support/message", post(guidance::handle_support_message))
        .route("/api/v1/support/clear", post(guidance::handle_clear_support))
        // In-app help
        .route("/api/v1/help/message", post(guidance::handle_help_message))
        .route("/api/v1/help/clear", post(guidance::handle_clear_help))
        .with_state(state)
}
