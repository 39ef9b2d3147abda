pub mod candidate_routes;
pub mod health;

use axum::{routing::get, Router};

use crate::AppState;

pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/candidates",
            get(candidate_routes::list_candidates).post(candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/dashboard",
            get(candidate_routes::get_dashboard),
        )
        .route(
            "/api/candidates/:id",
            axum::routing::put(candidate_routes::update_candidate)
                .delete(candidate_routes::delete_candidate),
        )
}
