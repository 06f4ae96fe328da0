//! Routers HTTP
//! 
//! Cada área expone su propio router; `create_app` los monta bajo
//! `/api/v1` junto con el health check, trazas y CORS.

pub mod admin_routes;
pub mod itinerary_routes;
pub mod ticket_routes;
pub mod user_routes;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors_layer;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .nest("/users", user_routes::create_user_router(state.clone()))
        .nest("/admin", admin_routes::create_admin_router(state.clone()))
        .nest("/itineraries", itinerary_routes::create_itinerary_router())
        .nest("/tickets", ticket_routes::create_ticket_router(state.clone()));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
