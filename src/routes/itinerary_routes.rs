use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::itinerary_controller::ItineraryController;
use crate::dto::itinerary_dto::{ItineraryResponse, ItinerarySearchQuery};
use crate::dto::seat_dto::SeatMapResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Consulta pública de itinerarios y mapas de asientos
pub fn create_itinerary_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_itineraries))
        .route("/search", get(search_itineraries))
        .route("/:id", get(get_itinerary))
        .route("/:id/seats", get(get_seat_map))
}

async fn list_itineraries(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItineraryResponse>>, AppError> {
    let response = ItineraryController::new(&state).list().await?;
    Ok(Json(response))
}

async fn search_itineraries(
    State(state): State<AppState>,
    Query(query): Query<ItinerarySearchQuery>,
) -> Result<Json<Vec<ItineraryResponse>>, AppError> {
    let response = ItineraryController::new(&state).search(query).await?;
    Ok(Json(response))
}

async fn get_itinerary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let response = ItineraryController::new(&state).get(id).await?;
    Ok(Json(response))
}

async fn get_seat_map(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SeatMapResponse>, AppError> {
    let response = ItineraryController::new(&state).seat_map(id).await?;
    Ok(Json(response))
}
