use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::ticket_controller::TicketController;
use crate::dto::seat_dto::{ReservationResponse, ReserveSeatQuery};
use crate::dto::ticket_dto::{
    CreateTicketRequest, TicketDetails, TicketSearchQuery, UpdateTicketRequest,
};
use crate::middleware::{require_user, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Compra y consulta de tickets; modificar o borrar exige ser el dueño
pub fn create_ticket_router(state: AppState) -> Router<AppState> {
    let auth = middleware::from_fn_with_state(state, require_user);

    Router::new()
        .route("/", post(create_ticket).get(list_tickets))
        .route("/search", get(search_tickets))
        .route("/reserve-seat", post(reserve_seat))
        .route("/mine", get(my_tickets).route_layer(auth.clone()))
        .route(
            "/:id",
            put(update_ticket).delete(delete_ticket).route_layer(auth),
        )
}

async fn create_ticket(
    State(state): State<AppState>,
    Json(request): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<TicketDetails>), AppError> {
    let response = TicketController::new(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_tickets(State(state): State<AppState>) -> Result<Json<Vec<TicketDetails>>, AppError> {
    let response = TicketController::new(&state).list().await?;
    Ok(Json(response))
}

async fn search_tickets(
    State(state): State<AppState>,
    Query(query): Query<TicketSearchQuery>,
) -> Result<Json<Vec<TicketDetails>>, AppError> {
    let response = TicketController::new(&state).search(query).await?;
    Ok(Json(response))
}

async fn reserve_seat(
    State(state): State<AppState>,
    Query(query): Query<ReserveSeatQuery>,
) -> Result<Json<ReservationResponse>, AppError> {
    let response = TicketController::new(&state).reserve_seat(query).await?;
    Ok(Json(response))
}

async fn my_tickets(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<TicketDetails>>, AppError> {
    let response = TicketController::new(&state).list_for_user(user.0.id).await?;
    Ok(Json(response))
}

async fn update_ticket(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTicketRequest>,
) -> Result<Json<TicketDetails>, AppError> {
    let response = TicketController::new(&state)
        .update(id, request, Some(user.0.id))
        .await?;
    Ok(Json(response))
}

async fn delete_ticket(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    TicketController::new(&state).delete(id, Some(user.0.id)).await?;
    Ok(Json(json!({
        "success": true,
        "message": "ticket deleted"
    })))
}
