use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::auth_controller::AuthController;
use crate::controllers::itinerary_controller::ItineraryController;
use crate::controllers::ticket_controller::TicketController;
use crate::controllers::user_controller::UserController;
use crate::dto::auth_dto::{
    AccountResponse, LoginRequest, SignupRequest, TokenResponse, UpdateUserRequest,
};
use crate::dto::itinerary_dto::{CreateItineraryRequest, ItineraryResponse, UpdateItineraryRequest};
use crate::dto::ticket_dto::{TicketDetails, UpdateTicketRequest};
use crate::middleware::{require_admin, AuthenticatedAdmin};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Panel de administración: itinerarios, tickets y pasajeros
pub fn create_admin_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route("/itineraries", post(create_itinerary).get(list_itineraries))
        .route(
            "/itineraries/:id",
            get(get_itinerary).put(update_itinerary).delete(delete_itinerary),
        )
        .route("/itineraries/:id/passengers", get(itinerary_passengers))
        .route("/tickets", get(list_tickets))
        .route(
            "/tickets/:id",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
        .route("/passengers", get(list_passengers))
        .route("/passengers/:id", put(update_passenger))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .merge(protected)
}

async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let response = AuthController::new(&state).signup_admin(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthController::new(&state).login_admin(request).await?;
    Ok(Json(response))
}

async fn me(Extension(admin): Extension<AuthenticatedAdmin>) -> Json<AccountResponse> {
    Json(admin.0.into())
}

async fn create_itinerary(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Json(request): Json<CreateItineraryRequest>,
) -> Result<(StatusCode, Json<ItineraryResponse>), AppError> {
    let response = ItineraryController::new(&state)
        .create(admin.0.id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_itineraries(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItineraryResponse>>, AppError> {
    let response = ItineraryController::new(&state).list().await?;
    Ok(Json(response))
}

async fn get_itinerary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let response = ItineraryController::new(&state).get(id).await?;
    Ok(Json(response))
}

async fn update_itinerary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateItineraryRequest>,
) -> Result<Json<ItineraryResponse>, AppError> {
    let response = ItineraryController::new(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn delete_itinerary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    ItineraryController::new(&state).delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "trip deleted"
    })))
}

async fn itinerary_passengers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<TicketDetails>>, AppError> {
    let response = ItineraryController::new(&state).passengers(id).await?;
    Ok(Json(response))
}

async fn list_tickets(State(state): State<AppState>) -> Result<Json<Vec<TicketDetails>>, AppError> {
    let response = TicketController::new(&state).list().await?;
    Ok(Json(response))
}

async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TicketDetails>, AppError> {
    let response = TicketController::new(&state).get(id).await?;
    Ok(Json(response))
}

async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTicketRequest>,
) -> Result<Json<TicketDetails>, AppError> {
    let response = TicketController::new(&state).update(id, request, None).await?;
    Ok(Json(response))
}

async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    TicketController::new(&state).delete(id, None).await?;
    Ok(Json(json!({
        "success": true,
        "message": "ticket deleted"
    })))
}

async fn list_passengers(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let response = UserController::new(&state).list().await?;
    Ok(Json(response))
}

async fn update_passenger(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let response = UserController::new(&state).update(id, request).await?;
    Ok(Json(response))
}
