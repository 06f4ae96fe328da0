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
use crate::controllers::user_controller::UserController;
use crate::dto::auth_dto::{
    AccountResponse, LoginRequest, SignupRequest, TokenResponse, UpdateUserRequest,
};
use crate::middleware::{require_user, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de pasajeros: registro y login públicos, el resto autenticado
pub fn create_user_router(state: AppState) -> Router<AppState> {
    let auth = middleware::from_fn_with_state(state, require_user);

    Router::new()
        .route(
            "/",
            post(signup).merge(get(list_users).route_layer(auth.clone())),
        )
        .route("/login", post(login))
        .route("/me", get(me).route_layer(auth.clone()))
        .route(
            "/:id",
            put(update_user).delete(delete_user).route_layer(auth),
        )
}

fn ensure_self(user: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
    if user.0.id != id {
        return Err(AppError::Forbidden(
            "cannot modify another user's account".to_string(),
        ));
    }
    Ok(())
}

async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError> {
    let response = AuthController::new(&state).signup_user(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthController::new(&state).login_user(request).await?;
    Ok(Json(response))
}

async fn me(Extension(user): Extension<AuthenticatedUser>) -> Json<AccountResponse> {
    Json(user.0.into())
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let response = UserController::new(&state).list().await?;
    Ok(Json(response))
}

async fn update_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    ensure_self(&user, id)?;
    let response = UserController::new(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn delete_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    ensure_self(&user, id)?;
    UserController::new(&state).delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "user deleted"
    })))
}
