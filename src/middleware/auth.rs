//! Middleware de autenticación JWT
//! 
//! Valida el token bearer con la configuración del rol correspondiente,
//! carga la cuenta y la inyecta en las extensions de la request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    models::{Admin, User},
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token, JwtClaims, JwtConfig},
    },
};

/// Pasajero autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Administrador autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin(pub Admin);

fn bearer_claims(request: &Request, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Authorization token required".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    verify_token(token, config)
}

/// Middleware para rutas de pasajeros
pub async fn require_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = bearer_claims(&request, &state.user_jwt)?;

    let user = state
        .users
        .find_by_id(claims.account_id()?)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Could not validate credentials".to_string()))?;

    request.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(request).await)
}

/// Middleware para rutas de administración
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = bearer_claims(&request, &state.admin_jwt)?;

    let admin = state
        .admins
        .find_by_id(claims.account_id()?)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Could not validate credentials".to_string()))?;

    request.extensions_mut().insert(AuthenticatedAdmin(admin));

    Ok(next.run(request).await)
}
