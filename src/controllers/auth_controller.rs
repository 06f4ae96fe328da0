use bcrypt::{hash, verify};
use validator::Validate;

use crate::dto::auth_dto::{AccountResponse, LoginRequest, SignupRequest, TokenResponse};
use crate::models::NewAccount;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::jwt::generate_token;

const INVALID_CREDENTIALS: &str = "incorrect email or password";

/// Hash bcrypt con el coste configurado
pub fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    hash(password, cost).map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))
}

fn verify_password(password: &str, password_hash: &str) -> AppResult<bool> {
    verify(password, password_hash)
        .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub struct AuthController {
    state: AppState,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    fn new_account(&self, request: SignupRequest) -> AppResult<NewAccount> {
        request.validate()?;
        Ok(NewAccount {
            name: request.name.trim().to_string(),
            email: normalize_email(&request.email),
            password_hash: hash_password(&request.password, self.state.config.bcrypt_cost)?,
        })
    }

    pub async fn signup_user(&self, request: SignupRequest) -> AppResult<AccountResponse> {
        let account = self.new_account(request)?;
        let user = self.state.users.create(account).await?;
        tracing::info!("👤 Pasajero registrado: {}", user.id);
        Ok(user.into())
    }

    pub async fn login_user(&self, request: LoginRequest) -> AppResult<TokenResponse> {
        let user = self
            .state
            .users
            .find_by_email(&normalize_email(&request.email))
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            tracing::warn!("🔒 Login fallido para pasajero {}", user.id);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = generate_token(user.id, &self.state.user_jwt)?;
        Ok(TokenResponse::bearer(token))
    }

    pub async fn signup_admin(&self, request: SignupRequest) -> AppResult<AccountResponse> {
        let account = self.new_account(request)?;
        let admin = self.state.admins.create(account).await?;
        tracing::info!("🛡️ Administrador registrado: {}", admin.id);
        Ok(admin.into())
    }

    pub async fn login_admin(&self, request: LoginRequest) -> AppResult<TokenResponse> {
        let admin = self
            .state
            .admins
            .find_by_email(&normalize_email(&request.email))
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&request.password, &admin.password_hash)? {
            tracing::warn!("🔒 Login fallido para administrador {}", admin.id);
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = generate_token(admin.id, &self.state.admin_jwt)?;
        Ok(TokenResponse::bearer(token))
    }
}
