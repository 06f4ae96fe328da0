use uuid::Uuid;
use validator::Validate;

use crate::controllers::auth_controller::hash_password;
use crate::dto::auth_dto::{AccountResponse, UpdateUserRequest};
use crate::models::UserChanges;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};

pub struct UserController {
    state: AppState,
}

impl UserController {
    pub fn new(state: &AppState) -> Self {
        Self { state: state.clone() }
    }

    pub async fn list(&self) -> AppResult<Vec<AccountResponse>> {
        let users = self.state.users.list().await?;
        Ok(users.into_iter().map(AccountResponse::from).collect())
    }

    pub async fn update(&self, id: Uuid, request: UpdateUserRequest) -> AppResult<AccountResponse> {
        request.validate()?;

        let mut user = self
            .state
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("user"))?;

        let password_hash = match request.password.as_deref() {
            Some(password) => Some(hash_password(password, self.state.config.bcrypt_cost)?),
            None => None,
        };

        UserChanges {
            name: request.name.map(|n| n.trim().to_string()),
            email: request.email.map(|e| e.trim().to_lowercase()),
            password_hash,
        }
        .apply(&mut user);

        let updated = self.state.users.update(&user).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.state.users.delete(id).await? {
            return Err(not_found_error("user"));
        }
        tracing::info!("🗑️ Pasajero eliminado: {}", id);
        Ok(())
    }
}
