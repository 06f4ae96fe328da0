//! Utilidades JWT
//! 
//! Emisión y verificación de tokens HS256 para pasajeros y administradores.
//! Cada rol firma con su propio secreto, tomado de `EnvironmentConfig`.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

/// Rol del titular del token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenRole {
    User,
    Admin,
}

/// Claims del JWT token
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // id de la cuenta
    pub role: TokenRole,
    pub exp: usize,
    pub iat: usize,
}

impl JwtClaims {
    pub fn account_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.sub).map_err(|_| AppError::Jwt("Invalid token subject".to_string()))
    }
}

/// Configuración de JWT para un rol
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
    pub role: TokenRole,
}

impl JwtConfig {
    pub fn for_users(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.user_jwt_secret.clone(),
            expiration: config.user_jwt_expiration,
            role: TokenRole::User,
        }
    }

    pub fn for_admins(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.admin_jwt_secret.clone(),
            expiration: config.admin_jwt_expiration,
            role: TokenRole::Admin,
        }
    }
}

/// Generar JWT token para una cuenta
pub fn generate_token(account_id: Uuid, config: &JwtConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = JwtClaims {
        sub: account_id.to_string(),
        role: config.role,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generating token: {}", e)))
}

/// Verificar y decodificar JWT token; el rol debe coincidir con la configuración
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))?;

    if token_data.claims.role != config.role {
        return Err(AppError::Jwt("Token issued for another role".to_string()));
    }

    Ok(token_data.claims)
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Authorization header must start with 'Bearer '".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(AppError::Unauthorized("Token cannot be empty".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(role: TokenRole, secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            expiration: 60,
            role,
        }
    }

    #[test]
    fn test_generate_and_verify() {
        let cfg = config(TokenRole::User, "user-secret");
        let id = Uuid::new_v4();
        let token = generate_token(id, &cfg).unwrap();
        let claims = verify_token(&token, &cfg).unwrap();
        assert_eq!(claims.account_id().unwrap(), id);
        assert_eq!(claims.role, TokenRole::User);
    }

    #[test]
    fn test_user_token_rejected_by_admin_secret() {
        let token = generate_token(Uuid::new_v4(), &config(TokenRole::User, "user-secret")).unwrap();
        assert!(verify_token(&token, &config(TokenRole::Admin, "admin-secret")).is_err());
    }

    #[test]
    fn test_role_mismatch_with_same_secret() {
        let token = generate_token(Uuid::new_v4(), &config(TokenRole::User, "shared")).unwrap();
        assert!(verify_token(&token, &config(TokenRole::Admin, "shared")).is_err());
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_token_from_header("Basic abc").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
    }
}
