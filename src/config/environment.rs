//! Configuración de variables de entorno
//! 
//! Este módulo maneja la configuración del entorno. Los secretos JWT se leen
//! aquí y viajan en el `AppState`, nunca como constantes de módulo.

use std::env;

use anyhow::{anyhow, Context, Result};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub user_jwt_secret: String,
    pub user_jwt_expiration: u64,
    pub admin_jwt_secret: String,
    pub admin_jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub bcrypt_cost: u32,
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: parse_or("PORT", 8000)?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            user_jwt_secret: required("USER_JWT_SECRET")?,
            user_jwt_expiration: parse_or("USER_JWT_EXPIRATION", 1800)?,
            admin_jwt_secret: required("ADMIN_JWT_SECRET")?,
            admin_jwt_expiration: parse_or("ADMIN_JWT_EXPIRATION", 3600)?,
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            bcrypt_cost: parse_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Sin orígenes configurados (o con `*`) el CORS es permisivo
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn required(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(anyhow!("{} must be set", key)),
    }
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}
