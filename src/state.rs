//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: repositorios, configuración y la
//! configuración JWT de cada rol.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{
    AdminRepository, ItineraryRepository, PgAdminRepository, PgItineraryRepository,
    PgTicketRepository, PgUserRepository, TicketRepository, UserRepository,
};
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub user_jwt: JwtConfig,
    pub admin_jwt: JwtConfig,
    pub itineraries: Arc<dyn ItineraryRepository>,
    pub tickets: Arc<dyn TicketRepository>,
    pub users: Arc<dyn UserRepository>,
    pub admins: Arc<dyn AdminRepository>,
}

impl AppState {
    /// Estado respaldado por PostgreSQL
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self::with_repositories(
            config,
            Arc::new(PgItineraryRepository::new(pool.clone())),
            Arc::new(PgTicketRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgAdminRepository::new(pool)),
        )
    }

    /// Estado con repositorios arbitrarios (tests, herramientas)
    pub fn with_repositories(
        config: EnvironmentConfig,
        itineraries: Arc<dyn ItineraryRepository>,
        tickets: Arc<dyn TicketRepository>,
        users: Arc<dyn UserRepository>,
        admins: Arc<dyn AdminRepository>,
    ) -> Self {
        Self {
            user_jwt: JwtConfig::for_users(&config),
            admin_jwt: JwtConfig::for_admins(&config),
            config,
            itineraries,
            tickets,
            users,
            admins,
        }
    }
}
