//! Shared application state
//!
//! Everything the Axum router hands to request handlers: the connection
//! pool, the runtime configuration and a shared HTTP client for outbound
//! webhook calls.

use reqwest::Client;
use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::services::notification_service::NotificationService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub http_client: Client,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            http_client: Client::new(),
        }
    }

    pub fn notifier(&self) -> NotificationService {
        NotificationService::new(self.http_client.clone(), self.config.notify_webhook_url.clone())
    }
}
