//! Webhook notifications
//!
//! Fire-and-forget event posts to an optional external webhook. Delivery
//! failures are logged and never surface to the caller.

use serde_json::json;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct NotificationService {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl NotificationService {
    pub fn new(client: reqwest::Client, webhook_url: Option<String>) -> Self {
        Self { client, webhook_url }
    }

    pub async fn notify(&self, event: &str, payload: serde_json::Value) {
        let Some(url) = &self.webhook_url else {
            debug!(event, "no webhook configured, skipping notification");
            return;
        };

        let body = json!({
            "event": event,
            "payload": payload,
            "sent_at": chrono::Utc::now().to_rfc3339(),
        });

        match self.client.post(url).json(&body).send().await {
            Ok(response) if response.status().is_success() => {
                debug!(event, "notification delivered");
            }
            Ok(response) => {
                warn!(event, status = %response.status(), "webhook rejected notification");
            }
            Err(e) => {
                warn!(event, error = %e, "failed to deliver notification");
            }
        }
    }
}
