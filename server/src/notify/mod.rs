//! Confirmation Notifier
//!
//! Fire-and-forget delivery of reservation confirmations to an external
//! webhook. The reservation is already committed when a notification goes
//! out, so delivery failures are logged and never surfaced to the guest.

use serde::Serialize;
use std::time::Duration;

use crate::db::models::ReservationDetail;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Serialize)]
struct ConfirmationPayload<'a> {
    email: &'a str,
    reservation: &'a ReservationDetail,
}

#[derive(Clone, Debug)]
pub struct Notifier {
    client: reqwest::Client,
    webhook_url: Option<String>,
}

impl Notifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            webhook_url,
        }
    }

    /// Post the confirmation payload to the configured webhook, if any
    pub async fn send_confirmation(&self, reservation: &ReservationDetail) {
        let Some(url) = &self.webhook_url else {
            tracing::debug!("No notification webhook configured, skipping confirmation");
            return;
        };

        let payload = ConfirmationPayload {
            email: &reservation.email,
            reservation,
        };

        match self.client.post(url).json(&payload).send().await {
            Ok(resp) if resp.status().is_success() => {
                tracing::info!(email = %reservation.email, "Confirmation notification sent");
            }
            Ok(resp) => {
                tracing::warn!(
                    status = %resp.status(),
                    email = %reservation.email,
                    "Confirmation webhook rejected the notification"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, email = %reservation.email, "Failed to deliver confirmation notification");
            }
        }
    }

    /// Deliver in the background so the HTTP response is never held up
    pub fn spawn_confirmation(&self, reservation: ReservationDetail) {
        let notifier = self.clone();
        tokio::spawn(async move {
            notifier.send_confirmation(&reservation).await;
        });
    }
}
