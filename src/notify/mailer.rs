//! Outbound delivery through the Resend REST API.

use std::fmt;

use serde_json::{json, Value};

use crate::error::{AppError, Result};

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Fixed sender identity. Resend's shared onboarding address works
/// without a verified domain; swap it once the business verifies one.
const FROM_ADDRESS: &str = "Mendoza Quotes <onboarding@resend.dev>";

/// Resend client bound to one API key and one destination mailbox.
///
/// Cheap to clone; the inner reqwest client shares its connection pool
/// across clones.
#[derive(Clone)]
pub struct Mailer {
    client: reqwest::Client,
    api_key: String,
    to_email: String,
}

// The API key must never reach logs.
impl fmt::Debug for Mailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailer")
            .field("to_email", &self.to_email)
            .finish_non_exhaustive()
    }
}

impl Mailer {
    pub fn new(api_key: String, to_email: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            to_email,
        }
    }

    fn request_body(&self, subject: &str, html: &str) -> Value {
        json!({
            "from": FROM_ADDRESS,
            "to": [self.to_email],
            "subject": subject,
            "html": html,
        })
    }

    /// Deliver one notification: a single POST, no retries.
    ///
    /// A transport failure maps to [`AppError::DeliveryFailed`]; a non-2xx
    /// answer from Resend maps to [`AppError::DeliveryRejected`] carrying
    /// the provider's status and body for the caller to forward.
    pub async fn send(&self, subject: &str, html: &str) -> Result<()> {
        let response = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(subject, html))
            .send()
            .await
            .map_err(|err| AppError::DeliveryFailed(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::DeliveryRejected { status, body });
        }

        Ok(())
    }
}
