//! Response DTOs for the quote submission endpoint.

use serde::Serialize;

/// Acknowledgment body for `POST /api/quote`.
///
/// `{"ok":true}` when the notification went out; `{"ok":false,"error":..}`
/// alongside a non-2xx status when it did not.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteAck {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuoteAck {
    pub fn accepted() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}
