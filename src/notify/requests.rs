//! Request DTOs for the quote submission endpoint.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::pricing::{Extras, PricingMode, VisitType};

/// Body of `POST /api/quote`.
///
/// Every field tolerates absence. The form submits whatever state it
/// has, and the notification endpoint passes it along rather than
/// rejecting a quote the customer already saw on screen.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuoteRequest {
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub quote: QuoteSummary,
    #[serde(default)]
    pub booking: Option<BookingInfo>,
}

/// Calculator state as the front end last displayed it.
///
/// `total` arrives already rounded; the endpoint formats it but never
/// reprices.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct QuoteSummary {
    #[serde(default)]
    pub mode: Option<PricingMode>,
    #[serde(default)]
    pub visit: Option<VisitType>,
    #[serde(default)]
    pub sqft: i32,
    #[serde(default)]
    pub bedrooms: i32,
    #[serde(default)]
    pub bathrooms: i32,
    #[serde(default)]
    pub extras: Extras,
    #[serde(default)]
    pub total: Decimal,
}

/// Contact details volunteered with a quote.
///
/// Never validated; carried opaquely into the notification email, where
/// the template engine escapes them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookingInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date: String,
    pub notes: String,
}
