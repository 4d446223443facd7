//! Bilingual notification email for submitted quotes.
//!
//! Label text on individual lines stays English in both languages; only
//! the headings, the empty-extras placeholder, the no-booking note, and
//! the subject line are translated. That mirrors what the office staff
//! reading these emails actually asked for.

use askama::Template;

use crate::pricing::round_money;

use super::requests::{BookingInfo, QuoteSummary};

/// Display language for the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Es,
}

impl Lang {
    /// Map the wire `lang` field to a language. Anything that is not
    /// exactly `"es"` falls back to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "es" => Lang::Es,
            _ => Lang::En,
        }
    }
}

/// Subject line, named for the customer when the booking carries a name.
pub fn subject_line(lang: Lang, booking: Option<&BookingInfo>) -> String {
    let name = booking
        .map(|b| b.name.as_str())
        .filter(|name| !name.is_empty());
    match lang {
        Lang::Es => format!(
            "Nueva cotización de limpieza - {}",
            name.unwrap_or("Cliente")
        ),
        Lang::En => format!("New cleaning quote - {}", name.unwrap_or("Customer")),
    }
}

/// Rendering context for `templates/email/quote.html`.
///
/// Everything is resolved to display strings up front so the template
/// stays a plain layout; booking fields pass through askama's automatic
/// HTML escaping.
#[derive(Debug, Template)]
#[template(path = "email/quote.html")]
pub struct QuoteEmail {
    pub heading_quote: &'static str,
    pub has_visit: bool,
    pub visit: &'static str,
    pub has_mode: bool,
    pub mode: &'static str,
    pub sqft: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub extras: String,
    pub total: String,
    pub has_booking: bool,
    pub heading_booking: &'static str,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub date: String,
    pub notes: String,
    pub note_no_booking: &'static str,
}

impl QuoteEmail {
    /// Assemble the email context from one submission.
    pub fn build(lang: Lang, quote: &QuoteSummary, booking: Option<&BookingInfo>) -> Self {
        let (heading_quote, heading_booking, note_no_booking, no_extras) = match lang {
            Lang::En => ("Quote", "Booking details", "(No booking info submitted)", "None"),
            Lang::Es => ("Cotización", "Reserva", "(Sin datos de reserva)", "Ninguno"),
        };

        let names = quote.extras.enabled_names();
        let extras = if names.is_empty() {
            no_extras.to_string()
        } else {
            names.join(", ")
        };

        let contact = booking.cloned().unwrap_or_default();

        Self {
            heading_quote,
            has_visit: quote.visit.is_some(),
            visit: quote.visit.map(|v| v.as_str()).unwrap_or_default(),
            has_mode: quote.mode.is_some(),
            mode: quote.mode.map(|m| m.as_str()).unwrap_or_default(),
            sqft: quote.sqft,
            bedrooms: quote.bedrooms,
            bathrooms: quote.bathrooms,
            extras,
            total: format!("{:.2}", round_money(quote.total, 2)),
            has_booking: booking.is_some(),
            heading_booking,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            address: contact.address,
            date: contact.date,
            notes: contact.notes,
            note_no_booking,
        }
    }
}
