//! Quote submission and email notification.
//!
//! `POST /api/quote` receives the quote the calculator already showed
//! the customer, plus optional booking contact details, renders a
//! bilingual HTML summary, and forwards it to the office mailbox through
//! the Resend REST API. One outbound call per submit; no retries.

pub mod email;
pub mod mailer;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use mailer::Mailer;
pub use routes::router;
