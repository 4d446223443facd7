//! Quote submission route handlers.

use askama::Template;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::email::{subject_line, Lang, QuoteEmail};
use super::requests::SubmitQuoteRequest;
use super::responses::QuoteAck;

/// API routes for quote submission.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/quote", post(submit))
}

/// `POST /api/quote`: format the submitted quote and email it to the
/// office mailbox.
///
/// The body is taken as a `Result` so a malformed payload surfaces as the
/// same `{ok:false}` acknowledgment shape as a delivery failure, with the
/// extractor's own status code.
async fn submit(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubmitQuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteAck>> {
    let Json(submission) = payload?;

    let lang = Lang::from_code(&submission.lang);
    let booking = submission.booking.as_ref();
    let subject = subject_line(lang, booking);
    let html = QuoteEmail::build(lang, &submission.quote, booking).render()?;

    state.mailer.send(&subject, &html).await?;

    tracing::info!("Quote notification sent: {}", subject);

    Ok(Json(QuoteAck::accepted()))
}
