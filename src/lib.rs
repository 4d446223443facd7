//! Backend for the Mendoza Cleaning Services website.
//!
//! Serves the static marketing site and one API route: `POST /api/quote`,
//! which emails a submitted quote to the office mailbox. The quote math
//! itself lives in [`pricing`] as pure functions with no I/O, so the
//! calculator can run anywhere and the server never reprices what the
//! customer already saw.

pub mod config;
pub mod error;
pub mod notify;
pub mod pricing;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::notify::Mailer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub mailer: Mailer,
}

/// Assemble the application router.
///
/// API routes take precedence; everything else falls through to the
/// static site, with `index.html` standing in for unknown paths so
/// client-side navigation deep-links correctly.
pub fn app(state: AppState, static_dir: &str) -> Router {
    let index = format!("{}/index.html", static_dir);
    let site = ServeDir::new(static_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .merge(notify::router())
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

/// Liveness probe for the deployment environment.
async fn healthz() -> &'static str {
    "ok"
}
