//! Quote pricing for cleaning jobs.
//!
//! The rate table ships with the binary and changes only with a deploy,
//! so every quote is a pure function of its request: pick the base rate
//! for the visit type and pricing mode, floor at the minimum job charge,
//! then add bedsheet and flat extra fees. [`compute_quote`] returns the
//! total alongside a per-line breakdown that always sums back to it.

pub mod calculators;
pub mod models;
pub mod rates;

pub use calculators::{compute_quote, round_money};
pub use models::{Breakdown, Extras, PricingMode, QuoteRequest, QuoteResult, VisitType};
pub use rates::{room_rate_visit, RateTable, RATES};
