//! Core pricing calculation.
//!
//! Pure functions only: no I/O, no shared state. The calculator UI calls
//! [`compute_quote`] on every input change, so everything here must be
//! cheap, deterministic, and safe to invoke from any number of events.

use rust_decimal::{Decimal, RoundingStrategy};

use super::models::{Breakdown, PricingMode, QuoteRequest, QuoteResult};
use super::rates::RATES;

/// Round to the given number of decimal places, half-up (away from zero).
///
/// Quoted dollar amounts round at the cent boundary the way the printed
/// price list does: `2.345` becomes `2.35`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use mendozacleaning_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.345), 2), dec!(2.35));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Price one quote request.
///
/// Clamps negative counts to zero, applies the static rate table, and
/// produces the total together with its breakdown from a single set of
/// intermediates, so the two can never disagree.
///
/// # Algorithm
/// 1. Base charge: job size times the visit rate, floored at the minimum
///    job charge. Job size is square footage in one mode, bedrooms plus
///    bathrooms in the other; by-room-count construction jobs bill at the
///    deep-clean room rate.
/// 2. Bedsheet charge: per bedroom when the bedsheets extra is selected.
/// 3. Flat extras charge: summed fees for every other selected extra.
/// 4. Total: the three lines summed, rounded half-up to cents.
pub fn compute_quote(request: &QuoteRequest) -> QuoteResult {
    let sqft = request.sqft.max(0);
    let bedrooms = request.bedrooms.max(0);
    let bathrooms = request.bathrooms.max(0);

    // Bedsheets bill from the bedroom count in both modes, including
    // by-square-footage where bedrooms play no other part.
    let bedsheets = if request.extras.bedsheets {
        round_money(Decimal::from(bedrooms) * RATES.bedsheet_per_bedroom, 2)
    } else {
        Decimal::ZERO
    };

    let extras = round_money(RATES.flat_extras_total(&request.extras), 2);

    let (base, breakdown) = match request.mode {
        PricingMode::BySquareFootage => {
            let rate = RATES.sqft_rate(request.visit);
            let base = round_money((Decimal::from(sqft) * rate).max(RATES.min_job), 2);
            (
                base,
                Breakdown::BySquareFootage {
                    base,
                    rate,
                    sqft,
                    bedsheets,
                    extras,
                },
            )
        }
        PricingMode::ByRoomCount => {
            // Saturating keeps the function total at the integer ceiling.
            let rooms = bedrooms.saturating_add(bathrooms);
            let rate = RATES.room_rate(request.visit);
            let base = round_money((Decimal::from(rooms) * rate).max(RATES.min_job), 2);
            (
                base,
                Breakdown::ByRoomCount {
                    base,
                    rate,
                    rooms,
                    bedsheets,
                    extras,
                },
            )
        }
    };

    let total = round_money(base + bedsheets + extras, 2);

    QuoteResult { total, breakdown }
}
