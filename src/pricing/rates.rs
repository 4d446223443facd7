//! Published rate table for cleaning jobs.
//!
//! One static table, baked into the binary: every quote in a process
//! prices against the same numbers. Lookups are explicit matches, so a
//! new visit type cannot ship without a rate decision.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{Extras, VisitType};

/// Per-square-foot base rates by visit type.
#[derive(Debug, Clone)]
pub struct SqftRates {
    pub regular: Decimal,
    pub first_visit: Decimal,
    pub move_out: Decimal,
    pub deep_clean: Decimal,
    pub construction_cleanup: Decimal,
}

/// Per-room base rates by visit type.
///
/// There is no `construction_cleanup` field: the business never published
/// a room rate for construction jobs. [`room_rate_visit`] names the
/// substitution applied instead.
#[derive(Debug, Clone)]
pub struct RoomRates {
    pub regular: Decimal,
    pub first_visit: Decimal,
    pub move_out: Decimal,
    pub deep_clean: Decimal,
}

/// Flat fees for the optional extras.
///
/// Bedsheets are absent: that extra bills per bedroom, not flat.
#[derive(Debug, Clone)]
pub struct ExtraFees {
    pub blinds: Decimal,
    pub oven: Decimal,
    pub windows: Decimal,
    pub laundry: Decimal,
    pub fridge: Decimal,
    pub baseboards: Decimal,
    pub cabinets: Decimal,
}

/// The static rate configuration for the whole process.
#[derive(Debug, Clone)]
pub struct RateTable {
    pub min_job: Decimal,
    pub per_sqft: SqftRates,
    pub per_room: RoomRates,
    pub bedsheet_per_bedroom: Decimal,
    pub extras_flat: ExtraFees,
}

/// Current published rates.
pub static RATES: RateTable = RateTable {
    min_job: dec!(200),
    per_sqft: SqftRates {
        regular: dec!(0.15),
        first_visit: dec!(0.20),
        move_out: dec!(0.25),
        deep_clean: dec!(0.30),
        construction_cleanup: dec!(0.35),
    },
    per_room: RoomRates {
        regular: dec!(75),
        first_visit: dec!(90),
        move_out: dec!(110),
        deep_clean: dec!(125),
    },
    bedsheet_per_bedroom: dec!(10),
    extras_flat: ExtraFees {
        blinds: dec!(25),
        oven: dec!(40),
        windows: dec!(35),
        laundry: dec!(20),
        fridge: dec!(35),
        baseboards: dec!(30),
        cabinets: dec!(30),
    },
};

/// Visit type whose room rate applies to the given visit.
///
/// The room table has no construction-cleanup entry; those jobs bill at
/// the deep-clean room rate. Every other visit maps to itself.
pub fn room_rate_visit(visit: VisitType) -> VisitType {
    match visit {
        VisitType::ConstructionCleanup => VisitType::DeepClean,
        other => other,
    }
}

impl RateTable {
    /// Per-square-foot rate for a visit type.
    pub fn sqft_rate(&self, visit: VisitType) -> Decimal {
        match visit {
            VisitType::Regular => self.per_sqft.regular,
            VisitType::FirstVisit => self.per_sqft.first_visit,
            VisitType::MoveOut => self.per_sqft.move_out,
            VisitType::DeepClean => self.per_sqft.deep_clean,
            VisitType::ConstructionCleanup => self.per_sqft.construction_cleanup,
        }
    }

    /// Per-room rate for a visit type, applying the construction fallback.
    pub fn room_rate(&self, visit: VisitType) -> Decimal {
        match room_rate_visit(visit) {
            VisitType::Regular => self.per_room.regular,
            VisitType::FirstVisit => self.per_room.first_visit,
            VisitType::MoveOut => self.per_room.move_out,
            // room_rate_visit never yields ConstructionCleanup
            VisitType::DeepClean | VisitType::ConstructionCleanup => self.per_room.deep_clean,
        }
    }

    /// Summed flat fees for the selected extras. Bedsheets are excluded;
    /// that charge scales with bedrooms and is computed separately.
    pub fn flat_extras_total(&self, extras: &Extras) -> Decimal {
        let mut total = Decimal::ZERO;
        if extras.blinds {
            total += self.extras_flat.blinds;
        }
        if extras.oven {
            total += self.extras_flat.oven;
        }
        if extras.windows {
            total += self.extras_flat.windows;
        }
        if extras.laundry {
            total += self.extras_flat.laundry;
        }
        if extras.fridge {
            total += self.extras_flat.fridge;
        }
        if extras.baseboards {
            total += self.extras_flat.baseboards;
        }
        if extras.cabinets {
            total += self.extras_flat.cabinets;
        }
        total
    }
}
