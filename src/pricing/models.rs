//! Core types for the quote calculator.
//!
//! These are the wire types the calculator UI exchanges with the engine,
//! so the serde names are part of the public contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which base-rate table a quote is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingMode {
    BySquareFootage,
    ByRoomCount,
}

impl PricingMode {
    /// Wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            PricingMode::BySquareFootage => "by-square-footage",
            PricingMode::ByRoomCount => "by-room-count",
        }
    }
}

/// Visit category selecting which rate applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisitType {
    Regular,
    FirstVisit,
    MoveOut,
    DeepClean,
    ConstructionCleanup,
}

impl VisitType {
    pub const ALL: [VisitType; 5] = [
        VisitType::Regular,
        VisitType::FirstVisit,
        VisitType::MoveOut,
        VisitType::DeepClean,
        VisitType::ConstructionCleanup,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            VisitType::Regular => "regular",
            VisitType::FirstVisit => "first-visit",
            VisitType::MoveOut => "move-out",
            VisitType::DeepClean => "deep-clean",
            VisitType::ConstructionCleanup => "construction-cleanup",
        }
    }
}

/// Optional add-on services, each an independent on/off flag.
///
/// `bedsheets` is the odd one out: it bills per bedroom rather than as a
/// flat fee, so it has no entry in the flat-fee table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extras {
    pub blinds: bool,
    pub oven: bool,
    pub windows: bool,
    pub bedsheets: bool,
    pub laundry: bool,
    pub fridge: bool,
    pub baseboards: bool,
    pub cabinets: bool,
}

impl Extras {
    /// Wire names of the selected extras, in declaration order.
    pub fn enabled_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.blinds {
            names.push("blinds");
        }
        if self.oven {
            names.push("oven");
        }
        if self.windows {
            names.push("windows");
        }
        if self.bedsheets {
            names.push("bedsheets");
        }
        if self.laundry {
            names.push("laundry");
        }
        if self.fridge {
            names.push("fridge");
        }
        if self.baseboards {
            names.push("baseboards");
        }
        if self.cabinets {
            names.push("cabinets");
        }
        names
    }
}

/// Input to one pricing computation. Built per calculation, never stored.
///
/// Counts may arrive negative from a buggy caller; the engine clamps them
/// to zero rather than rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub mode: PricingMode,
    pub visit: VisitType,
    #[serde(default)]
    pub sqft: i32,
    #[serde(default)]
    pub bedrooms: i32,
    #[serde(default)]
    pub bathrooms: i32,
    #[serde(default)]
    pub extras: Extras,
}

/// Itemized decomposition of a computed total.
///
/// Tagged by pricing mode: the two variants carry different job-size
/// fields, so consumers match on the variant instead of poking nullable
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum Breakdown {
    BySquareFootage {
        #[serde(with = "rust_decimal::serde::str")]
        base: Decimal,
        #[serde(with = "rust_decimal::serde::str")]
        rate: Decimal,
        sqft: i32,
        #[serde(with = "rust_decimal::serde::str")]
        bedsheets: Decimal,
        #[serde(with = "rust_decimal::serde::str")]
        extras: Decimal,
    },
    ByRoomCount {
        #[serde(with = "rust_decimal::serde::str")]
        base: Decimal,
        #[serde(with = "rust_decimal::serde::str")]
        rate: Decimal,
        rooms: i32,
        #[serde(with = "rust_decimal::serde::str")]
        bedsheets: Decimal,
        #[serde(with = "rust_decimal::serde::str")]
        extras: Decimal,
    },
}

impl Breakdown {
    /// Base charge line.
    pub fn base(&self) -> Decimal {
        match self {
            Breakdown::BySquareFootage { base, .. } | Breakdown::ByRoomCount { base, .. } => *base,
        }
    }

    /// Bedsheet charge line.
    pub fn bedsheets(&self) -> Decimal {
        match self {
            Breakdown::BySquareFootage { bedsheets, .. }
            | Breakdown::ByRoomCount { bedsheets, .. } => *bedsheets,
        }
    }

    /// Summed flat-extras charge line.
    pub fn extras(&self) -> Decimal {
        match self {
            Breakdown::BySquareFootage { extras, .. } | Breakdown::ByRoomCount { extras, .. } => {
                *extras
            }
        }
    }
}

/// A computed total together with the breakdown it came from.
///
/// Both come out of a single computation pass, so they cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteResult {
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub breakdown: Breakdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_mode_wire_names() {
        assert_eq!(
            serde_json::to_value(PricingMode::BySquareFootage).unwrap(),
            json!("by-square-footage")
        );
        assert_eq!(
            serde_json::to_value(PricingMode::ByRoomCount).unwrap(),
            json!("by-room-count")
        );
    }

    #[test]
    fn test_visit_wire_names_match_as_str() {
        for visit in VisitType::ALL {
            assert_eq!(serde_json::to_value(visit).unwrap(), json!(visit.as_str()));
        }
    }

    #[test]
    fn test_visit_parses_from_wire_name() {
        for visit in VisitType::ALL {
            let parsed: VisitType =
                serde_json::from_value(json!(visit.as_str())).expect("parse wire name");
            assert_eq!(parsed, visit);
        }
    }

    #[test]
    fn test_extras_default_all_off() {
        let extras = Extras::default();
        assert!(extras.enabled_names().is_empty());
    }

    #[test]
    fn test_extras_enabled_names_in_declaration_order() {
        let extras = Extras {
            oven: true,
            bedsheets: true,
            cabinets: true,
            ..Extras::default()
        };
        assert_eq!(extras.enabled_names(), vec!["oven", "bedsheets", "cabinets"]);
    }

    #[test]
    fn test_extras_ignores_unknown_and_missing_keys() {
        let extras: Extras =
            serde_json::from_value(json!({ "oven": true, "chandeliers": true })).unwrap();
        assert!(extras.oven);
        assert!(!extras.blinds);
    }

    #[test]
    fn test_quote_request_defaults_missing_counts() {
        let request: QuoteRequest = serde_json::from_value(json!({
            "mode": "by-room-count",
            "visit": "regular"
        }))
        .unwrap();
        assert_eq!(request.sqft, 0);
        assert_eq!(request.bedrooms, 0);
        assert_eq!(request.bathrooms, 0);
        assert_eq!(request.extras, Extras::default());
    }

    #[test]
    fn test_breakdown_serializes_with_mode_tag() {
        let breakdown = Breakdown::ByRoomCount {
            base: dec!(300),
            rate: dec!(75),
            rooms: 4,
            bedsheets: dec!(0),
            extras: dec!(0),
        };
        assert_eq!(
            serde_json::to_value(breakdown).unwrap(),
            json!({
                "mode": "by-room-count",
                "base": "300",
                "rate": "75",
                "rooms": 4,
                "bedsheets": "0",
                "extras": "0"
            })
        );
    }

    #[test]
    fn test_breakdown_line_accessors() {
        let breakdown = Breakdown::BySquareFootage {
            base: dec!(600),
            rate: dec!(0.30),
            sqft: 2000,
            bedsheets: dec!(20),
            extras: dec!(65),
        };
        assert_eq!(breakdown.base(), dec!(600));
        assert_eq!(breakdown.bedsheets(), dec!(20));
        assert_eq!(breakdown.extras(), dec!(65));
    }
}
