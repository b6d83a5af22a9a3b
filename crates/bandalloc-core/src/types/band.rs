//! The fixed unit-price band catalog and its classifier.
//!
//! Sixteen contiguous, non-overlapping bands partition the positive price
//! line. Each band covers `(lower, upper]` in whole Kč; the top band is
//! open-ended. Classification is a descending cascade of strict
//! lower-bound comparisons, so a price exactly on a boundary falls into
//! the *lower* band (e.g. 10.00 is band 1, 10.01 is band 2).

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// One entry of the fixed price-band catalog.
///
/// Bands are identified by `id` 1..=16, ascending with price. The report
/// labels are carried verbatim from the operator-facing report, including
/// the top band's nominal upper figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBand {
    id: u8,
    label: &'static str,
    /// Exclusive lower bound in whole Kč.
    lower: i64,
    /// Inclusive upper bound in whole Kč; `None` for the open top band.
    upper: Option<i64>,
}

/// The full band catalog, ascending by price.
///
/// Boundaries partition the positive real line exactly: every finite
/// unit price maps to exactly one band.
pub static BANDS: [PriceBand; 16] = [
    PriceBand { id: 1,  label: "1. pásmo (0–10 Kč)",      lower: 0,    upper: Some(10) },
    PriceBand { id: 2,  label: "2. pásmo (11–20 Kč)",     lower: 10,   upper: Some(20) },
    PriceBand { id: 3,  label: "3. pásmo (21–30 Kč)",     lower: 20,   upper: Some(30) },
    PriceBand { id: 4,  label: "4. pásmo (31–40 Kč)",     lower: 30,   upper: Some(40) },
    PriceBand { id: 5,  label: "5. pásmo (41–50 Kč)",     lower: 40,   upper: Some(50) },
    PriceBand { id: 6,  label: "6. pásmo (51–60 Kč)",     lower: 50,   upper: Some(60) },
    PriceBand { id: 7,  label: "7. pásmo (61–75 Kč)",     lower: 60,   upper: Some(75) },
    PriceBand { id: 8,  label: "8. pásmo (76–90 Kč)",     lower: 75,   upper: Some(90) },
    PriceBand { id: 9,  label: "9. pásmo (91–110 Kč)",    lower: 90,   upper: Some(110) },
    PriceBand { id: 10, label: "10. pásmo (111–140 Kč)",  lower: 110,  upper: Some(140) },
    PriceBand { id: 11, label: "11. pásmo (141–180 Kč)",  lower: 140,  upper: Some(180) },
    PriceBand { id: 12, label: "12. pásmo (181–230 Kč)",  lower: 180,  upper: Some(230) },
    PriceBand { id: 13, label: "13. pásmo (231–300 Kč)",  lower: 230,  upper: Some(300) },
    PriceBand { id: 14, label: "14. pásmo (301–400 Kč)",  lower: 300,  upper: Some(400) },
    PriceBand { id: 15, label: "15. pásmo (401–1000 Kč)", lower: 400,  upper: Some(1000) },
    PriceBand { id: 16, label: "16. pásmo (1001–3500 Kč)", lower: 1000, upper: None },
];

impl PriceBand {
    /// Classifies a unit price into its band.
    ///
    /// Total over `Decimal`: scans the catalog highest-first and returns
    /// the first band whose exclusive lower bound the price strictly
    /// exceeds. Anything at or below 10 Kč - including a negative price
    /// from degenerate data - lands in band 1, which is unbounded below.
    #[must_use]
    pub fn classify(unit_price: Decimal) -> &'static PriceBand {
        for band in BANDS.iter().rev() {
            if unit_price > Decimal::from(band.lower) {
                return band;
            }
        }
        &BANDS[0]
    }

    /// Looks up a band by its identifier.
    pub fn get(id: u8) -> CoreResult<&'static PriceBand> {
        BANDS
            .get(id.wrapping_sub(1) as usize)
            .ok_or(CoreError::UnknownBand(id))
    }

    /// Returns the band identifier (1..=16).
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns the human-readable band label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the exclusive lower bound in whole Kč.
    #[must_use]
    pub fn lower(&self) -> Decimal {
        Decimal::from(self.lower)
    }

    /// Returns the inclusive upper bound, or `None` for the open top band.
    #[must_use]
    pub fn upper(&self) -> Option<Decimal> {
        self.upper.map(Decimal::from)
    }

    /// Returns true if the price falls within this band's boundaries.
    #[must_use]
    pub fn contains(&self, unit_price: Decimal) -> bool {
        let above_lower = if self.id == 1 {
            // Band 1 is unbounded below
            true
        } else {
            unit_price > Decimal::from(self.lower)
        };
        let within_upper = match self.upper {
            Some(upper) => unit_price <= Decimal::from(upper),
            None => true,
        };
        above_lower && within_upper
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
