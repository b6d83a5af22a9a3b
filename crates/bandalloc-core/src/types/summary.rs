//! Per-band aggregate and allocation result types.

use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate figures for one non-empty price band.
///
/// The observed price range is the min/max of member unit prices, which
/// is independent of the band's nominal boundaries. All figures are kept
/// at full precision; rounding to 2 decimal places happens only at
/// presentation time so the allocation step never compounds rounding
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandSummary {
    /// Band identifier (1..=16).
    pub band_id: u8,
    /// Human-readable band label.
    pub label: &'static str,
    /// Sum of quantities over member records.
    pub unit_count: Decimal,
    /// Sum of turnover over member records, in Kč.
    pub turnover_total: Decimal,
    /// Lowest unit price observed among members.
    pub min_unit_price: Decimal,
    /// Highest unit price observed among members.
    pub max_unit_price: Decimal,
    /// Arithmetic mean of member unit prices.
    pub mean_unit_price: Decimal,
}

/// A band summary with its share of the budget applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocatedBand {
    /// The aggregate this allocation was derived from.
    #[serde(flatten)]
    pub summary: BandSummary,
    /// This band's share of the total budget, in Kč.
    pub allocated_cost: Decimal,
    /// Allocated cost divided by units sold in the band, in Kč.
    pub cost_per_unit: Decimal,
}

impl AllocatedBand {
    /// Returns the band identifier (1..=16).
    #[must_use]
    pub fn band_id(&self) -> u8 {
        self.summary.band_id
    }

    /// Returns the human-readable band label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.summary.label
    }
}
