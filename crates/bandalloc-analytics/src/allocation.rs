//! Turnover-weighted budget allocation.

use rust_decimal::Decimal;

use bandalloc_core::{AllocatedBand, BandSummary};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Distributes a total budget across bands by turnover share.
///
/// For each band:
///
/// ```text
/// allocated_cost = (band turnover / total turnover) * total budget
/// cost_per_unit  = allocated_cost / band unit count
/// ```
///
/// The defining conservation property: the allocated costs sum back to
/// the total budget (up to rounding tolerance), whatever the band
/// membership looks like.
///
/// # Errors
///
/// All preconditions are validated before any division:
///
/// - `EmptyDataset` when `summaries` is empty
/// - `InvalidBudget` when `total_budget` is not strictly positive
/// - `ZeroTurnover` when `total_turnover` is not strictly positive
pub fn allocate(
    summaries: &[BandSummary],
    total_budget: Decimal,
    total_turnover: Decimal,
) -> AnalyticsResult<Vec<AllocatedBand>> {
    if summaries.is_empty() {
        return Err(AnalyticsError::EmptyDataset);
    }

    if total_budget <= Decimal::ZERO {
        return Err(AnalyticsError::InvalidBudget {
            value: total_budget,
            reason: "budget must be positive".into(),
        });
    }

    if total_turnover <= Decimal::ZERO {
        return Err(AnalyticsError::ZeroTurnover {
            total: total_turnover,
        });
    }

    let allocated = summaries
        .iter()
        .map(|summary| {
            let allocated_cost = summary.turnover_total / total_turnover * total_budget;
            // unit_count is a sum of strictly positive quantities, so the
            // per-unit division is always defined for a non-empty band.
            let cost_per_unit = allocated_cost / summary.unit_count;
            AllocatedBand {
                summary: summary.clone(),
                allocated_cost,
                cost_per_unit,
            }
        })
        .collect();

    Ok(allocated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn summary(band_id: u8, turnover_total: Decimal, unit_count: Decimal) -> BandSummary {
        let band = bandalloc_core::PriceBand::get(band_id).unwrap();
        BandSummary {
            band_id,
            label: band.label(),
            unit_count,
            turnover_total,
            min_unit_price: dec!(1),
            max_unit_price: dec!(1),
            mean_unit_price: dec!(1),
        }
    }

    #[test]
    fn test_proportional_split() {
        let summaries = vec![
            summary(1, dec!(2500), dec!(100)),
            summary(2, dec!(7500), dec!(300)),
        ];
        let allocated = allocate(&summaries, dec!(1000), dec!(10000)).unwrap();

        assert_eq!(allocated[0].allocated_cost, dec!(250));
        assert_eq!(allocated[1].allocated_cost, dec!(750));
        assert_eq!(allocated[0].cost_per_unit, dec!(2.5));
        assert_eq!(allocated[1].cost_per_unit, dec!(2.5));
    }

    #[test]
    fn test_conservation_over_uneven_shares() {
        let summaries = vec![
            summary(1, dec!(50), dec!(10)),
            summary(11, dec!(3000), dec!(20)),
            summary(16, dec!(5000), dec!(2)),
        ];
        let budget = dec!(10000);
        let allocated = allocate(&summaries, budget, dec!(8050)).unwrap();

        let total: Decimal = allocated.iter().map(|a| a.allocated_cost).sum();
        assert!((total - budget).abs() < dec!(0.000001), "sum was {total}");
    }

    #[test]
    fn test_empty_summaries_rejected() {
        assert_eq!(
            allocate(&[], dec!(1000), dec!(10)).unwrap_err(),
            AnalyticsError::EmptyDataset
        );
    }

    #[test]
    fn test_non_positive_budget_rejected() {
        let summaries = vec![summary(1, dec!(100), dec!(10))];
        for bad in [dec!(0), dec!(-100)] {
            let err = allocate(&summaries, bad, dec!(100)).unwrap_err();
            assert!(matches!(err, AnalyticsError::InvalidBudget { .. }));
        }
    }

    #[test]
    fn test_zero_turnover_guarded_before_division() {
        let summaries = vec![summary(1, dec!(0), dec!(10))];
        let err = allocate(&summaries, dec!(1000), dec!(0)).unwrap_err();
        assert!(matches!(err, AnalyticsError::ZeroTurnover { .. }));
    }
}
