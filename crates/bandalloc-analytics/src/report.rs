//! Full-report assembly: the one entry point the presentation shell uses.

use rust_decimal::Decimal;
use serde::Serialize;

use bandalloc_core::{AllocatedBand, Dataset};

use crate::allocation::allocate;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::summary::summarize;

/// The complete cost-allocation report for one dataset and budget.
///
/// Figures are carried at full precision; presentation rounds to
/// 2 decimal places when rendering.
#[derive(Debug, Clone, Serialize)]
pub struct CostReport {
    /// Per-band allocations, ascending by band id, non-empty bands only.
    pub bands: Vec<AllocatedBand>,
    /// Sum of turnover across all valid records, in Kč.
    pub total_turnover: Decimal,
    /// Sum of quantities across all valid records.
    pub total_unit_count: Decimal,
    /// The operator-supplied budget that was distributed, in Kč.
    pub total_budget: Decimal,
    /// Band-structure-ignoring baseline: total turnover over total units.
    pub gross_cost_per_unit: Decimal,
    /// Sum of strictly positive stock amounts, or `None` when the export
    /// carried no stock column.
    pub stock_on_hand: Option<Decimal>,
}

/// Runs the full pipeline over a loaded dataset.
///
/// Summarizes per band, allocates the budget by turnover share, and
/// derives the dataset-level scalars. Stock on hand counts only strictly
/// positive stock amounts; zero and negative values are excluded.
///
/// # Errors
///
/// Propagates the allocator's precondition failures: empty dataset,
/// non-positive budget, zero total turnover.
pub fn build_report(dataset: &Dataset, total_budget: Decimal) -> AnalyticsResult<CostReport> {
    if dataset.is_empty() {
        return Err(AnalyticsError::EmptyDataset);
    }

    let records = dataset.records();
    let total_turnover: Decimal = records.iter().map(|r| r.turnover()).sum();
    let total_unit_count: Decimal = records.iter().map(|r| r.count()).sum();

    let summaries = summarize(records);
    let bands = allocate(&summaries, total_budget, total_turnover)?;

    // total_unit_count > 0 whenever the dataset is non-empty, since every
    // retained record has a strictly positive quantity.
    let gross_cost_per_unit = total_turnover / total_unit_count;

    let stock_on_hand = if dataset.stock_tracked() {
        Some(
            records
                .iter()
                .filter_map(|r| r.stock_amount())
                .filter(|&amount| amount > 0)
                .map(Decimal::from)
                .sum(),
        )
    } else {
        None
    };

    log::debug!(
        "report: {} bands, turnover {}, budget {}",
        bands.len(),
        total_turnover,
        total_budget,
    );

    Ok(CostReport {
        bands,
        total_turnover,
        total_unit_count,
        total_budget,
        gross_cost_per_unit,
        stock_on_hand,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandalloc_core::SaleRecord;
    use rust_decimal_macros::dec;

    fn record(turnover: Decimal, count: Decimal, stock: Option<i64>) -> SaleRecord {
        SaleRecord::new(turnover, count, stock).unwrap()
    }

    #[test]
    fn test_scalars() {
        let dataset = Dataset::new(
            vec![
                record(dec!(50), dec!(10), None),
                record(dec!(3000), dec!(20), None),
                record(dec!(5000), dec!(2), None),
            ],
            false,
            0,
        );
        let report = build_report(&dataset, dec!(10000)).unwrap();

        assert_eq!(report.total_turnover, dec!(8050));
        assert_eq!(report.total_unit_count, dec!(32));
        assert_eq!(report.gross_cost_per_unit, dec!(251.5625));
        assert_eq!(report.total_budget, dec!(10000));
        assert_eq!(report.stock_on_hand, None);
    }

    #[test]
    fn test_stock_filter_is_strictly_positive() {
        let dataset = Dataset::new(
            vec![
                record(dec!(10), dec!(1), Some(-5)),
                record(dec!(10), dec!(1), Some(10)),
                record(dec!(10), dec!(1), Some(0)),
                record(dec!(10), dec!(1), Some(20)),
            ],
            true,
            0,
        );
        let report = build_report(&dataset, dec!(100)).unwrap();

        assert_eq!(report.stock_on_hand, Some(dec!(30)));
    }

    #[test]
    fn test_stock_unavailable_without_column() {
        let dataset = Dataset::new(vec![record(dec!(10), dec!(1), None)], false, 0);
        let report = build_report(&dataset, dec!(100)).unwrap();
        assert_eq!(report.stock_on_hand, None);
    }

    #[test]
    fn test_empty_dataset_is_a_precondition_failure() {
        let dataset = Dataset::new(Vec::new(), false, 0);
        assert_eq!(
            build_report(&dataset, dec!(100)).unwrap_err(),
            AnalyticsError::EmptyDataset
        );
    }

    #[test]
    fn test_all_zero_turnover_signals_cannot_allocate() {
        let dataset = Dataset::new(
            vec![
                record(dec!(0), dec!(5), None),
                record(dec!(0), dec!(3), None),
            ],
            false,
            0,
        );
        let err = build_report(&dataset, dec!(1000)).unwrap_err();
        assert!(matches!(err, AnalyticsError::ZeroTurnover { .. }));
    }
}
