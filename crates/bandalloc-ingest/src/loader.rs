//! Best-effort loader for the legacy sales export.

use std::path::Path;
use std::str::FromStr;

use encoding_rs::WINDOWS_1250;
use rust_decimal::Decimal;

use bandalloc_core::{Dataset, SaleRecord};

use crate::error::{IngestError, IngestResult};

/// Column names expected in the export header.
const COL_TURNOVER: &str = "turnover";
const COL_COUNT: &str = "count";
const COL_STOCK: &str = "stockAmount";

/// Loads records from the raw bytes of a sales export.
///
/// Decodes Windows-1250, parses semicolon-delimited rows against the
/// header, and retains every row whose `turnover` and `count` parse as
/// finite numbers with a strictly positive quantity. Rows failing that
/// are dropped silently per the export's best-effort contract. An
/// unparsable stock cell keeps the row and records its stock as unknown.
///
/// # Errors
///
/// Only file-level conditions error: undecodable CSV structure or a
/// header missing the `turnover` or `count` column.
pub fn load_records(raw: &[u8]) -> IngestResult<Dataset> {
    let (text, _, _) = WINDOWS_1250.decode(raw);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let turnover_idx = column_index(&headers, COL_TURNOVER)?;
    let count_idx = column_index(&headers, COL_COUNT)?;
    let stock_idx = headers.iter().position(|h| h == COL_STOCK);

    let mut records = Vec::new();
    let mut rows_dropped = 0usize;

    for (row_number, row) in reader.records().enumerate() {
        let row = row?;

        let turnover = row.get(turnover_idx).and_then(parse_locale_decimal);
        let count = row.get(count_idx).and_then(|cell| Decimal::from_str(cell).ok());

        let (Some(turnover), Some(count)) = (turnover, count) else {
            log::debug!("dropping row {}: unparsable turnover/count", row_number + 2);
            rows_dropped += 1;
            continue;
        };

        let stock_amount = stock_idx
            .and_then(|idx| row.get(idx))
            .and_then(|cell| cell.parse::<i64>().ok());

        match SaleRecord::new(turnover, count, stock_amount) {
            Ok(record) => records.push(record),
            Err(reason) => {
                log::debug!("dropping row {}: {reason}", row_number + 2);
                rows_dropped += 1;
            }
        }
    }

    log::debug!(
        "loaded {} records ({} dropped), stock column {}",
        records.len(),
        rows_dropped,
        if stock_idx.is_some() { "present" } else { "absent" },
    );

    Ok(Dataset::new(records, stock_idx.is_some(), rows_dropped))
}

/// Loads records from a sales export on disk.
pub fn load_records_from_path(path: impl AsRef<Path>) -> IngestResult<Dataset> {
    let raw = std::fs::read(path)?;
    load_records(&raw)
}

/// Parses a locale-formatted monetary cell.
///
/// The export writes decimal commas; the comma is rewritten to a decimal
/// point before parsing. Anything that still fails to parse yields `None`.
fn parse_locale_decimal(cell: &str) -> Option<Decimal> {
    Decimal::from_str(&cell.replace(',', ".")).ok()
}

fn column_index(headers: &csv::StringRecord, name: &str) -> IngestResult<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| IngestError::MissingColumn { name: name.into() })
}
