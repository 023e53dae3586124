//! CSV export of the trade journal.

use crate::domain::TradeRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write error: {0}")]
    Csv(String),
}

/// Write history rows in the given order under a `date,symbol,type,pnl,exp` header.
pub fn history_to_csv(history: &[TradeRecord]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(["date", "symbol", "type", "pnl", "exp"])
        .map_err(|e| ExportError::Csv(e.to_string()))?;

    for record in history {
        let pnl = record.pnl.to_canonical_string();
        let exp = record.experience_gained.to_string();
        writer
            .write_record([
                record.date.as_str(),
                record.symbol.as_str(),
                record.trade_type.as_str(),
                pnl.as_str(),
                exp.as_str(),
            ])
            .map_err(|e| ExportError::Csv(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))
}
