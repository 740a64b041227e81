use csv::{ReaderBuilder, StringRecord};

use super::lenient::{parse_elapsed_ms, parse_success, parse_timestamp_ms};
use super::types::Sample;
use crate::error::JtlError;

const TIMESTAMP_COLUMN: &str = "timeStamp";
const ELAPSED_COLUMN: &str = "elapsed";
const SUCCESS_COLUMN: &str = "success";

/// JMeter's column order when results are saved without a header row.
const HEADERLESS_COLUMNS: Columns = Columns {
    timestamp: Some(0),
    elapsed: Some(1),
    success: Some(7),
};

#[derive(Clone, Copy, Debug)]
struct Columns {
    timestamp: Option<usize>,
    elapsed: Option<usize>,
    success: Option<usize>,
}

impl Columns {
    fn from_header(header: &StringRecord) -> Option<Self> {
        let position = |name: &str| header.iter().position(|field| field.trim() == name);
        let timestamp = position(TIMESTAMP_COLUMN)?;
        Some(Self {
            timestamp: Some(timestamp),
            elapsed: position(ELAPSED_COLUMN),
            success: position(SUCCESS_COLUMN),
        })
    }

    fn sample(&self, record: &StringRecord) -> Sample {
        let field = |index: Option<usize>| index.and_then(|idx| record.get(idx));
        Sample {
            success: parse_success(field(self.success)),
            elapsed_ms: parse_elapsed_ms(field(self.elapsed)),
            timestamp_ms: parse_timestamp_ms(field(self.timestamp)),
        }
    }
}

/// Reads CSV results. The first record is a header when it names a
/// `timeStamp` column; otherwise every record is data. Rows may have any
/// number of fields, and whitespace-only rows are dropped.
pub(super) fn parse_csv(text: &str) -> Result<Vec<Sample>, JtlError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| JtlError::Csv { source: err })?;
        if !record.iter().all(|field| field.trim().is_empty()) {
            records.push(record);
        }
    }

    let mut records = records.iter().peekable();
    let columns = match records.peek().and_then(|first| Columns::from_header(first)) {
        Some(columns) => {
            records.next();
            columns
        }
        None => HEADERLESS_COLUMNS,
    };

    Ok(records.map(|record| columns.sample(record)).collect())
}
