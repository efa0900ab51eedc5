use crate::error::{PipelineError, Result};
use crate::types::RawRow;

pub mod csv_export;
pub mod values_api;

pub use csv_export::CsvExportSource;
pub use values_api::ValuesApiSource;

/// A spreadsheet-like source of tabular content. Both strategies return rows
/// of raw string cells with the header row already discarded; a fetch that
/// fails must surface an error so callers can tell "zero rows" apart from
/// "source unavailable".
#[async_trait::async_trait]
pub trait SheetSource: Send + Sync {
    /// Unique identifier for this fetch strategy
    fn source_name(&self) -> &'static str;

    /// Fetch all data rows of a named tab
    async fn fetch_tab(&self, tab: &str) -> Result<Vec<RawRow>>;
}

pub(crate) fn map_request_error(err: reqwest::Error, timeout_seconds: u64) -> PipelineError {
    if err.is_timeout() {
        PipelineError::Timeout {
            seconds: timeout_seconds,
        }
    } else {
        PipelineError::Http(err)
    }
}
