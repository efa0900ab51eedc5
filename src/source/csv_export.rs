use crate::error::{PipelineError, Result};
use crate::source::{map_request_error, SheetSource};
use crate::types::RawRow;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Lightweight strategy: fetches the CSV export of a named tab and parses the
/// delimited text in-process. Needs no API key.
pub struct CsvExportSource {
    client: reqwest::Client,
    spreadsheet_id: String,
    timeout_seconds: u64,
}

impl CsvExportSource {
    pub fn new(spreadsheet_id: impl Into<String>, timeout_seconds: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .unwrap_or_default();
        Self {
            client,
            spreadsheet_id: spreadsheet_id.into(),
            timeout_seconds,
        }
    }

    fn export_url(&self, tab: &str) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv&sheet={}",
            self.spreadsheet_id, tab
        )
    }
}

#[async_trait::async_trait]
impl SheetSource for CsvExportSource {
    fn source_name(&self) -> &'static str {
        "csv_export"
    }

    #[instrument(skip(self))]
    async fn fetch_tab(&self, tab: &str) -> Result<Vec<RawRow>> {
        let url = self.export_url(tab);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| map_request_error(e, self.timeout_seconds))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::SourceUnavailable {
                status: status.as_u16(),
                message: format!("CSV export of tab '{tab}' failed"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| map_request_error(e, self.timeout_seconds))?;

        let mut rows = parse_csv(&body);
        if !rows.is_empty() {
            // First row is the header, never data
            rows.remove(0);
        }
        info!("Fetched {} data rows from tab '{}'", rows.len(), tab);
        Ok(rows)
    }
}

/// Parses delimited text into rows. A quoted field may contain the delimiter
/// or newlines literally; a doubled quote inside a quoted field collapses to
/// one. Blank lines are skipped.
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    let mut rows: Vec<RawRow> = Vec::new();
    let mut row: RawRow = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    flush_row(&mut rows, &mut row);
                }
                _ => field.push(c),
            }
        }
    }

    // Final line may lack a trailing newline
    if !field.is_empty() || !row.is_empty() {
        row.push(std::mem::take(&mut field));
        flush_row(&mut rows, &mut row);
    }

    rows
}

fn flush_row(rows: &mut Vec<RawRow>, row: &mut RawRow) {
    let finished = std::mem::take(row);
    // A blank line parses as a single empty cell
    if finished.len() == 1 && finished[0].is_empty() {
        debug!("Skipping blank line");
        return;
    }
    rows.push(finished);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_rows() {
        let rows = parse_csv("a,b,c\n1,2,3\n");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]);
    }

    #[test]
    fn quoted_field_keeps_embedded_delimiter() {
        let rows = parse_csv("\"The Roxy, Hollywood\",LA\n");
        assert_eq!(rows, vec![vec!["The Roxy, Hollywood", "LA"]]);
    }

    #[test]
    fn doubled_quote_collapses_to_one() {
        let rows = parse_csv("\"say \"\"hi\"\"\",x\n");
        assert_eq!(rows, vec![vec!["say \"hi\"", "x"]]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let rows = parse_csv("a,b\n\n\nc,d\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn quoted_field_may_span_lines() {
        let rows = parse_csv("\"line one\nline two\",x\n");
        assert_eq!(rows, vec![vec!["line one\nline two", "x"]]);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let rows = parse_csv("a,b\nc,d");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn empty_trailing_cells_survive() {
        let rows = parse_csv("a,,\n");
        assert_eq!(rows, vec![vec!["a", "", ""]]);
    }
}
