//! Google Sheets backend
//!
//! Talks to the Sheets v4 `values` endpoints with a pre-issued OAuth bearer
//! token. Acquiring or refreshing that token is left to the caller.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{CellAddress, RemoteStore, FIRST_DATA_ROW, ROW_WIDTH};
use crate::error::{LedgerError, LedgerResult};

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Response body of a `values.get` call
#[derive(Debug, Default, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl ValueRange {
    /// Rows as text; trailing empty cells are already dropped by the API
    fn into_rows(self) -> Vec<Vec<String>> {
        self.values
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect()
    }

    /// Top-left cell, `None` when absent or blank
    fn first_cell(&self) -> Option<String> {
        self.values
            .first()
            .and_then(|row| row.first())
            .map(cell_to_string)
            .filter(|s| !s.is_empty())
    }
}

/// Blocking client bound to one worksheet of one spreadsheet
pub struct SheetsClient {
    client: Client,
    base: Url,
    worksheet: String,
    token: String,
}

impl SheetsClient {
    /// Create a client for `worksheet` inside spreadsheet `spreadsheet_id`
    pub fn new(
        spreadsheet_id: &str,
        worksheet: &str,
        token: &str,
        timeout: Duration,
    ) -> LedgerResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LedgerError::Remote(format!("Failed to build HTTP client: {}", e)))?;

        let base = Url::parse(&format!("{}/{}/values/", API_BASE, spreadsheet_id))
            .map_err(|e| LedgerError::Config(format!("Invalid spreadsheet id: {}", e)))?;

        Ok(Self {
            client,
            base,
            worksheet: worksheet.to_string(),
            token: token.to_string(),
        })
    }

    /// A1 range qualified with the quoted worksheet name
    fn range(&self, a1: &str) -> String {
        qualified_range(&self.worksheet, a1)
    }

    /// Build a `values/{range}` URL with an optional method suffix (`:append`)
    fn values_url(&self, range: &str, suffix: &str, query: &[(&str, &str)]) -> LedgerResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| LedgerError::Config("Spreadsheet URL cannot be a base".into()))?
            .pop_if_empty()
            .push(&format!("{}{}", range, suffix));
        url.query_pairs_mut().extend_pairs(query);
        Ok(url)
    }

    fn get_values(&self, range: &str) -> LedgerResult<ValueRange> {
        let url = self.values_url(
            range,
            "",
            &[("valueRenderOption", "UNFORMATTED_VALUE")],
        )?;
        debug!(%url, "GET values");

        let resp = self.client.get(url).bearer_auth(&self.token).send()?;
        Ok(check_status(resp)?.json()?)
    }
}

impl RemoteStore for SheetsClient {
    fn read_cell(&self, cell: &CellAddress) -> LedgerResult<Option<String>> {
        let values = self.get_values(&self.range(&cell.to_string()))?;
        Ok(values.first_cell())
    }

    fn read_rows(&self) -> LedgerResult<Vec<Vec<String>>> {
        let last_column = CellAddress::column_letters(ROW_WIDTH);
        let range = self.range(&format!("A{}:{}", FIRST_DATA_ROW, last_column));
        Ok(self.get_values(&range)?.into_rows())
    }

    fn update_cell(&mut self, cell: &CellAddress, value: &str) -> LedgerResult<()> {
        let range = self.range(&cell.to_string());
        let url = self.values_url(&range, "", &[("valueInputOption", "USER_ENTERED")])?;
        debug!(%url, "PUT values");

        let body = json!({ "range": range, "values": [[value]] });
        let resp = self
            .client
            .put(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()?;
        check_status(resp)?;
        Ok(())
    }

    fn append_row(&mut self, row: &[String]) -> LedgerResult<()> {
        let last_column = CellAddress::column_letters(ROW_WIDTH);
        let range = self.range(&format!("A:{}", last_column));
        let url = self.values_url(
            &range,
            ":append",
            &[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ],
        )?;
        debug!(%url, "POST values:append");

        let body = json!({ "values": [row] });
        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()?;
        check_status(resp)?;
        Ok(())
    }
}

/// Quote a worksheet name for use in an A1 range (`'My Sheet'!A2`)
fn qualified_range(worksheet: &str, a1: &str) -> String {
    format!("'{}'!{}", worksheet.replace('\'', "''"), a1)
}

/// Render an unformatted cell value as text
fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn check_status(resp: Response) -> LedgerResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().unwrap_or_default();
    Err(status_error(status, &body))
}

fn status_error(status: StatusCode, body: &str) -> LedgerError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());
    LedgerError::Remote(format!("Sheets API returned {}: {}", status, message))
}
