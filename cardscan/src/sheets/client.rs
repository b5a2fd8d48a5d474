use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::config::SheetsConfig;
use crate::error::{CardscanError, Result};
use crate::models::contact::ContactData;
use crate::models::sheet::{SpreadsheetInfo, SHEET_HEADER, SHEET_TAB};

const LIST_PAGE_SIZE: u32 = 50;

#[derive(Clone, Debug)]
pub struct SheetsClient {
    client: Client,
    sheets_base_url: String,
    drive_base_url: String,
}

#[derive(Debug, Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSpreadsheetResponse {
    spreadsheet_id: String,
}

#[derive(Debug, Serialize)]
struct AppendRequest {
    values: Vec<Vec<String>>,
}

impl SheetsClient {
    pub fn new(config: &SheetsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CardscanError::Sheets(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            sheets_base_url: config.sheets_base_url.clone(),
            drive_base_url: config.drive_base_url.clone(),
        })
    }

    /// List the caller's spreadsheets, most recently modified first.
    pub async fn list_spreadsheets(&self, access_token: &str) -> Result<Vec<SpreadsheetInfo>> {
        let response = self
            .client
            .get(format!("{}/files", self.drive_base_url))
            .bearer_auth(access_token)
            .query(&[
                (
                    "q",
                    "mimeType='application/vnd.google-apps.spreadsheet' and trashed=false",
                ),
                ("fields", "files(id, name)"),
                ("orderBy", "modifiedTime desc"),
                ("pageSize", &LIST_PAGE_SIZE.to_string()),
            ])
            .send()
            .await?;

        let body: DriveFileList = Self::check(response, "list spreadsheets").await?;

        Ok(body
            .files
            .into_iter()
            .map(|f| SpreadsheetInfo {
                id: f.id,
                name: f.name,
            })
            .collect())
    }

    /// Create a spreadsheet with a `Contacts` tab seeded with the header row.
    pub async fn create_spreadsheet(
        &self,
        access_token: &str,
        title: &str,
    ) -> Result<SpreadsheetInfo> {
        let header_cells: Vec<serde_json::Value> = SHEET_HEADER
            .iter()
            .map(|h| json!({ "userEnteredValue": { "stringValue": h } }))
            .collect();

        let body = json!({
            "properties": { "title": title },
            "sheets": [{
                "properties": { "title": SHEET_TAB },
                "data": [{ "rowData": [{ "values": header_cells }] }]
            }]
        });

        let response = self
            .client
            .post(format!("{}/spreadsheets", self.sheets_base_url))
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await?;

        let created: CreateSpreadsheetResponse = Self::check(response, "create spreadsheet").await?;

        Ok(SpreadsheetInfo {
            id: created.spreadsheet_id,
            name: title.to_string(),
        })
    }

    /// Append one contact row to the `Contacts` tab.
    pub async fn append_row(
        &self,
        access_token: &str,
        spreadsheet_id: &str,
        data: &ContactData,
    ) -> Result<()> {
        let request = AppendRequest {
            values: vec![data.row_values().to_vec()],
        };

        let response = self
            .client
            .post(format!(
                "{}/spreadsheets/{}/values/{}!A:F:append",
                self.sheets_base_url, spreadsheet_id, SHEET_TAB
            ))
            .bearer_auth(access_token)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .json(&request)
            .send()
            .await?;

        Self::check::<serde_json::Value>(response, "append row").await?;
        Ok(())
    }

    /// Map a Google API response to a typed body or a domain error.
    /// 401/403 become auth errors so handlers can tell the caller to
    /// re-authenticate rather than reporting a server fault.
    async fn check<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        action: &str,
    ) -> Result<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CardscanError::ApiAuth(format!(
                "Google rejected the access token while trying to {action}"
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CardscanError::Sheets(format!(
                "Failed to {action}: {status} - {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CardscanError::Sheets(format!("Failed to parse {action} response: {e}")))
    }
}
