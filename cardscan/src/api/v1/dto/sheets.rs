//! Spreadsheet request/response DTOs for the v1 API.

use serde::{Deserialize, Serialize};

use crate::models::{ContactData, ExtractedContact, SpreadsheetInfo};

/// Response body for `GET /v1/sheets`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListSheetsResponse {
    pub spreadsheets: Vec<SpreadsheetInfo>,
}

/// Request body for `POST /v1/sheets`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSheetRequest {
    /// Title of the spreadsheet to create.
    pub title: String,
}

/// Response body for `POST /v1/sheets`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSheetResponse {
    pub spreadsheet: SpreadsheetInfo,
}

/// Request body for `POST /v1/sheets/{spreadsheetId}/rows`.
///
/// The contact as confirmed (and possibly edited) by the user. Every field
/// defaults to the empty string, mirroring the extractor's absent-field
/// convention. `scanned_at` is stamped server-side at append time.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppendContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub raw_text: String,
}

impl AppendContactRequest {
    /// Convert to the persistence model. The append timestamp is stamped by
    /// [`ContactData::from_contact`].
    pub fn into_contact_data(self) -> ContactData {
        ContactData::from_contact(
            ExtractedContact {
                name: self.name,
                email: self.email,
                phone: self.phone,
                website: self.website,
            },
            self.raw_text,
        )
    }
}

/// Response body for `POST /v1/sheets/{spreadsheetId}/rows`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppendContactResponse {
    pub saved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_request_fields_default_to_empty() {
        let req: AppendContactRequest =
            serde_json::from_str(r#"{"name":"Jane Doe"}"#).unwrap();
        assert_eq!(req.name, "Jane Doe");
        assert_eq!(req.email, "");
        assert_eq!(req.raw_text, "");
    }

    #[test]
    fn into_contact_data_stamps_scanned_at() {
        let before = chrono::Utc::now();
        let data = AppendContactRequest {
            name: "n".into(),
            ..Default::default()
        }
        .into_contact_data();
        assert!(data.scanned_at >= before);
        assert_eq!(data.name, "n");
    }
}
