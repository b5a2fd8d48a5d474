//! Spreadsheet domain models.

use serde::{Deserialize, Serialize};

/// A spreadsheet the caller can append scanned contacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpreadsheetInfo {
    pub id: String,
    pub name: String,
}

/// Header row written into newly created contact sheets.
pub const SHEET_HEADER: [&str; 6] = ["Name", "Phone", "Email", "Website", "Raw Text", "Scanned At"];

/// Title of the tab contacts are written to.
pub const SHEET_TAB: &str = "Contacts";
