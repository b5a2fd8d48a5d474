//! Contact domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured contact fields parsed from one card's OCR text.
///
/// Absence is represented by the empty string, never by a missing field.
/// The record has no identity and no lifecycle: it is produced by the
/// extractor, optionally edited by the caller, and either discarded or
/// turned into a [`ContactData`] row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// A contact as persisted to a spreadsheet row: the extracted fields plus
/// the original OCR text and the timestamp stamped at append time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub raw_text: String,
    pub scanned_at: DateTime<Utc>,
}

impl ContactData {
    /// Build a spreadsheet row from extracted fields, stamping `scanned_at`
    /// with the current time. Column order matches the sheet header:
    /// Name, Phone, Email, Website, Raw Text, Scanned At.
    pub fn from_contact(contact: ExtractedContact, raw_text: String) -> Self {
        Self {
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            website: contact.website,
            raw_text,
            scanned_at: Utc::now(),
        }
    }

    /// The cell values for one appended row, in header order.
    pub fn row_values(&self) -> [String; 6] {
        [
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.website.clone(),
            self.raw_text.clone(),
            self.scanned_at.to_rfc3339(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracted_contact_serializes_camel_case() {
        let contact = ExtractedContact {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            phone: String::new(),
            website: String::new(),
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["name"], "Jane");
        assert_eq!(json["email"], "jane@x.com");
        assert_eq!(json["phone"], "");
        assert_eq!(json["website"], "");
    }

    #[test]
    fn row_values_follow_header_order() {
        let data = ContactData {
            name: "n".into(),
            email: "e".into(),
            phone: "p".into(),
            website: "w".into(),
            raw_text: "r".into(),
            scanned_at: Utc::now(),
        };
        let row = data.row_values();
        assert_eq!(&row[..5], &["n", "p", "e", "w", "r"]);
        assert!(row[5].contains('T'), "scanned_at should be RFC 3339");
    }

    #[test]
    fn from_contact_carries_fields_through() {
        let contact = ExtractedContact {
            name: "Ada".into(),
            email: "ada@math.org".into(),
            phone: "555-123-4567".into(),
            website: "www.math.org".into(),
        };
        let data = ContactData::from_contact(contact.clone(), "raw".into());
        assert_eq!(data.name, contact.name);
        assert_eq!(data.raw_text, "raw");
    }
}
