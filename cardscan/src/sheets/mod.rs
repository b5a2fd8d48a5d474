//! Google Sheets / Drive client.
//!
//! Thin REST client over the two Google APIs the service needs: Drive v3 to
//! list the caller's spreadsheets, Sheets v4 to create a contacts sheet and
//! append scanned rows. Every call is made with the caller's bearer access
//! token; the service itself holds no Google credentials for these APIs.

mod client;

pub use client::SheetsClient;
