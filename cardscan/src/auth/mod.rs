//! Access token refresh.
//!
//! The service never stores Google credentials for a user. Clients hold an
//! access token and a refresh token; when the access token expires they call
//! `POST /api/v1/auth:refresh` and this module exchanges the refresh token
//! at the OAuth token endpoint. The exchange returns a brand-new immutable
//! [`TokenSet`] rather than mutating any shared session state, and a failed
//! exchange is a distinct `RefreshFailed` error so the UI can tell
//! "sign in again" apart from ordinary request failures.

mod token;

pub use token::{TokenClient, TokenSet};
