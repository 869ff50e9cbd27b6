//! Error types for every stage of the export pipeline.
//!
//! Parse errors are per input line and never abort a batch. Auth errors abort
//! the current command. Fetch errors abort a single chunk or halt a single
//! pagination loop while keeping what was fetched before them.

use thiserror::Error;

use crate::normalize::EntityKind;

/// A single line of user input could not be turned into an entity ID.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("invalid URI '{0}': expected spotify:<kind>:<id>")]
    MalformedUri(String),

    #[error("invalid URI '{input}': expected a {expected} URI, found '{found}'")]
    InvalidUriKind {
        input: String,
        expected: EntityKind,
        found: String,
    },

    #[error("invalid URL '{input}': does not contain a valid {expected} ID")]
    UnrecognizedUrl { input: String, expected: EntityKind },

    #[error("invalid ID '{id}': not a valid Spotify {kind} ID")]
    InvalidId { kind: EntityKind, id: String },
}

/// The client-credentials token exchange failed.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("missing configuration: {0}")]
    Config(String),

    #[error("token request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token endpoint answered without an `access_token`.
    #[error("token response has no access_token: {payload}")]
    MissingToken { payload: String },
}

/// A chunk or page request did not yield the expected payload.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response is not valid JSON: {0}")]
    Decode(String),

    /// The response arrived but lacks the field the caller needs; `payload`
    /// is the raw body, usually a Spotify `{"error": ...}` object.
    #[error("response has no '{field}' field: {payload}")]
    MissingField { field: &'static str, payload: String },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("xlsx export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
