use serde_json::error::Category;
use thiserror::Error;

pub type SystemResult<T> = core::result::Result<T, SystemError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("configuration error: {0}")]
    Config(&'static str),

    #[error("render backend failed")]
    Render,
}

/// Transport-level failure of a weather or geocode request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    #[error("network not connected")]
    NotConnected,

    #[error("request timed out")]
    Timeout,

    #[error("DNS resolution failed")]
    Dns,

    #[error("HTTP status {0}")]
    Http(u16),

    #[error("transport error")]
    Transport,

    #[error("response larger than receive buffer")]
    BufferTooSmall,
}

/// A payload that arrived but cannot become a snapshot.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed JSON ({category:?}) at {line}:{column}")]
    Json {
        category: Category,
        line: usize,
        column: usize,
    },

    #[error("expected 5 daily entries, found {found}")]
    MissingDays { found: usize },

    #[error("field out of range: {0}")]
    OutOfRange(&'static str),

    #[error("required field empty: {0}")]
    EmptyField(&'static str),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Json {
            category: err.classify(),
            line: err.line(),
            column: err.column(),
        }
    }
}
