//! Domain-level error types for fleep-cleaner.
//!
//! All errors are typed with `thiserror` and provide meaningful context
//! without exposing internal details to end users.

use thiserror::Error;

/// Application-level errors. Every variant is fatal for the current run;
/// recoverable conditions (unparsable message bodies, declined confirmation)
/// are not modeled as errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Login was rejected or returned an unusable response.
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// An authenticated API call returned a non-success status.
    #[error("{context} failed: HTTP {status}: {body}")]
    Api {
        context: String,
        status: u16,
        body: String,
    },

    /// The request never produced a response (connection, TLS, timeout).
    #[error("HTTP request failed: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// A conversation references a profile that is absent from the
    /// export's contact list.
    #[error("Conversation profile '{profile_id}' is not present in the contact list")]
    UnknownProfile { profile_id: String },

    /// JSON parsing failed on the export document itself.
    #[error("JSON parse error: {message}")]
    JsonParse {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The export archive could not be read or extracted.
    #[error("Archive error: {message}")]
    Archive {
        message: String,
        #[source]
        source: Option<zip::result::ZipError>,
    },

    /// Configuration or environment error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO operation failed.
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl AppError {
    /// Create an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create an API error from a non-success response.
    pub fn api(context: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            context: context.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a transport error from a reqwest failure.
    pub fn http(message: impl Into<String>, err: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source: err,
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse(err: serde_json::Error) -> Self {
        Self::JsonParse {
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create an archive error with context.
    pub fn archive(message: impl Into<String>, err: zip::result::ZipError) -> Self {
        Self::Archive {
            message: message.into(),
            source: Some(err),
        }
    }

    /// Create an IO error with context.
    pub fn io(message: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(err),
        }
    }
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
