//! Domain models for Fleep export data.
//!
//! The export document shapes mirror the JSON file produced by Fleep's
//! account export; [`AttachmentRecord`] is the derived shape the rest of
//! the pipeline works with.

use serde::{Deserialize, Serialize};

/// A contact entry from the export's `contacts` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    /// Account identifier, referenced by conversations and messages.
    pub account_id: String,
    /// Display name as formatted by Fleep.
    #[serde(rename = "_formatted_name")]
    pub formatted_name: String,
}

/// A message inside a conversation. The `message` field holds an embedded
/// JSON string which, for file posts, carries an `attachments` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportMessage {
    /// Account id of the message author.
    pub account_id: String,
    /// Raw message body. Plain chat messages are not JSON.
    pub message: String,
}

/// A conversation from the export's `conversations` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    /// Account id of the profile that owns this conversation.
    pub profile_id: String,
    /// Messages in their original order.
    #[serde(default)]
    pub messages: Vec<ExportMessage>,
}

/// The top-level export document.
///
/// Both collections are required; an export without them is malformed and
/// parsing fails rather than silently producing an empty result.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportDocument {
    pub contacts: Vec<Contact>,
    pub conversations: Vec<Conversation>,
}

/// A single attachment reconstructed from the message history.
///
/// Only attachments authored by the conversation's own profile are
/// collected; see the history walker for the exact filtering rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachmentRecord {
    /// Absolute download URL.
    pub url: String,
    /// Conversation the attachment belongs to.
    pub conversation_id: String,
    /// Message number within the conversation, as assigned by Fleep.
    pub message_nr: u64,
    /// Attachment identifier within the message.
    pub attachment_id: String,
    /// File size in megabytes, rounded half-to-even at one decimal.
    pub size_mb: f64,
}

/// The subset of attachments matched by the size/extension filters,
/// together with the reporting totals.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Matched records, in the same order they were collected.
    pub records: Vec<AttachmentRecord>,
    /// Sum of the rounded per-record sizes, in megabytes.
    pub total_mb: f64,
}

impl Selection {
    /// Number of selected attachments.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing matched the filters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Session credentials returned by the login endpoint, required on all
/// subsequent authenticated calls.
#[derive(Debug, Clone)]
pub struct Session {
    /// Ticket id from the login response body.
    pub ticket: String,
    /// Token id from the login response's `token_id` cookie.
    pub token: String,
}

impl Session {
    /// Cookie header value carrying the session token.
    #[must_use]
    pub fn cookie(&self) -> String {
        format!("token_id={}", self.token)
    }
}

/// Export metadata returned by the sync endpoint: where to download the
/// archive and what the export file inside it is called.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRef {
    /// Download URL for the export archive. May be relative to the API base.
    pub file_url: String,
    /// Name of the export JSON file inside the archive.
    pub file_name: String,
    /// Stable identifier used to name the cached archive on disk.
    pub file_id: String,
}
