//! Export-history walking.
//!
//! Reconstructs attachment records from the nested message history and
//! correlates each attachment with its authoring account. The contact
//! index is built in full before any conversation is walked, and output
//! order follows the export's traversal order exactly.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::{AppError, AttachmentRecord, Contact, ExportDocument, Result};

use super::parser::{classify_message_body, size_in_mb, MessageBody};

/// Reads and deserializes an export document from disk.
///
/// # Errors
/// Returns error if the file cannot be read or is not a valid export.
pub fn read_export(path: &Path) -> Result<ExportDocument> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read export file: {}", path.display()), e))?;

    serde_json::from_str(&content).map_err(AppError::json_parse)
}

/// Builds the account-id to display-name index from the contact list.
///
/// Duplicate account ids overwrite silently; the last entry wins.
#[must_use]
pub fn build_contact_index(contacts: &[Contact]) -> HashMap<String, String> {
    let mut index = HashMap::with_capacity(contacts.len());
    for contact in contacts {
        index.insert(contact.account_id.clone(), contact.formatted_name.clone());
    }
    index
}

/// Collects every attachment authored by a conversation's own profile.
///
/// The contact index is built in full first, then threaded into the
/// conversation walk; there is no shared mutable state.
///
/// # Errors
/// Returns [`AppError::UnknownProfile`] for an unresolvable `profile_id`.
pub fn collect_attachments(
    export: &ExportDocument,
    base_url: &str,
) -> Result<Vec<AttachmentRecord>> {
    let index = build_contact_index(&export.contacts);
    walk_conversations(&index, export, base_url)
}

/// Walks the conversations against a prebuilt contact index.
///
/// Filtering rules:
/// - A conversation whose `profile_id` is missing from the contact index
///   is a fatal error.
/// - A message body that is not attachment-bearing JSON is skipped.
/// - A message whose author is missing from the contact index, or whose
///   author's name differs from the conversation owner's name, is skipped
///   together with its attachments.
fn walk_conversations(
    index: &HashMap<String, String>,
    export: &ExportDocument,
    base_url: &str,
) -> Result<Vec<AttachmentRecord>> {
    let base = base_url.trim_end_matches('/');
    let mut records = Vec::new();

    for conversation in &export.conversations {
        let owner_name =
            index
                .get(&conversation.profile_id)
                .ok_or_else(|| AppError::UnknownProfile {
                    profile_id: conversation.profile_id.clone(),
                })?;

        for message in &conversation.messages {
            let attachments = match classify_message_body(&message.message) {
                MessageBody::Attachments(attachments) => attachments,
                MessageBody::NoAttachments | MessageBody::Unparsable => continue,
            };

            let Some(author_name) = index.get(&message.account_id) else {
                tracing::debug!(
                    account_id = %message.account_id,
                    "Skipping message from account absent in contact list"
                );
                continue;
            };

            if author_name != owner_name {
                continue;
            }

            for attachment in attachments {
                records.push(AttachmentRecord {
                    url: format!("{base}{}", attachment.file_url),
                    conversation_id: attachment.conversation_id,
                    message_nr: attachment.message_nr,
                    attachment_id: attachment.attachment_id,
                    size_mb: size_in_mb(attachment.file_size),
                });
            }
        }
    }

    tracing::info!("Collected {} attachment records", records.len());

    Ok(records)
}
