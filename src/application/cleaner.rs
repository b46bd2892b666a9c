//! Sequential deletion of selected attachments.
//!
//! Deletion runs to completion over the selection; the first API failure
//! is fatal and halts the remaining deletions. Already-deleted files are
//! not tracked or rolled back.

use colored::Colorize;

use crate::domain::{Result, Selection, Session};
use crate::infrastructure::FleepClient;

/// Summary of a completed deletion run.
#[derive(Debug, Clone, Copy)]
pub struct CleanupResult {
    /// Number of attachments deleted.
    pub deleted: usize,
    /// Combined size of the deleted attachments, in megabytes.
    pub total_mb: f64,
}

/// Deletes every attachment in the selection, in order, printing progress
/// per file.
///
/// # Errors
/// Returns error on the first failed delete call; prior deletions stand.
pub fn delete_selected(
    client: &FleepClient,
    session: &Session,
    selection: &Selection,
) -> Result<CleanupResult> {
    for record in &selection.records {
        println!(
            "{} [{:.1} MB] {}",
            "Deleting".yellow(),
            record.size_mb,
            record.url
        );
        client.delete_attachment(session, record)?;
        tracing::info!(
            conversation_id = %record.conversation_id,
            message_nr = record.message_nr,
            attachment_id = %record.attachment_id,
            "Attachment deleted"
        );
    }

    Ok(CleanupResult {
        deleted: selection.count(),
        total_mb: selection.total_mb,
    })
}
