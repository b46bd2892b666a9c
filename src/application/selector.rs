//! Attachment selection by size and extension.

use crate::domain::{AttachmentRecord, Selection};

/// Filter criteria for attachment selection. Both filters combine with
/// AND logic.
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    /// Minimum size in megabytes, inclusive.
    pub min_size_mb: f64,
    /// URL suffix to match, case-sensitive. Empty means no extension filter.
    pub extension: String,
}

/// Selects the attachments matching the given criteria, preserving order.
///
/// The returned [`Selection`] totals the *rounded* per-record sizes, which
/// is what gets reported to the user.
#[must_use]
pub fn select_attachments(records: Vec<AttachmentRecord>, options: &SelectOptions) -> Selection {
    let records: Vec<AttachmentRecord> = records
        .into_iter()
        .filter(|record| {
            if record.size_mb < options.min_size_mb {
                return false;
            }
            options.extension.is_empty() || record.url.ends_with(&options.extension)
        })
        .collect();

    let total_mb: f64 = records.iter().map(|r| r.size_mb).sum();

    Selection { records, total_mb }
}
