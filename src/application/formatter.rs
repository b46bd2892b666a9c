//! Output formatting for selected attachments.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{AttachmentRecord, Selection};

/// Formats a table listing of attachment records.
pub fn format_selection_table(records: &[AttachmentRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Size (MB)", "Conversation", "URL"]);

    for (i, record) in records.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            format!("{:.1}", record.size_mb),
            truncate(&record.conversation_id, 12),
            truncate(&record.url, 60),
        ]);
    }

    table.to_string()
}

/// Formats the selection summary line.
pub fn format_selection_summary(selection: &Selection) -> String {
    format!(
        "Files found: {}. Total size: {} MB.",
        selection.count().to_string().cyan(),
        format!("{:.1}", selection.total_mb).cyan()
    )
}

/// Truncates a string to max length with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, size_mb: f64) -> AttachmentRecord {
        AttachmentRecord {
            url: url.to_string(),
            conversation_id: "conv-1".to_string(),
            message_nr: 1,
            attachment_id: "a1".to_string(),
            size_mb,
        }
    }

    #[test]
    fn test_table_lists_each_record() {
        let records = vec![
            record("https://fleep.io/file/a.pdf", 1.5),
            record("https://fleep.io/file/b.zip", 2.0),
        ];
        let table = format_selection_table(&records);

        assert!(table.contains("a.pdf"));
        assert!(table.contains("b.zip"));
        assert!(table.contains("1.5"));
        assert!(table.contains("2.0"));
    }

    #[test]
    fn test_summary_reports_count_and_total() {
        let selection = Selection {
            records: vec![record("https://fleep.io/file/a.pdf", 1.5)],
            total_mb: 1.5,
        };
        let summary = format_selection_summary(&selection);

        assert!(summary.contains('1'));
        assert!(summary.contains("1.5"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-url", 10), "a-very-...");
    }
}
