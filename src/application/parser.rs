//! Message-body parsing for Fleep export data.
//!
//! Fleep stores each message's payload as an embedded JSON string; plain
//! chat lines are not JSON at all. Classification is deliberately
//! permissive: anything that is not a JSON object carrying `attachments`
//! is a skip, never an error.

use serde::Deserialize;

/// A single attachment entry as embedded in a message body.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAttachment {
    /// Download path, relative to the API base URL.
    pub file_url: String,
    /// Conversation the attachment belongs to.
    pub conversation_id: String,
    /// Message number within the conversation.
    pub message_nr: u64,
    /// Attachment identifier within the message.
    pub attachment_id: String,
    /// File size in bytes.
    pub file_size: u64,
}

/// Embedded message payload. Only the `attachments` key matters here;
/// everything else in the object is ignored.
#[derive(Debug, Deserialize)]
struct RawMessageBody {
    #[serde(default)]
    attachments: Option<Vec<RawAttachment>>,
}

/// Classification of a message body.
#[derive(Debug)]
pub enum MessageBody {
    /// A JSON object with an `attachments` array (possibly empty).
    Attachments(Vec<RawAttachment>),
    /// Valid JSON, but no `attachments` key.
    NoAttachments,
    /// Not parseable as the expected JSON shape (plain chat text).
    Unparsable,
}

/// Classifies a raw message body.
///
/// Never fails: malformed bodies are a normal occurrence in a chat
/// history and map to [`MessageBody::Unparsable`].
#[must_use]
pub fn classify_message_body(raw: &str) -> MessageBody {
    match serde_json::from_str::<RawMessageBody>(raw) {
        Ok(RawMessageBody {
            attachments: Some(attachments),
        }) => MessageBody::Attachments(attachments),
        Ok(_) => MessageBody::NoAttachments,
        Err(_) => MessageBody::Unparsable,
    }
}

/// Converts a byte count to megabytes, rounded half-to-even at one
/// decimal place.
#[must_use]
pub fn size_in_mb(bytes: u64) -> f64 {
    let mb = bytes as f64 / 1024.0 / 1024.0;
    (mb * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain_text_is_unparsable() {
        assert!(matches!(
            classify_message_body("hello there"),
            MessageBody::Unparsable
        ));
    }

    #[test]
    fn test_classify_json_scalar_is_unparsable() {
        // Valid JSON, but not an object the shape expects.
        assert!(matches!(
            classify_message_body("\"just a string\""),
            MessageBody::Unparsable
        ));
    }

    #[test]
    fn test_classify_object_without_attachments() {
        assert!(matches!(
            classify_message_body(r#"{"text": "hi"}"#),
            MessageBody::NoAttachments
        ));
    }

    #[test]
    fn test_classify_object_with_attachments() {
        let raw = r#"{
            "attachments": [{
                "file_url": "/file/abc",
                "conversation_id": "c1",
                "message_nr": 7,
                "attachment_id": "a1",
                "file_size": 2097152
            }]
        }"#;

        match classify_message_body(raw) {
            MessageBody::Attachments(attachments) => {
                assert_eq!(attachments.len(), 1);
                assert_eq!(attachments[0].file_url, "/file/abc");
                assert_eq!(attachments[0].message_nr, 7);
                assert_eq!(attachments[0].file_size, 2_097_152);
            }
            other => panic!("expected attachments, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_empty_attachments_array() {
        match classify_message_body(r#"{"attachments": []}"#) {
            MessageBody::Attachments(attachments) => assert!(attachments.is_empty()),
            other => panic!("expected empty attachments, got {other:?}"),
        }
    }

    #[test]
    fn test_size_in_mb_exact_megabyte() {
        assert_eq!(size_in_mb(1_048_576), 1.0);
    }

    #[test]
    fn test_size_in_mb_exact_half() {
        assert_eq!(size_in_mb(1_572_864), 1.5);
    }

    #[test]
    fn test_size_in_mb_rounds_down_near_half() {
        // 1610612 bytes = 1.5359... MB
        assert_eq!(size_in_mb(1_610_612), 1.5);
    }

    #[test]
    fn test_size_in_mb_two_megabytes() {
        assert_eq!(size_in_mb(2_097_152), 2.0);
    }

    #[test]
    fn test_size_in_mb_zero() {
        assert_eq!(size_in_mb(0), 0.0);
    }
}
