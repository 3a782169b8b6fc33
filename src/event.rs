//! Event data model.
//!
//! An [`Event`] is one test status report or file attachment. Field
//! presence on the wire is derived from the field values themselves:
//! empty strings and `None` encode as absent. There is no separate
//! "is set" state to keep in sync.
//!
//! # Example
//!
//! ```
//! use resultwire::{Event, TestStatus};
//!
//! let event = Event {
//!     test_id: "api::login".into(),
//!     status: Some(TestStatus::Success),
//!     ..Event::default()
//! };
//! assert!(event.status.is_some());
//! ```

use std::time::SystemTime;

use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize};

/// Test status carried in the low three bits of the second flags byte.
///
/// The wire codes are 1 through 7 in declaration order; an absent status
/// encodes as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// The test exists but has not run.
    Exists,
    /// The test is currently running.
    InProgress,
    /// The test passed.
    Success,
    /// The test passed but was expected to fail.
    #[serde(rename = "uxsuccess")]
    UnexpectedSuccess,
    /// The test was skipped.
    Skip,
    /// The test failed.
    Fail,
    /// The test failed and was expected to fail.
    #[serde(rename = "xfail")]
    ExpectedFail,
}

impl TestStatus {
    /// 3-bit wire code for this status.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            TestStatus::Exists => 1,
            TestStatus::InProgress => 2,
            TestStatus::Success => 3,
            TestStatus::UnexpectedSuccess => 4,
            TestStatus::Skip => 5,
            TestStatus::Fail => 6,
            TestStatus::ExpectedFail => 7,
        }
    }

    /// Wire-protocol label for this status.
    pub fn label(self) -> &'static str {
        match self {
            TestStatus::Exists => "exists",
            TestStatus::InProgress => "inprogress",
            TestStatus::Success => "success",
            TestStatus::UnexpectedSuccess => "uxsuccess",
            TestStatus::Skip => "skip",
            TestStatus::Fail => "fail",
            TestStatus::ExpectedFail => "xfail",
        }
    }

    /// Look up a status by its wire-protocol label.
    ///
    /// Unrecognized labels (including the empty string) map to `None`.
    /// The format has no way to signal an invalid status distinctly from
    /// no status, so unknown labels are treated as absent, not rejected.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "exists" => Some(TestStatus::Exists),
            "inprogress" => Some(TestStatus::InProgress),
            "success" => Some(TestStatus::Success),
            "uxsuccess" => Some(TestStatus::UnexpectedSuccess),
            "skip" => Some(TestStatus::Skip),
            "fail" => Some(TestStatus::Fail),
            "xfail" => Some(TestStatus::ExpectedFail),
            _ => None,
        }
    }
}

/// A status or file attachment event.
///
/// Events are constructed by the caller and passed once to the encoder;
/// each event produces exactly one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    /// Test case identifier. Empty means absent.
    #[serde(default)]
    pub test_id: String,

    /// Test status. Deserialization is lenient: an unknown label becomes
    /// `None` rather than an error.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<TestStatus>,

    /// Event instant, encoded with nanosecond resolution.
    #[serde(default)]
    pub timestamp: Option<SystemTime>,

    /// Attachment name. Empty means no attachment.
    #[serde(default)]
    pub file_name: String,

    /// Attachment content. Only emitted when `file_name` is non-empty;
    /// may be empty, in which case a zero-length content section is
    /// still written.
    #[serde(default)]
    pub file_bytes: Bytes,

    /// MIME type of the attachment. Independent of attachment presence.
    #[serde(default)]
    pub mime_type: String,
}

/// Deserialize a status label, mapping unrecognized labels to `None`.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<TestStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(TestStatus::from_label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_declaration_order() {
        let expected = [
            (TestStatus::Exists, 1),
            (TestStatus::InProgress, 2),
            (TestStatus::Success, 3),
            (TestStatus::UnexpectedSuccess, 4),
            (TestStatus::Skip, 5),
            (TestStatus::Fail, 6),
            (TestStatus::ExpectedFail, 7),
        ];
        for (status, code) in expected {
            assert_eq!(status.code(), code);
        }
    }

    #[test]
    fn test_from_label_round_trips() {
        for status in [
            TestStatus::Exists,
            TestStatus::InProgress,
            TestStatus::Success,
            TestStatus::UnexpectedSuccess,
            TestStatus::Skip,
            TestStatus::Fail,
            TestStatus::ExpectedFail,
        ] {
            assert_eq!(TestStatus::from_label(status.label()), Some(status));
        }
    }

    #[test]
    fn test_from_label_unknown_is_absent() {
        assert_eq!(TestStatus::from_label(""), None);
        assert_eq!(TestStatus::from_label("undefined"), None);
        assert_eq!(TestStatus::from_label("SUCCESS"), None);
    }

    #[test]
    fn test_default_event_is_all_absent() {
        let event = Event::default();
        assert!(event.test_id.is_empty());
        assert!(event.status.is_none());
        assert!(event.timestamp.is_none());
        assert!(event.file_name.is_empty());
        assert!(event.file_bytes.is_empty());
        assert!(event.mime_type.is_empty());
    }

    #[test]
    fn test_lenient_status_deserialization() {
        let event: Event = serde_json::from_str(
            r#"{"test_id": "t1", "status": "not-a-status"}"#,
        )
        .unwrap();
        assert_eq!(event.test_id, "t1");
        assert_eq!(event.status, None);

        let event: Event =
            serde_json::from_str(r#"{"test_id": "t2", "status": "uxsuccess"}"#).unwrap();
        assert_eq!(event.status, Some(TestStatus::UnexpectedSuccess));
    }

    #[test]
    fn test_status_serializes_as_wire_label() {
        let event = Event {
            status: Some(TestStatus::ExpectedFail),
            ..Event::default()
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""status":"xfail""#));
    }
}
