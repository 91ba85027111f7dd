//! Call-log records and list pages as served by the voice API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One turn of a call transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub role: String,
    pub content: String,
}

/// A single call-log entry.
///
/// Created server-side; clients only read records and toggle `starred`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLogRecord {
    pub id: String,
    pub status: String,
    /// Call duration in seconds. Always >= 0.
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub transcript: Vec<TranscriptTurn>,
    #[serde(default)]
    pub ended_reason: String,
    pub recording_url: Option<String>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub starred: bool,
    pub assistant_id: String,
    #[serde(default)]
    pub assistant_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub organization_id: String,
}

impl CallLogRecord {
    /// Whether a recording is available for playback or download.
    #[must_use]
    pub fn has_recording(&self) -> bool {
        self.recording_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// One page of call-log results.
///
/// Concatenating pages `1..k` in fetch order yields a prefix of the server's
/// ordering for a given (organization, query) pair, absent intervening
/// mutations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallLogPage {
    #[serde(default)]
    pub docs: Vec<CallLogRecord>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(recording_url: Option<&str>) -> CallLogRecord {
        CallLogRecord {
            id: "call-1".into(),
            status: "ended".into(),
            duration: 42.0,
            cost: 0.18,
            summary: String::new(),
            transcript: vec![],
            ended_reason: "customer-ended-call".into(),
            recording_url: recording_url.map(String::from),
            started_at: Utc::now(),
            ended_at: None,
            starred: false,
            assistant_id: "asst-1".into(),
            assistant_name: "Support".into(),
            phone_number: "+15550100".into(),
            organization_id: "org-1".into(),
        }
    }

    #[test]
    fn has_recording_requires_non_empty_url() {
        assert!(record(Some("https://cdn.example/rec.wav")).has_recording());
        assert!(!record(Some("")).has_recording());
        assert!(!record(None).has_recording());
    }

    #[test]
    fn deserializes_api_shape() {
        let json = serde_json::json!({
            "id": "c-9",
            "status": "ended",
            "duration": 12.5,
            "cost": 0.02,
            "summary": "caller asked about billing",
            "transcript": [{"role": "assistant", "content": "Hello"}],
            "endedReason": "assistant-ended-call",
            "recordingUrl": null,
            "startedAt": "2025-03-01T10:00:00Z",
            "endedAt": "2025-03-01T10:00:12Z",
            "starred": true,
            "assistantId": "a-1",
            "assistantName": "Sales Agent",
            "phoneNumber": "+15550123",
            "organizationId": "17"
        });
        let rec: CallLogRecord = serde_json::from_value(json).unwrap();
        assert_eq!(rec.transcript.len(), 1);
        assert!(rec.starred);
        assert!(!rec.has_recording());
    }
}
