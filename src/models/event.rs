//! Event model and trait implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::models::metadata::{Metadata, Resource};
use crate::traits::{Get, List};

/// An audit event, e.g. `app.crash` or `audit.app.update`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub metadata: Metadata,
    pub entity: EventEntity,
}

/// Event attributes. Unlike other timestamps, `timestamp` is parsed.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventEntity {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub actor: String,
    #[serde_as(as = "DefaultOnNull")]
    pub actor_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub actor_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub actee: String,
    #[serde_as(as = "DefaultOnNull")]
    pub actee_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub actee_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub timestamp: DateTime<Utc>,
    #[serde_as(as = "DefaultOnNull")]
    pub space_guid: String,
    #[serde_as(as = "DefaultOnNull")]
    pub organization_guid: String,
}

impl Resource for Event {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl Event {
    pub fn event_type(&self) -> &str {
        &self.entity.event_type
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.entity.timestamp
    }
}

impl List for Event {
    const PATH: &'static str = "/v2/events";
}

impl Get for Event {
    fn path(guid: &str) -> String {
        format!("{}/{}", Self::PATH, urlencoding::encode(guid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_timestamp_is_parsed() {
        let event: Event = serde_json::from_value(serde_json::json!({
            "metadata": { "guid": "ev-1" },
            "entity": { "type": "app.crash", "timestamp": "2016-06-08T16:41:23Z" }
        }))
        .unwrap();

        assert_eq!(event.event_type(), "app.crash");
        assert_eq!(
            event.timestamp(),
            Utc.with_ymd_and_hms(2016, 6, 8, 16, 41, 23).unwrap()
        );
    }

    #[test]
    fn test_event_bad_timestamp_fails() {
        let result: serde_json::Result<Event> = serde_json::from_value(serde_json::json!({
            "entity": { "timestamp": "yesterday" }
        }));
        assert!(result.is_err());
    }
}
