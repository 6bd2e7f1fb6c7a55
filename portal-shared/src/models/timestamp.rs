use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yew::{Html, ToHtml, html};

/// Wall-clock timestamp as serialized by the backend (RFC 3339).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// The current time, used when the client stamps an entry itself.
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.0.format("%Y-%m-%d %H:%M").to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_timestamp_serialization() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 8, 14, 30, 0).unwrap();
        let timestamp = Timestamp(dt);
        let serialized = serde_json::to_string(&timestamp).unwrap();

        assert_eq!(serialized, "\"2026-03-08T14:30:00Z\"");
    }

    #[test]
    fn test_timestamp_deserialization() {
        let deserialized: Timestamp = serde_json::from_str("\"2026-03-08T14:30:00Z\"").unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 3, 8, 14, 30, 0).unwrap();

        assert_eq!(deserialized.0, expected);
    }

    #[test]
    fn test_timestamp_formatting() {
        let dt = Utc.with_ymd_and_hms(2026, 3, 8, 14, 30, 0).unwrap();
        let timestamp = Timestamp(dt);

        assert_eq!(timestamp.to_html(), html! { "2026-03-08 14:30" });
    }
}
