//! Event records returned by the search endpoint.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Unique identifier for an event.
pub type EventID = i64;

/// Unique identifier for an event series (a community's group page).
pub type SeriesID = i64;

/// A single event as listed by connpass.
///
/// Timestamps are kept as the API sends them; use [`Event::start_time`] and
/// friends to parse them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_id: EventID,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Short tagline shown under the title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub catch: String,

    /// Event description (HTML).
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub event_url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hash_tag: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub started_at: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ended_at: String,

    /// Maximum number of attendees, if capped.
    #[serde(default)]
    pub limit: Option<i64>,

    /// `participation` for connpass-managed signups, `advertisement` otherwise.
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_type: String,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub place: Option<String>,

    #[serde(default, deserialize_with = "number_or_string")]
    pub lat: Option<String>,

    #[serde(default, deserialize_with = "number_or_string")]
    pub lon: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub owner_id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub owner_nickname: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub owner_display_name: String,

    /// Accepted participants.
    #[serde(default, deserialize_with = "null_as_default")]
    pub accepted: i64,

    /// Participants on the waiting list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub waiting: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Event {
    pub fn start_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.started_at)
    }

    pub fn end_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.ended_at)
    }

    pub fn updated_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.updated_at)
    }

    pub fn latitude(&self) -> Option<f64> {
        self.lat.as_deref().and_then(|lat| lat.trim().parse().ok())
    }

    pub fn longitude(&self) -> Option<f64> {
        self.lon.as_deref().and_then(|lon| lon.trim().parse().ok())
    }

    /// True when the event has a cap and it has been reached.
    pub fn is_full(&self) -> bool {
        matches!(self.limit, Some(limit) if self.accepted >= limit)
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Coordinates arrive as strings from the API but as numbers from some mirrors.
fn number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Coordinate>::deserialize(deserializer)? {
        Some(Coordinate::Text(text)) if text.trim().is_empty() => None,
        Some(Coordinate::Text(text)) => Some(text),
        Some(Coordinate::Number(number)) => Some(number.to_string()),
        None => None,
    })
}
