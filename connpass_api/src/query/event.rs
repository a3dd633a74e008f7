use crate::types::{EventID, SeriesID};

use super::{
    common::{Query, QueryCommon},
    time::{encode_times, Time},
};

/// Search criteria for `/api/v1/event/`.
///
/// Values inside one field are OR'd by the server, distinct fields are AND'd.
/// Empty fields add no constraint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventQuery {
    pub common: QueryCommon,
    pub event_ids: Vec<EventID>,
    /// Keywords that must all match.
    pub keywords: Vec<String>,
    /// Keywords of which at least one must match.
    pub keywords_or: Vec<String>,
    pub times: Vec<Time>,
    /// Nicknames of participants.
    pub nicknames: Vec<String>,
    pub owner_nicknames: Vec<String>,
    pub series_ids: Vec<SeriesID>,
}

impl Query for EventQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for event_id in self.event_ids.iter() {
            pairs.push(("event_id", event_id.to_string()));
        }
        for keyword in self.keywords.iter() {
            pairs.push(("keyword", keyword.clone()));
        }
        for keyword in self.keywords_or.iter() {
            pairs.push(("keyword_or", keyword.clone()));
        }
        let (ymd, ym) = encode_times(&self.times);
        if let Some(ymd) = ymd {
            pairs.push(("ymd", ymd));
        }
        if let Some(ym) = ym {
            pairs.push(("ym", ym));
        }
        for nickname in self.nicknames.iter() {
            pairs.push(("nickname", nickname.clone()));
        }
        for owner in self.owner_nicknames.iter() {
            pairs.push(("owner_nickname", owner.clone()));
        }
        for series_id in self.series_ids.iter() {
            pairs.push(("series_id", series_id.to_string()));
        }
        self.common.add_to_pairs(&mut pairs);
        pairs
    }
}

impl EventQuery {
    pub fn with_event_id(mut self, event_id: EventID) -> Self {
        self.event_ids.push(event_id);
        self
    }
    pub fn with_event_ids(mut self, event_ids: &[EventID]) -> Self {
        self.event_ids.extend_from_slice(event_ids);
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keywords.push(keyword.to_string());
        self
    }
    pub fn with_keywords<S: AsRef<str>>(mut self, keywords: &[S]) -> Self {
        self.keywords
            .extend(keywords.iter().map(|k| k.as_ref().to_string()));
        self
    }

    pub fn with_keyword_or(mut self, keyword: &str) -> Self {
        self.keywords_or.push(keyword.to_string());
        self
    }
    pub fn with_keywords_or<S: AsRef<str>>(mut self, keywords: &[S]) -> Self {
        self.keywords_or
            .extend(keywords.iter().map(|k| k.as_ref().to_string()));
        self
    }

    pub fn with_time(mut self, time: Time) -> Self {
        self.times.push(time);
        self
    }
    pub fn with_times(mut self, times: &[Time]) -> Self {
        self.times.extend_from_slice(times);
        self
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.nicknames.push(nickname.to_string());
        self
    }
    pub fn with_nicknames<S: AsRef<str>>(mut self, nicknames: &[S]) -> Self {
        self.nicknames
            .extend(nicknames.iter().map(|n| n.as_ref().to_string()));
        self
    }

    pub fn with_owner_nickname(mut self, nickname: &str) -> Self {
        self.owner_nicknames.push(nickname.to_string());
        self
    }
    pub fn with_owner_nicknames<S: AsRef<str>>(mut self, nicknames: &[S]) -> Self {
        self.owner_nicknames
            .extend(nicknames.iter().map(|n| n.as_ref().to_string()));
        self
    }

    pub fn with_series_id(mut self, series_id: SeriesID) -> Self {
        self.series_ids.push(series_id);
        self
    }
    pub fn with_series_ids(mut self, series_ids: &[SeriesID]) -> Self {
        self.series_ids.extend_from_slice(series_ids);
        self
    }
}
