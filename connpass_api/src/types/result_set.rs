use serde::{Deserialize, Serialize};

use super::Event;

/// One page of search results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResultSet {
    /// Number of events in this page.
    #[serde(rename = "results_returned")]
    pub returned: u32,

    /// Number of events matching the query across all pages.
    #[serde(rename = "results_available")]
    pub available: u32,

    /// 1-based offset of the first event in this page.
    #[serde(rename = "results_start")]
    pub start: u32,

    pub events: Vec<Event>,
}

impl ResultSet {
    /// Offset of the page after this one, or `None` if this was the last page.
    ///
    /// Offsets are 1-based, so the page after `start..start + returned` begins
    /// at `start + returned`, and nothing is left once that exceeds
    /// `available`. An empty page always ends the iteration.
    pub fn next_start(&self) -> Option<u32> {
        if self.returned == 0 {
            return None;
        }
        let next = self.start.checked_add(self.returned)?;
        if next > self.available {
            None
        } else {
            Some(next)
        }
    }

    /// Offset of the last event in this page, if any.
    pub fn end(&self) -> Option<u32> {
        (self.returned > 0).then(|| self.start.saturating_add(self.returned - 1))
    }
}
