//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`Order`].

use std::str::FromStr;

use url::Url;

/// Trait implemented by query builders. Provides URL serialization and
/// shared builder methods for paging and ordering.
pub trait Query {
    /// Returns the query parameters as `(key, value)` pairs in emission order.
    ///
    /// Multi-valued filters appear once per value under the same key.
    fn to_pairs(&self) -> Vec<(&'static str, String)>;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// A query without parameters returns the URL unchanged, so no empty `?` is added.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.to_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(pairs.iter().map(|(key, value)| (*key, value.as_str())));
        }
        url
    }

    /// Sets the 1-based offset of the first result.
    fn with_start(mut self, start: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().start = Some(start);
        self
    }

    /// Sets the maximum number of results per page.
    fn with_count(mut self, count: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().count = Some(count);
        self
    }

    /// Sets the result ordering.
    fn with_order(mut self, order: Order) -> Self
    where
        Self: Sized,
    {
        self.get_common().order = Some(order);
        self
    }
}

/// Result ordering. Every variant sorts descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Most recently updated first.
    Update = 1,
    /// Latest event start time first.
    Start = 2,
    /// Most recently created first.
    Create = 3,
}
impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "update" | "updated" => Ok(Order::Update),
            "2" | "start" | "started" => Ok(Order::Start),
            "3" | "create" | "created" => Ok(Order::Create),
            other => Err(format!(
                "unknown order '{}', expected update, start or create",
                other
            )),
        }
    }
}

/// Paging and ordering fields. `None` leaves the choice to the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryCommon {
    /// 1-based offset of the first result.
    pub start: Option<u32>,
    /// Result ordering.
    pub order: Option<Order>,
    /// Results per page. The API defaults to 10.
    pub count: Option<u32>,
}

impl QueryCommon {
    /// Appends the paging parameters that are set.
    pub fn add_to_pairs(&self, pairs: &mut Vec<(&'static str, String)>) {
        if let Some(start) = self.start {
            pairs.push(("start", start.to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.to_string()));
        }
        if let Some(count) = self.count {
            pairs.push(("count", count.to_string()));
        }
    }
}
