//! List view state: the three selections behind the publication list

use serde::{Deserialize, Serialize};

/// The topic restriction selected via the filter pills.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicFilter {
    /// No topic restriction (the "all" pill).
    All,
    /// Exact-match restriction to one topic tag.
    Topic(String),
}

impl TopicFilter {
    /// Parse a pill value. The sentinel `"all"` (and an empty value) mean
    /// no restriction; anything else is a topic tag.
    pub fn from_value(value: &str) -> Self {
        match value {
            "" | "all" => TopicFilter::All,
            topic => TopicFilter::Topic(topic.to_string()),
        }
    }

    /// The wire value of this filter, as carried by the pill.
    pub fn value(&self) -> &str {
        match self {
            TopicFilter::All => "all",
            TopicFilter::Topic(topic) => topic,
        }
    }
}

impl Default for TopicFilter {
    fn default() -> Self {
        TopicFilter::All
    }
}

/// Sort key for the publication list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Newest first (the default).
    YearDesc,
    YearAsc,
    TitleAsc,
}

impl SortKey {
    /// Parse a sort selector value; unknown values fall back to the default.
    pub fn from_value(value: &str) -> Self {
        match value {
            "year_asc" => SortKey::YearAsc,
            "title_asc" => SortKey::TitleAsc,
            _ => SortKey::YearDesc,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            SortKey::YearDesc => "year_desc",
            SortKey::YearAsc => "year_asc",
            SortKey::TitleAsc => "title_asc",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::YearDesc
    }
}

/// The whole of the list view's mutable state. Rendering is a pure
/// function of (publication set, featured set, this struct).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListViewState {
    pub active_filter: TopicFilter,
    pub active_query: String,
    pub active_sort: SortKey,
}
