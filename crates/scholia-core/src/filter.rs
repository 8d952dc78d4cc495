//! Filter predicate for the publication list
//!
//! A publication is visible iff it matches BOTH the free-text query and
//! the active topic filter.

use crate::state::TopicFilter;
use scholia_domain::Publication;

/// Whether a publication passes the current query and topic filter.
///
/// The query is trimmed and lowercased, then matched as a substring of the
/// lowercased title or citation; an empty query matches everything. The
/// topic filter matches by exact string equality against the publication's
/// topic tags, so a publication without topics never matches a named topic.
pub fn matches(publication: &Publication, query: &str, filter: &TopicFilter) -> bool {
    let query = query.trim().to_lowercase();
    let in_query = query.is_empty()
        || publication.title.to_lowercase().contains(&query)
        || publication.citation.to_lowercase().contains(&query);

    let in_filter = match filter {
        TopicFilter::All => true,
        TopicFilter::Topic(topic) => publication.topics.iter().any(|t| t == topic),
    };

    in_query && in_filter
}
