//! Stable comparator-based sorting for publication lists

use crate::state::SortKey;
use scholia_domain::Publication;
use std::cmp::Ordering;

/// Sort a publication list by the given key, returning a new vector.
///
/// All three orders use a stable sort, so equal elements keep their
/// relative input order. Descending-by-year is the ascending comparator
/// with its operands swapped, so equal-year ties keep ORIGINAL input
/// order, not reversed order.
///
/// Title order is the one fixed collation rule used everywhere: Unicode
/// lowercase of both titles, compared lexicographically.
pub fn sort_publications(publications: &[Publication], key: SortKey) -> Vec<Publication> {
    let mut sorted = publications.to_vec();
    match key {
        SortKey::YearAsc => sorted.sort_by(by_year),
        SortKey::TitleAsc => sorted.sort_by(by_title),
        SortKey::YearDesc => sorted.sort_by(|a, b| by_year(b, a)),
    }
    sorted
}

fn by_year(a: &Publication, b: &Publication) -> Ordering {
    a.year.cmp(&b.year)
}

fn by_title(a: &Publication, b: &Publication) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}
