//! Render pipeline: filter → sort → cards → count label
//!
//! Pure computation only. Each function returns finished HTML (or a
//! [`ListRender`] bundle); the controller commits the results to the
//! surface. Datasets are small, so every render rebuilds the full
//! fragment; no diffing, no virtualization.

use crate::card::render_card;
use crate::escape::escape_html;
use crate::filter::matches;
use crate::sort::sort_publications;
use crate::state::{ListViewState, SortKey};
use scholia_domain::{GrantAward, Publication};
use std::cmp::Ordering;

/// Output of one publication-list render.
#[derive(Clone, Debug, PartialEq)]
pub struct ListRender {
    /// Concatenated card fragments in display order.
    pub html: String,
    /// "Showing X of Y publications", where Y is the unfiltered set size.
    pub count_label: String,
    pub shown: usize,
    pub total: usize,
}

/// The visible subset in display order: filter in set order, then sort.
pub fn visible_publications(
    publications: &[Publication],
    state: &ListViewState,
) -> Vec<Publication> {
    let filtered: Vec<Publication> = publications
        .iter()
        .filter(|p| matches(p, &state.active_query, &state.active_filter))
        .cloned()
        .collect();
    sort_publications(&filtered, state.active_sort)
}

/// Render the filterable publication list and its count label.
pub fn render_publication_list(
    publications: &[Publication],
    state: &ListViewState,
) -> ListRender {
    let visible = visible_publications(publications, state);
    let html: String = visible.iter().map(|p| render_card(p, false)).collect();
    let shown = visible.len();
    let total = publications.len();
    ListRender {
        html,
        count_label: format!("Showing {} of {} publications", shown, total),
        shown,
        total,
    }
}

/// Render the featured panel: publications whose id is in the featured
/// set, as featured cards, in PUBLICATION-SET order (the featured set's
/// own order is ignored).
pub fn render_featured(publications: &[Publication], featured_ids: &[String]) -> String {
    publications
        .iter()
        .filter(|p| featured_ids.contains(&p.id))
        .map(|p| render_card(p, true))
        .collect()
}

/// Render the flattened citation list for the CV tab, newest first.
pub fn render_cv_citations(publications: &[Publication]) -> String {
    sort_publications(publications, SortKey::YearDesc)
        .iter()
        .map(|p| format!("<li>{}</li>", escape_html(&p.citation)))
        .collect()
}

/// Render the grants/awards list, newest first.
///
/// Same stable swapped-ascending comparator as the publication sort, so
/// equal-year grants keep their input order.
pub fn render_grants(grants: &[GrantAward]) -> String {
    let mut sorted = grants.to_vec();
    sorted.sort_by(|a, b| by_grant_year(b, a));
    sorted
        .iter()
        .map(|g| {
            format!(
                r#"<li><span class="year">{}</span> {}</li>"#,
                g.year,
                escape_html(&g.description)
            )
        })
        .collect()
}

fn by_grant_year(a: &GrantAward, b: &GrantAward) -> Ordering {
    a.year.cmp(&b.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TopicFilter;

    fn dataset() -> Vec<Publication> {
        vec![
            Publication::new("1".to_string(), "A".to_string(), 2020)
                .with_topics(vec!["ml".to_string()]),
            Publication::new("2".to_string(), "B".to_string(), 2022)
                .with_topics(vec!["nlp".to_string()]),
        ]
    }

    #[test]
    fn end_to_end_filtered_list_and_count() {
        let state = ListViewState {
            active_filter: TopicFilter::Topic("ml".to_string()),
            active_query: String::new(),
            active_sort: SortKey::YearDesc,
        };
        let render = render_publication_list(&dataset(), &state);
        assert!(render.html.contains(r#"data-id="1""#));
        assert!(!render.html.contains(r#"data-id="2""#));
        assert_eq!(render.count_label, "Showing 1 of 2 publications");
        assert_eq!((render.shown, render.total), (1, 2));
    }

    #[test]
    fn count_label_total_is_unfiltered_set_size() {
        let state = ListViewState {
            active_query: "no such title".to_string(),
            ..Default::default()
        };
        let render = render_publication_list(&dataset(), &state);
        assert_eq!(render.html, "");
        assert_eq!(render.count_label, "Showing 0 of 2 publications");
    }

    #[test]
    fn default_state_shows_everything_newest_first() {
        let render = render_publication_list(&dataset(), &ListViewState::default());
        let pos_1 = render.html.find(r#"data-id="1""#).unwrap();
        let pos_2 = render.html.find(r#"data-id="2""#).unwrap();
        assert!(pos_2 < pos_1);
        assert_eq!(render.count_label, "Showing 2 of 2 publications");
    }

    #[test]
    fn featured_panel_uses_publication_set_order() {
        // Featured ids [2,1] but set order [1,2]: 1 renders first.
        let featured = vec!["2".to_string(), "1".to_string()];
        let html = render_featured(&dataset(), &featured);
        let pos_1 = html.find(r#"data-id="1""#).unwrap();
        let pos_2 = html.find(r#"data-id="2""#).unwrap();
        assert!(pos_1 < pos_2);
        assert!(html.contains("pub--featured"));
    }

    #[test]
    fn featured_panel_skips_unknown_ids() {
        let featured = vec!["ghost".to_string()];
        assert_eq!(render_featured(&dataset(), &featured), "");
    }

    #[test]
    fn cv_citations_sorted_newest_first_and_escaped() {
        let pubs = vec![
            Publication::new("1".to_string(), "A".to_string(), 2019)
                .with_citation("Old & dusty".to_string()),
            Publication::new("2".to_string(), "B".to_string(), 2023)
                .with_citation("New".to_string()),
        ];
        assert_eq!(
            render_cv_citations(&pubs),
            "<li>New</li><li>Old &amp; dusty</li>"
        );
    }

    #[test]
    fn grants_sorted_newest_first() {
        let grants = vec![
            GrantAward::new(2018, "Seed grant".to_string()),
            GrantAward::new(2024, "Major award".to_string()),
        ];
        assert_eq!(
            render_grants(&grants),
            r#"<li><span class="year">2024</span> Major award</li><li><span class="year">2018</span> Seed grant</li>"#
        );
    }

    #[test]
    fn grants_equal_years_keep_input_order() {
        let grants = vec![
            GrantAward::new(2020, "First".to_string()),
            GrantAward::new(2020, "Second".to_string()),
        ];
        let html = render_grants(&grants);
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
    }

    #[test]
    fn grant_description_is_escaped() {
        let grants = vec![GrantAward::new(2020, "R&D prize".to_string())];
        assert!(render_grants(&grants).contains("R&amp;D prize"));
    }

    #[test]
    fn visible_publications_filters_then_sorts() {
        let pubs = vec![
            Publication::new("a".to_string(), "Banana".to_string(), 2020)
                .with_topics(vec!["ml".to_string()]),
            Publication::new("b".to_string(), "apple".to_string(), 2021)
                .with_topics(vec!["ml".to_string()]),
            Publication::new("c".to_string(), "Cherry".to_string(), 2022),
        ];
        let state = ListViewState {
            active_filter: TopicFilter::Topic("ml".to_string()),
            active_sort: SortKey::TitleAsc,
            ..Default::default()
        };
        let visible = visible_publications(&pubs, &state);
        let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }
}
