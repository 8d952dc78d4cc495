//! List controller: owns the view state and reacts to input events

use crate::pipeline::{
    render_cv_citations, render_featured, render_grants, render_publication_list,
};
use crate::state::{ListViewState, SortKey, TopicFilter};
use crate::surface::{Slot, Surface};
use scholia_domain::{GrantAward, Publication};

/// Owns the publication set, the featured ids, the [`ListViewState`], and
/// the surface handle.
///
/// Each of the three inputs (query text, topic pill, sort selector)
/// updates exactly one state field and immediately re-renders the list and
/// count; no debouncing, no batching. The featured panel and CV list
/// depend only on the dataset, so they re-render on [`install`] alone.
///
/// [`install`]: ListController::install
pub struct ListController<S: Surface> {
    surface: S,
    publications: Vec<Publication>,
    featured_ids: Vec<String>,
    state: ListViewState,
}

impl<S: Surface> ListController<S> {
    /// A controller with no data; the surface keeps its pre-load content
    /// until [`install`](ListController::install) is called.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            publications: Vec::new(),
            featured_ids: Vec::new(),
            state: ListViewState::default(),
        }
    }

    /// Replace the dataset and render every publication-driven view:
    /// featured panel, filtered list, count label, CV citation list.
    pub fn install(&mut self, publications: Vec<Publication>, featured_ids: Vec<String>) {
        self.publications = publications;
        self.featured_ids = featured_ids;
        self.render_featured();
        self.render_list();
        self.render_cv_citations();
    }

    /// Query input event: update the query, re-render the list.
    pub fn set_query(&mut self, query: &str) {
        self.state.active_query = query.to_string();
        self.render_list();
    }

    /// Filter pill event: update the topic filter, re-render the list.
    pub fn set_filter(&mut self, filter: TopicFilter) {
        self.state.active_filter = filter;
        self.render_list();
    }

    /// Sort selector event: update the sort key, re-render the list.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.state.active_sort = sort;
        self.render_list();
    }

    /// Render the grants list (driven by its own payload, not the
    /// publication set).
    pub fn show_grants(&mut self, grants: &[GrantAward]) {
        self.surface.commit(Slot::CvGrants, &render_grants(grants));
    }

    /// The pill value the host should mark active.
    pub fn active_pill(&self) -> &str {
        self.state.active_filter.value()
    }

    pub fn state(&self) -> &ListViewState {
        &self.state
    }

    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn render_list(&mut self) {
        let render = render_publication_list(&self.publications, &self.state);
        self.surface.commit(Slot::PublicationList, &render.html);
        self.surface.commit(Slot::CountLabel, &render.count_label);
    }

    fn render_featured(&mut self) {
        let html = render_featured(&self.publications, &self.featured_ids);
        self.surface.commit(Slot::FeaturedList, &html);
    }

    fn render_cv_citations(&mut self) {
        let html = render_cv_citations(&self.publications);
        self.surface.commit(Slot::CvPublications, &html);
    }
}
