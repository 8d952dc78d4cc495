//! Card renderer: one publication record to one display fragment

use crate::escape::escape_html;
use scholia_domain::Publication;

/// Render one publication as an `<article>` card fragment.
///
/// Field order inside the card: title, actions (preprint badge, external
/// link), year summary (featured cards only), citation line, topic tags.
/// Every interpolated field goes through [`escape_html`]. The link opens
/// in a new browsing context without opener access (`rel="noopener"`).
pub fn render_card(publication: &Publication, featured: bool) -> String {
    let title = escape_html(&publication.title);
    let citation = escape_html(&publication.citation);

    let badge = if publication.is_preprint() {
        r#"<span class="tag">Preprint</span>"#
    } else {
        ""
    };
    let link = match &publication.link {
        Some(link) => format!(
            r#"<a class="pub-link" href="{}" target="_blank" rel="noopener">Open</a>"#,
            escape_html(link)
        ),
        None => String::new(),
    };

    let mut card = String::new();
    card.push_str(&format!(
        r#"<article class="pub{}" data-id="{}">"#,
        if featured { " pub--featured" } else { "" },
        escape_html(&publication.id)
    ));
    card.push_str(&format!(
        r#"<div class="pub-top"><h3>{}</h3><div class="pub-actions">{}{}</div></div>"#,
        title, badge, link
    ));
    if featured {
        card.push_str(&format!(
            r#"<p class="pub-year">{}</p>"#,
            escape_html(&year_summary(publication))
        ));
    }
    card.push_str(&format!(r#"<p class="pub-meta">{}</p>"#, citation));
    if !publication.topics.is_empty() {
        card.push_str(r#"<div class="tags" aria-label="Topics">"#);
        for topic in &publication.topics {
            card.push_str(&format!(r#"<span class="tag">{}</span>"#, escape_html(topic)));
        }
        card.push_str("</div>");
    }
    card.push_str("</article>");
    card
}

/// The summary line shown on featured cards.
///
/// Intentionally just the year: no venue is parsed out of the citation
/// string at this layer. A year of 0 (absent in the source) renders as an
/// empty summary.
fn year_summary(publication: &Publication) -> String {
    if publication.year != 0 {
        publication.year.to_string()
    } else {
        String::new()
    }
}
