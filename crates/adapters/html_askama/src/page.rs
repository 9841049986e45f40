//! Visitor stats templates — fragment and standalone page.

use askama::Template;

use visitor_stats_domain::card::StatCardView;
use visitor_stats_domain::view::VisitorStatsView;

use crate::error::RenderError;

/// Stylesheet for the grid, the tone variants and the pulse animation.
pub const STYLESHEET: &str = include_str!("../assets/visitor-stats.css");

const PAGE_TITLE: &str = "Statistik Pengunjung";

/// Template-ready projection of one card.
struct CardContext {
    class: String,
    icon_class: String,
    label: String,
    value: String,
    sub_value: Option<String>,
}

impl From<&StatCardView> for CardContext {
    fn from(card: &StatCardView) -> Self {
        Self {
            class: card.css_class(),
            icon_class: card.icon_class(),
            label: card.label.clone(),
            value: card.value.clone(),
            sub_value: card.visible_sub_value().map(str::to_string),
        }
    }
}

/// Stats grid fragment template.
#[derive(Template)]
#[template(path = "visitor_stats.html")]
pub struct VisitorStatsTemplate {
    loading: bool,
    placeholders: Vec<usize>,
    cards: Vec<CardContext>,
}

impl From<&VisitorStatsView> for VisitorStatsTemplate {
    fn from(view: &VisitorStatsView) -> Self {
        Self {
            loading: view.is_loading(),
            placeholders: if view.is_loading() {
                (0..view.slot_count()).collect()
            } else {
                Vec::new()
            },
            cards: view
                .cards()
                .map(|cards| cards.iter().map(CardContext::from).collect())
                .unwrap_or_default(),
        }
    }
}

/// Standalone page template embedding a rendered fragment.
#[derive(Template)]
#[template(path = "visitor_stats_page.html")]
pub struct VisitorStatsPageTemplate {
    title: &'static str,
    stylesheet: &'static str,
    fragment: String,
}

/// Render the stats grid as an HTML fragment.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if askama fails to render.
pub fn render(view: &VisitorStatsView) -> Result<String, RenderError> {
    let html = VisitorStatsTemplate::from(view).render()?;
    tracing::debug!(
        loading = view.is_loading(),
        slots = view.slot_count(),
        bytes = html.len(),
        "rendered visitor stats fragment"
    );
    Ok(html)
}

/// Render the stats grid inside a complete HTML document.
///
/// # Errors
///
/// Returns [`RenderError::Template`] if askama fails to render.
pub fn render_document(view: &VisitorStatsView) -> Result<String, RenderError> {
    let page = VisitorStatsPageTemplate {
        title: PAGE_TITLE,
        stylesheet: STYLESHEET,
        fragment: render(view)?,
    };
    Ok(page.render()?)
}
