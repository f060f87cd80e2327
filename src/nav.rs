//! Navigation highlighting.
//!
//! On every scroll the section whose top has most recently been scrolled
//! past becomes active, and exactly the navigation link pointing at that
//! section is marked. The same rule runs in the browser (see
//! `templates::script`); this module is the reference implementation used
//! when pages are rendered.

use crate::models::{NavLink, Section};

/// A section counts as reached this many units before its top edge.
pub const SCROLL_LOOKAHEAD: f64 = 150.0;

/// Return the id of the last section (in document order) whose top, minus
/// the lookahead, is at or above `scroll_y`.
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - SCROLL_LOOKAHEAD {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Mark the links whose fragment equals `current`; clear every other link.
pub fn highlight(links: &mut [NavLink], current: Option<&str>) {
    for link in links.iter_mut() {
        link.active = match (current, link.fragment()) {
            (Some(id), Some(fragment)) => id == fragment,
            _ => false,
        };
    }
}

/// Scroll handler state: the page's sections and navigation links.
#[derive(Debug, Clone, Default)]
pub struct NavHighlighter {
    sections: Vec<Section>,
    links: Vec<NavLink>,
}

impl NavHighlighter {
    pub fn init(sections: Vec<Section>, links: Vec<NavLink>) -> Self {
        Self { sections, links }
    }

    /// Recompute the active link for a scroll position. Returns the active
    /// section id, if any.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<&str> {
        let current = active_section(&self.sections, scroll_y);
        highlight(&mut self.links, current);
        current
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|link| link.active)
    }
}
