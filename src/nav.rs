//! Navigation geometry: scroll thresholds, section highlighting, anchor
//! targets, and mobile menu state.
//!
//! All inputs are plain numbers measured by the host, so every rule here is
//! testable without a layout engine.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{
    ICON_BARS, ICON_TIMES, NAVBAR_SHADOW_THRESHOLD_PX, SCROLL_TOP_THRESHOLD_PX, SECTION_LEAD_PX,
};

/// Layout of one `section[id]` in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    /// `offsetTop` in px.
    pub top: f64,
    /// `offsetHeight` in px.
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Whether `offset` lies in `[top - navbar_height - lead, top + height)`.
    #[must_use]
    pub fn contains(&self, offset: f64, navbar_height: f64) -> bool {
        let start = self.top - navbar_height - SECTION_LEAD_PX;
        let end = self.top + self.height;
        offset >= start && offset < end
    }
}

/// Everything measured from the page after scrolling settles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    /// Vertical page offset in px.
    pub offset: f64,
    pub navbar_height: f64,
    /// Sections in document order.
    pub sections: Vec<SectionBounds>,
}

impl ScrollSnapshot {
    /// Id of the section to highlight; the first match in document order wins.
    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|section| section.contains(self.offset, self.navbar_height))
            .map(|section| section.id.as_str())
    }
}

#[must_use]
pub fn navbar_scrolled(offset: f64) -> bool {
    offset > NAVBAR_SHADOW_THRESHOLD_PX
}

#[must_use]
pub fn scroll_top_visible(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD_PX
}

/// Whether a nav link's `href` points at `section_id`.
#[must_use]
pub fn link_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

/// Selector for an in-page anchor worth intercepting.
///
/// Returns `None` for external links and for the bare `#` and `#!` placeholders.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    if !href.starts_with('#') || href == "#" || href == "#!" {
        return None;
    }
    Some(href)
}

/// Document offset that puts an element's top just below the navbar.
///
/// `viewport_top` is the element's bounding-rect top relative to the viewport.
#[must_use]
pub fn scroll_target(viewport_top: f64, page_offset: f64, navbar_height: f64) -> f64 {
    viewport_top + page_offset - navbar_height
}

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn with_open(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu and return the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Icon class for the menu button.
    #[must_use]
    pub fn icon(self) -> &'static str {
        if self.open { ICON_TIMES } else { ICON_BARS }
    }

    /// Icon class the button must drop.
    #[must_use]
    pub fn stale_icon(self) -> &'static str {
        if self.open { ICON_BARS } else { ICON_TIMES }
    }
}
