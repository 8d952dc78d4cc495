//! Site chrome state: tab strip, mobile nav, sticky header, footer year
//!
//! These are the small independent UI toggles around the publication
//! views. Each one is a pure state machine; the host applies the
//! resulting flags as CSS classes and ARIA attributes.

use chrono::{DateTime, Datelike, Local};

/// Tab strip for the CV view. One tab is active at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tabs {
    active: String,
}

impl Tabs {
    pub fn new(initial: &str) -> Self {
        Self {
            active: initial.to_string(),
        }
    }

    /// Activate a tab by name. An unknown name is still recorded, which
    /// deactivates every known panel.
    pub fn activate(&mut self, name: &str) {
        self.active = name.to_string();
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active == name
    }

    /// Value for the tab button's `aria-selected` attribute.
    pub fn aria_selected(&self, name: &str) -> &'static str {
        if self.is_active(name) { "true" } else { "false" }
    }
}

/// Mobile navigation menu open/closed state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle event from the nav button; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close event, fired when a nav link is followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Whether the site header gets its sticky styling at this scroll offset.
pub fn header_is_sticky(scroll_y: f64) -> bool {
    scroll_y > 10.0
}

/// The year stamped into the site footer.
pub fn footer_year(now: DateTime<Local>) -> i32 {
    now.year()
}

/// Convenience wrapper over [`footer_year`] for hosts without their own
/// clock handle.
pub fn current_footer_year() -> i32 {
    footer_year(Local::now())
}
