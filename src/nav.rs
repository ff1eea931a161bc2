//! Mobile navigation menu and in-page anchor scrolling.

/// Open/closed state of the collapsible mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger button: flip the menu.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A link was followed; the menu always closes.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }
}

/// Scroll position that brings an anchor target just below the fixed navbar.
pub fn anchor_scroll_target(target_offset_top: f64, navbar_offset: f64) -> f64 {
    (target_offset_top - navbar_offset).max(0.0)
}

/// Selector for the element an in-page link points at, if it is a real anchor.
///
/// A bare `#` has no target.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(name) if !name.is_empty() => Some(href),
        _ => None,
    }
}
