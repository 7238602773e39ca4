use crate::constants::{MENU_BUTTON_ACTIVE_CLASS, MENU_OPEN_CLASS};

/// Whether the navigation bar should carry its drop shadow at `offset`.
///
/// Strictly greater than the threshold; sitting exactly on it means no shadow.
#[inline]
pub fn shadow_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Document scroll position that puts a target just below the fixed header.
///
/// `target_top_in_viewport` is the target's bounding rect top, which is
/// relative to the current scroll position.
#[inline]
pub fn scroll_target_top(
    target_top_in_viewport: f64,
    page_y_offset: f64,
    nav_height: f64,
    margin: f64,
) -> f64 {
    target_top_in_viewport + page_y_offset - nav_height - margin
}

/// Header height to clear when scrolling to a target; no header, no offset.
#[inline]
pub fn header_height(nav_height: Option<f64>) -> f64 {
    nav_height.unwrap_or(0.0)
}

/// Which navigation behaviors the page's elements allow.
///
/// Each behavior depends only on its own elements: the shadow needs the bar,
/// the toggle needs both the button and the links panel, and fragment links
/// work with or without a header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavWiring {
    pub scroll_shadow: bool,
    pub menu_toggle: bool,
    pub fragment_links: bool,
}

impl NavWiring {
    pub fn for_elements(
        has_nav: bool,
        has_links: bool,
        has_button: bool,
        link_count: usize,
    ) -> Self {
        Self {
            scroll_shadow: has_nav,
            menu_toggle: has_links && has_button,
            fragment_links: link_count > 0,
        }
    }

    pub fn any(&self) -> bool {
        self.scroll_shadow || self.menu_toggle || self.fragment_links
    }
}

/// Extract a usable selector from a fragment link's `href`.
///
/// A bare `#` (or an empty href) names nothing and yields `None`.
pub fn fragment_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    if !href.starts_with('#') || href.len() < 2 {
        return None;
    }
    Some(href)
}

/// Open/closed state of the mobile links panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn toggle(self) -> MenuState {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    #[must_use]
    pub fn close(self) -> MenuState {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// State implied by the links panel's current classes.
    pub fn from_open_class(has_open_class: bool) -> MenuState {
        if has_open_class {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    /// Class to force on the links panel and on the toggle button, in that
    /// order, with whether each must be present.
    pub fn class_flags(self) -> [(&'static str, bool); 2] {
        let open = self.is_open();
        [(MENU_OPEN_CLASS, open), (MENU_BUTTON_ACTIVE_CLASS, open)]
    }
}
