//! Navigation state: page identity, active-link marking, and the
//! compact-layout menu toggle.

use serde::{Deserialize, Serialize};

/// One page of the site, also its stable string identifier for content
/// lookup and CLI parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Home,
    About,
    Services,
    Contact,
}

impl PageId {
    pub const ALL: [PageId; 4] = [PageId::Home, PageId::About, PageId::Services, PageId::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Services => "services",
            PageId::Contact => "contact",
        }
    }

    pub fn parse(value: &str) -> Option<PageId> {
        PageId::ALL.into_iter().find(|page| page.as_str() == value)
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nav link is marked active iff its page id equals the current page id.
pub fn link_is_active(link: PageId, current: PageId) -> bool {
    link == current
}

/// Accessible text for a nav link; the active link announces itself as
/// the current page, the same way the markup mirrors `aria-current`.
pub fn link_accessible_label(label: &str, link: PageId, current: PageId) -> String {
    if link_is_active(link, current) {
        format!("{label} (current page)")
    } else {
        label.to_string()
    }
}

/// Icon shown on the menu toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Close,
}

impl MenuIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            MenuIcon::Bars => "\u{2630}",
            MenuIcon::Close => "\u{2715}",
        }
    }
}

/// Open/closed state of the compact-layout menu. The accessible label and
/// the icon are derived from the state so they can never drift from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Following a nav link closes the menu, resetting icon and label.
    pub fn note_navigation(&mut self) {
        self.open = false;
    }

    pub fn toggle_label(self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    pub fn icon(self) -> MenuIcon {
        if self.open {
            MenuIcon::Close
        } else {
            MenuIcon::Bars
        }
    }
}
