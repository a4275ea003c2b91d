//! Mobile menu and header appearance.

use aqua_domain::catalog::Section;
use tracing::debug;

/// Mobile navigation menu.
#[derive(Debug)]
pub struct Navigation {
    menu_open: bool,
    breakpoint: f64,
}

impl Navigation {
    #[must_use]
    pub const fn new(breakpoint: f64) -> Self {
        Self { menu_open: false, breakpoint }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.menu_open
    }

    /// Hamburger click.
    pub fn toggle(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "Menu toggled");
    }

    /// Returns `true` if the menu was open.
    pub const fn close(&mut self) -> bool {
        let was_open = self.menu_open;
        self.menu_open = false;
        was_open
    }

    /// A navigation link always closes the menu; the caller scrolls to the returned section.
    pub const fn follow(&mut self, section: Section) -> Section {
        self.close();
        section
    }

    /// Viewport resize; leaving the mobile layout closes the menu.
    pub fn resized(&mut self, width: f64) -> bool {
        width > self.breakpoint && self.close()
    }

    /// `active` while open, for both the hamburger and the menu.
    #[must_use]
    pub const fn active_class(&self) -> &'static str {
        if self.menu_open { "active" } else { "" }
    }

    /// Body scroll is locked while the menu covers the page.
    #[must_use]
    pub const fn body_overflow(&self) -> &'static str {
        if self.menu_open { "hidden" } else { "auto" }
    }
}

/// Header look, derived from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    #[default]
    Translucent,
    Solid,
}

impl HeaderStyle {
    #[must_use]
    pub fn from_scroll(offset: f64, threshold: f64) -> Self {
        if offset > threshold { Self::Solid } else { Self::Translucent }
    }

    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Solid => "rgba(255, 255, 255, 0.98)",
            Self::Translucent => "rgba(255, 255, 255, 0.95)",
        }
    }

    #[must_use]
    pub const fn box_shadow(self) -> &'static str {
        match self {
            Self::Solid => "0 2px 20px rgba(0, 0, 0, 0.15)",
            Self::Translucent => "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    }

    /// Inline style of the header element.
    #[must_use]
    pub fn style(self) -> String {
        format!("background: {}; box-shadow: {};", self.background(), self.box_shadow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_locks_body_scroll() {
        let mut nav = Navigation::new(768.0);
        assert_eq!(nav.body_overflow(), "auto");

        nav.toggle();
        assert!(nav.is_open());
        assert_eq!(nav.active_class(), "active");
        assert_eq!(nav.body_overflow(), "hidden");

        nav.toggle();
        assert_eq!(nav.body_overflow(), "auto");
    }

    #[test]
    fn link_closes_menu() {
        let mut nav = Navigation::new(768.0);
        nav.toggle();
        assert_eq!(nav.follow(Section::Contact), Section::Contact);
        assert!(!nav.is_open());
    }

    #[test]
    fn resize_above_breakpoint_closes() {
        let mut nav = Navigation::new(768.0);
        nav.toggle();
        assert!(!nav.resized(768.0), "exactly the breakpoint keeps the mobile layout");
        assert!(nav.is_open());
        assert!(nav.resized(1024.0));
        assert!(!nav.is_open());
    }

    #[test]
    fn header_turns_solid_past_threshold() {
        assert_eq!(HeaderStyle::from_scroll(100.0, 100.0), HeaderStyle::Translucent);
        assert_eq!(HeaderStyle::from_scroll(100.5, 100.0), HeaderStyle::Solid);
        assert_eq!(
            HeaderStyle::Solid.style(),
            "background: rgba(255, 255, 255, 0.98); box-shadow: 0 2px 20px rgba(0, 0, 0, 0.15);"
        );
    }
}
