//! Navigation rules: hamburger menu, in-page anchors, link highlighting.

/// Marker class for the open mobile menu
pub const OPEN_CLASS: &str = "open";

/// Marker class shared by every exclusive highlight
pub const ACTIVE_CLASS: &str = "active";

/// Classes of nav entries that are actions rather than sections
const ACTION_BUTTON_CLASSES: [&str; 2] = ["nav-contact-btn", "nav-resume-btn"];

/// Hamburger menu state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any nav-link click closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Resize handling: the menu closes on mobile-width viewports.
    pub fn on_resize(&mut self, viewport_width: f64, mobile_max_width: f64) -> bool {
        if viewport_width <= mobile_max_width {
            self.open = false;
            return true;
        }
        false
    }
}

/// Fragment target of an in-page anchor (`"#about"` -> `"about"`).
///
/// `None` for anything that is not a non-empty fragment.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Attributes of a clicked nav link relevant to highlighting
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkTraits<'a> {
    /// `target` attribute
    pub target: Option<&'a str>,
    /// Space-separated `class` attribute
    pub class_name: &'a str,
}

/// Whether clicking this link should move the active highlight to it.
///
/// Links opening a new tab and contact/resume action buttons are excluded.
pub fn link_takes_highlight(link: LinkTraits<'_>) -> bool {
    if link.target == Some("_blank") {
        return false;
    }
    !link
        .class_name
        .split_whitespace()
        .any(|c| ACTION_BUTTON_CLASSES.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggle_and_close() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn resize_closes_only_on_mobile() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.on_resize(1200.0, 768.0));
        assert!(menu.is_open());
        assert!(menu.on_resize(768.0, 768.0));
        assert!(!menu.is_open());
    }

    #[test]
    fn resize_closes_without_prior_toggle() {
        // The link list can be opened by page markup alone, with no toggle
        let mut menu = MenuState::default();
        assert!(menu.on_resize(375.0, 768.0));
        assert!(!menu.is_open());
    }

    #[test]
    fn fragment_detection() {
        assert_eq!(fragment_target("#journey"), Some("journey"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("https://example.com/#x"), None);
        assert_eq!(fragment_target("resume.pdf"), None);
    }

    #[test]
    fn highlight_exclusions() {
        assert!(link_takes_highlight(LinkTraits {
            target: None,
            class_name: "nav-link",
        }));
        assert!(!link_takes_highlight(LinkTraits {
            target: Some("_blank"),
            class_name: "",
        }));
        assert!(!link_takes_highlight(LinkTraits {
            target: None,
            class_name: "nav-link nav-resume-btn",
        }));
        assert!(!link_takes_highlight(LinkTraits {
            target: Some("_self"),
            class_name: "nav-contact-btn",
        }));
    }
}
