//! Document structure the behaviors attach to
//!
//! Every element role the page markup provides, as a CSS selector.

/// Full-viewport sections tracked for navigation
pub const TRACKED_SECTIONS: &str = ".full-section";
/// Every section, tracked or not, animated on entrance
pub const ALL_SECTIONS: &str = "section";
pub const PAGE_DOTS: &str = ".page-dot";
pub const NAV_LINKS_CONTAINER: &str = ".nav-links";
pub const NAV_LINKS: &str = ".nav-links a";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const FRAGMENT_ANCHORS: &str = "a[href^=\"#\"]";
pub const SCROLL_INDICATOR: &str = ".scroll-indicator";
pub const NAVBAR_ID: &str = "navbar";
pub const HOME_ID: &str = "home";
pub const TIMELINE_SECTION_ID: &str = "journey";
pub const TYPEWRITER_ID: &str = "typewriter-text";
pub const FILTER_BUTTONS: &str = ".filter-button";
pub const YEAR_BUTTONS: &str = ".year-button";
pub const TIMELINE_ITEMS: &str = ".timeline-item";
pub const ABOUT_CONTAINER: &str = "#about .about-section-container";
pub const ABOUT_PROFILE: &str = ".about-profile-centered";
pub const ABOUT_TEXT: &str = ".text-paragraph-flying";
pub const ABOUT_SKILL_CARDS: &str = ".skill-card-flying";

/// Section id carried by a page dot
pub const DOT_SECTION_ATTR: &str = "data-section";
pub const CATEGORY_ATTR: &str = "data-category";
pub const YEAR_ATTR: &str = "data-year";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_live_inside_container() {
        assert!(NAV_LINKS.starts_with(NAV_LINKS_CONTAINER));
        assert!(ABOUT_CONTAINER.starts_with('#'));
    }

    #[test]
    fn test_tracked_sections_are_sections() {
        // Tracked sections carry a class; the entrance animator targets the tag
        assert!(TRACKED_SECTIONS.starts_with('.'));
        assert_eq!(ALL_SECTIONS, "section");
    }
}
