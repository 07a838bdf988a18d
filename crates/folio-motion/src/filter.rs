//! Timeline filtering
//!
//! Category buttons and year buttons are two independent groups. A click in
//! either group recomputes every entry's visibility from that click alone;
//! the two dimensions are never intersected.

/// Attributes of one timeline entry (`data-category`, `data-year`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineEntry {
    pub category: Option<String>,
    pub year: Option<String>,
}

impl TimelineEntry {
    pub fn new(category: Option<&str>, year: Option<&str>) -> Self {
        Self {
            category: category.map(String::from),
            year: year.map(String::from),
        }
    }
}

/// Filter value meaning "no restriction"
pub const ALL: &str = "all";

/// Active filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    All,
    Category(String),
    Year(String),
}

impl FilterSelection {
    /// Selection for a category button's `data-filter` value.
    pub fn category(value: &str) -> Self {
        if value == ALL {
            FilterSelection::All
        } else {
            FilterSelection::Category(value.to_string())
        }
    }

    /// Selection for a year button's `data-year` value.
    pub fn year(value: &str) -> Self {
        if value == ALL {
            FilterSelection::All
        } else {
            FilterSelection::Year(value.to_string())
        }
    }

    /// Whether `entry` is shown under this selection.
    pub fn shows(&self, entry: &TimelineEntry) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Category(c) => entry.category.as_deref() == Some(c.as_str()),
            FilterSelection::Year(y) => entry.year.as_deref() == Some(y.as_str()),
        }
    }

    /// Visibility of every entry, in order.
    pub fn apply(&self, entries: &[TimelineEntry]) -> Vec<EntryVisibility> {
        let out: Vec<EntryVisibility> = entries
            .iter()
            .map(|e| EntryVisibility::from_shown(self.shows(e)))
            .collect();
        tracing::debug!(
            selection = ?self,
            shown = out.iter().filter(|v| v.is_shown()).count(),
            total = out.len(),
            "timeline filter applied"
        );
        out
    }
}

/// Button group a filter click came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterGroup {
    /// `.filter-button`, value in `data-filter`
    Category,
    /// `.year-button`, value in `data-year`
    Year,
}

impl FilterGroup {
    /// Attribute holding a button's filter value
    pub fn value_attribute(self) -> &'static str {
        match self {
            FilterGroup::Category => "data-filter",
            FilterGroup::Year => "data-year",
        }
    }

    pub fn selection(self, value: &str) -> FilterSelection {
        match self {
            FilterGroup::Category => FilterSelection::category(value),
            FilterGroup::Year => FilterSelection::year(value),
        }
    }

    /// Year clicks (including "all") also jump to the timeline section.
    pub fn scrolls_to_timeline(self) -> bool {
        self == FilterGroup::Year
    }
}

/// Inline style pair applied to a timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryVisibility {
    pub display: &'static str,
    pub visibility: &'static str,
}

impl EntryVisibility {
    pub const SHOWN: Self = Self {
        display: "flex",
        visibility: "visible",
    };

    pub const HIDDEN: Self = Self {
        display: "none",
        visibility: "hidden",
    };

    pub fn from_shown(shown: bool) -> Self {
        if shown {
            Self::SHOWN
        } else {
            Self::HIDDEN
        }
    }

    pub fn is_shown(&self) -> bool {
        *self == Self::SHOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<TimelineEntry> {
        vec![
            TimelineEntry::new(Some("work"), Some("2023")),
            TimelineEntry::new(Some("education"), Some("2021")),
            TimelineEntry::new(Some("work"), Some("2021")),
            TimelineEntry::new(None, Some("2023")),
        ]
    }

    fn shown(sel: &FilterSelection) -> Vec<bool> {
        sel.apply(&entries()).iter().map(|v| v.is_shown()).collect()
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(
            shown(&FilterSelection::category("work")),
            vec![true, false, true, false]
        );
    }

    #[test]
    fn test_year_filter() {
        assert_eq!(
            shown(&FilterSelection::year("2023")),
            vec![true, false, false, true]
        );
    }

    #[test]
    fn test_all_shows_everything() {
        assert!(shown(&FilterSelection::category(ALL)).iter().all(|s| *s));
        assert!(shown(&FilterSelection::year(ALL)).iter().all(|s| *s));
    }

    #[test]
    fn test_category_ignores_prior_year() {
        // Selecting a year then a category: the category alone decides
        let _ = FilterSelection::year("2021").apply(&entries());
        assert_eq!(
            shown(&FilterSelection::category("education")),
            vec![false, true, false, false]
        );
    }

    #[test]
    fn test_unknown_value_hides_everything() {
        assert!(shown(&FilterSelection::category("hobby")).iter().all(|s| !*s));
    }

    #[test]
    fn test_visibility_pairs() {
        assert_eq!(EntryVisibility::from_shown(true).display, "flex");
        assert_eq!(EntryVisibility::from_shown(false).visibility, "hidden");
    }

    #[test]
    fn test_groups() {
        assert!(FilterGroup::Year.scrolls_to_timeline());
        assert!(!FilterGroup::Category.scrolls_to_timeline());
        assert_eq!(FilterGroup::Year.selection(ALL), FilterSelection::All);
        assert_eq!(
            FilterGroup::Category.selection("work"),
            FilterSelection::Category("work".into())
        );
        assert_eq!(FilterGroup::Year.value_attribute(), "data-year");
    }
}
