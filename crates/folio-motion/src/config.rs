//! Page behavior configuration
//!
//! Defaults are loaded from `config/page_settings.yaml` via `global_config()`.
//! Every struct carries `#[serde(default)]`, so a partial document only
//! replaces the keys it names. Settings are fixed at build time.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Embedded default settings
const DEFAULT_SETTINGS_YAML: &str = include_str!("../config/page_settings.yaml");

static GLOBAL_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Process-wide page configuration.
///
/// Parsed once from the embedded YAML. A malformed embedded document falls
/// back to the compiled-in defaults (logged at warn level).
pub fn global_config() -> &'static PageConfig {
    GLOBAL_CONFIG.get_or_init(|| match PageConfig::from_yaml_str(DEFAULT_SETTINGS_YAML) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "embedded page settings rejected, using defaults");
            PageConfig::default()
        }
    })
}

// =============================================================================
// ROOT
// =============================================================================

/// Complete page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Section names in document order (home, about, journey, projects)
    pub sections: Vec<String>,
    pub scroll: ScrollConfig,
    pub section_observer: ObserverConfig,
    pub typewriter: TypewriterConfig,
    pub timeline: TimelineConfig,
    pub entrance: EntranceConfig,
    pub about_reveal: AboutRevealConfig,
    pub gesture: GestureConfig,
    pub navigation: NavigationConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sections: ["home", "about", "journey", "projects"]
                .into_iter()
                .map(String::from)
                .collect(),
            scroll: ScrollConfig::default(),
            section_observer: ObserverConfig {
                threshold: 0.5,
                root_margin: "-10% 0px -10% 0px".to_string(),
            },
            typewriter: TypewriterConfig::default(),
            timeline: TimelineConfig::default(),
            entrance: EntranceConfig::default(),
            about_reveal: AboutRevealConfig::default(),
            gesture: GestureConfig::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a YAML settings document.
    pub fn from_yaml_str(yaml: &str) -> FolioResult<Self> {
        let config: PageConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the behaviors cannot run with.
    pub fn validate(&self) -> FolioResult<()> {
        if self.sections.is_empty() {
            return Err(FolioError::InvalidConfig(
                "at least one section name is required".to_string(),
            ));
        }
        if self.typewriter.text.is_empty() {
            return Err(FolioError::InvalidConfig(
                "typewriter text must not be empty".to_string(),
            ));
        }
        let swipe = self.gesture.swipe_threshold_px;
        if !(swipe.is_finite() && swipe > 0.0) {
            return Err(FolioError::InvalidConfig(format!(
                "swipe threshold must be a positive number, got {swipe}"
            )));
        }

        let thresholds = [
            ("section_observer.threshold", self.section_observer.threshold),
            ("entrance.narrow.threshold", self.entrance.narrow.threshold),
            ("entrance.wide.threshold", self.entrance.wide.threshold),
            ("about_reveal.threshold", self.about_reveal.threshold),
        ];
        for (name, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(FolioError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Scroll and resize listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub debounce_ms: u32,
    pub resize_debounce_ms: u32,
    /// Scroll offset past which the navbar is marked `scrolled`
    pub navbar_scrolled_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            resize_debounce_ms: 250,
            navbar_scrolled_offset: 100.0,
        }
    }
}

/// Options for one viewport-intersection observer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Fraction of the target that must be visible, in [0, 1]
    pub threshold: f64,
    /// CSS margin applied to the root before intersecting
    pub root_margin: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        }
    }
}

impl ObserverConfig {
    pub fn new(threshold: f64, root_margin: &str) -> Self {
        Self {
            threshold,
            root_margin: root_margin.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub text: String,
    pub start_delay_ms: u32,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_full_ms: u32,
    pub hold_empty_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            text: "Hi, I'm Thu (or \"two\"✌️)".to_string(),
            start_delay_ms: 1000,
            type_ms: 150,
            delete_ms: 75,
            hold_full_ms: 2500,
            hold_empty_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Delay before filter buttons are wired, so injected entries exist
    pub init_delay_ms: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self { init_delay_ms: 500 }
    }
}

/// Section entrance animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    /// Viewports at or below this width use the `narrow` observer
    pub narrow_max_width: f64,
    pub narrow: ObserverConfig,
    pub wide: ObserverConfig,
    /// Downward offset of a section before it is revealed
    pub hidden_offset_px: f64,
    pub transition: String,
    /// Viewports at or below this width refresh the journey transition
    pub mobile_max_width: f64,
    pub transition_refresh_ms: u32,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            narrow_max_width: 375.0,
            narrow: ObserverConfig::new(0.05, "0px 0px -20px 0px"),
            wide: ObserverConfig::new(0.1, "0px 0px -50px 0px"),
            hidden_offset_px: 30.0,
            transition: "opacity 0.8s ease, transform 0.8s ease".to_string(),
            mobile_max_width: 768.0,
            transition_refresh_ms: 100,
        }
    }
}

/// Viewport dimensions in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One-shot "about" reveal settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutRevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub profile_delay_ms: u32,
    pub text_delay_ms: u32,
    pub skill_base_delay_ms: u32,
    pub skill_stagger_ms: u32,
    /// Device profile on which the observer is known not to fire
    pub forced_viewport: ViewportSize,
    pub forced_delay_ms: u32,
}

impl Default for AboutRevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            root_margin: "0px 0px -50px 0px".to_string(),
            profile_delay_ms: 100,
            text_delay_ms: 300,
            skill_base_delay_ms: 500,
            skill_stagger_ms: 200,
            forced_viewport: ViewportSize::new(375.0, 667.0),
            forced_delay_ms: 1000,
        }
    }
}

impl AboutRevealConfig {
    pub fn observer(&self) -> ObserverConfig {
        ObserverConfig::new(self.threshold, &self.root_margin)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum vertical travel (exclusive) for a swipe
    pub swipe_threshold_px: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Viewports at or below this width close the menu on resize
    pub mobile_max_width: f64,
    /// Sections that dot navigation aligns to their start edge (others center)
    pub start_aligned_sections: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: 768.0,
            start_aligned_sections: vec!["journey".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_settings_match_defaults() {
        let parsed = PageConfig::from_yaml_str(DEFAULT_SETTINGS_YAML).unwrap();
        assert_eq!(parsed, PageConfig::default());
    }

    #[test]
    fn test_global_config_is_valid() {
        let config = global_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.sections.len(), 4);
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let yaml = "typewriter:\n  text: \"Hello\"\ngesture:\n  swipe_threshold_px: 80\n";
        let config = PageConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.typewriter.text, "Hello");
        assert_eq!(config.typewriter.type_ms, 150);
        assert_eq!(config.gesture.swipe_threshold_px, 80.0);
        assert_eq!(config.scroll, ScrollConfig::default());
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let yaml = "about_reveal:\n  threshold: 1.5\n";
        let err = PageConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(msg) if msg.contains("about_reveal")));
    }

    #[test]
    fn test_empty_sections_rejected() {
        let err = PageConfig::from_yaml_str("sections: []\n").unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }

    #[test]
    fn test_swipe_threshold_must_be_finite_and_positive() {
        for value in [".nan", ".inf", "0", "-5"] {
            let yaml = format!("gesture:\n  swipe_threshold_px: {value}\n");
            let err = PageConfig::from_yaml_str(&yaml).unwrap_err();
            assert!(
                matches!(&err, FolioError::InvalidConfig(msg) if msg.contains("swipe")),
                "{value} accepted: {err:?}"
            );
        }
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = PageConfig::from_yaml_str("scroll: [not, a, map]\n").unwrap_err();
        assert!(matches!(err, FolioError::ConfigParse(_)));
    }

    #[test]
    fn test_forced_viewport_cannot_be_switched_off() {
        let yaml = "about_reveal:\n  forced_viewport: null\n";
        let err = PageConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, FolioError::ConfigParse(_)));
        assert_eq!(
            global_config().about_reveal.forced_viewport,
            ViewportSize::new(375.0, 667.0)
        );
    }
}
