//! Entrance animations
//!
//! Sections start hidden (transparent, shifted down) and are revealed by a
//! viewport observer. Revealing is idempotent, so the observer is allowed to
//! report the same section repeatedly.
//!
//! The about container has its own one-shot sequence: profile, text block
//! and skill cards fly in with staggered delays, at most once per page. Two
//! paths can trigger it (its observer and the forced-viewport fallback); both
//! go through the same `AboutReveal` gate.

use crate::config::{AboutRevealConfig, EntranceConfig, ObserverConfig, ViewportSize};

/// Marker class added to each about element as it flies in
pub const FLY_IN_CLASS: &str = "fly-in";

// =============================================================================
// SECTION ENTRANCE
// =============================================================================

/// Observer options for the section entrance observer at `viewport_width`.
pub fn entrance_observer(config: &EntranceConfig, viewport_width: f64) -> ObserverConfig {
    if viewport_width <= config.narrow_max_width {
        config.narrow.clone()
    } else {
        config.wide.clone()
    }
}

/// Inline style applied to a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStyle {
    pub opacity: &'static str,
    pub transform: String,
    /// Only set when hiding; revealing keeps the transition already applied
    pub transition: Option<String>,
}

impl SectionStyle {
    /// Initial state before the section is first seen
    pub fn hidden(config: &EntranceConfig) -> Self {
        Self {
            opacity: "0",
            transform: format!("translateY({}px)", config.hidden_offset_px),
            transition: Some(config.transition.clone()),
        }
    }

    pub fn revealed() -> Self {
        Self {
            opacity: "1",
            transform: "translateY(0)".to_string(),
            transition: None,
        }
    }
}

/// Delay after which a revealed section's transition is re-applied.
///
/// Only the journey section on mobile-width viewports needs this.
pub fn transition_refresh_delay(
    config: &EntranceConfig,
    section_id: &str,
    viewport_width: f64,
) -> Option<u32> {
    (section_id == "journey" && viewport_width <= config.mobile_max_width)
        .then_some(config.transition_refresh_ms)
}

// =============================================================================
// ONE-SHOT GATE
// =============================================================================

/// Arm-once latch. Never resets.
#[derive(Debug, Default)]
pub struct OneShotGate {
    fired: bool,
}

impl OneShotGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once: on the first call.
    pub fn arm(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

// =============================================================================
// ABOUT REVEAL
// =============================================================================

/// Element revealed by one step of the about sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    Profile,
    Text,
    /// Skill card by position among the cards
    Skill(usize),
}

/// One delayed reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub target: RevealTarget,
    pub delay_ms: u32,
}

/// Which parts of the about container are present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AboutLayout {
    pub has_profile: bool,
    pub has_text: bool,
    pub skill_count: usize,
}

/// Why the about sequence was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    Observer,
    ForcedViewport,
}

/// Guarded about-reveal sequence
#[derive(Debug)]
pub struct AboutReveal {
    gate: OneShotGate,
    config: AboutRevealConfig,
}

impl AboutReveal {
    pub fn new(config: &AboutRevealConfig) -> Self {
        Self {
            gate: OneShotGate::new(),
            config: config.clone(),
        }
    }

    pub fn has_fired(&self) -> bool {
        self.gate.has_fired()
    }

    /// Steps to schedule, or `None` if the sequence already ran.
    pub fn trigger(
        &mut self,
        trigger: RevealTrigger,
        layout: AboutLayout,
    ) -> Option<Vec<RevealStep>> {
        if !self.gate.arm() {
            tracing::debug!(?trigger, "about reveal already fired");
            return None;
        }
        let steps = self.schedule(layout);
        tracing::debug!(?trigger, steps = steps.len(), "about reveal armed");
        Some(steps)
    }

    /// Staggered steps: profile, text, then each skill card.
    pub fn schedule(&self, layout: AboutLayout) -> Vec<RevealStep> {
        let c = &self.config;
        let mut steps = Vec::with_capacity(layout.skill_count + 2);

        if layout.has_profile {
            steps.push(RevealStep {
                target: RevealTarget::Profile,
                delay_ms: c.profile_delay_ms,
            });
        }
        if layout.has_text {
            steps.push(RevealStep {
                target: RevealTarget::Text,
                delay_ms: c.text_delay_ms,
            });
        }
        steps.extend((0..layout.skill_count).map(|i| RevealStep {
            target: RevealTarget::Skill(i),
            delay_ms: c
                .skill_base_delay_ms
                .saturating_add(c.skill_stagger_ms.saturating_mul(i as u32)),
        }));

        steps
    }

    /// Delay for the forced fallback when `viewport` matches the configured
    /// device profile exactly.
    pub fn forced_delay(&self, viewport: ViewportSize) -> Option<u32> {
        let forced = self.config.forced_viewport;
        (forced.width == viewport.width && forced.height == viewport.height)
            .then_some(self.config.forced_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn about() -> AboutReveal {
        AboutReveal::new(&AboutRevealConfig::default())
    }

    fn layout(skills: usize) -> AboutLayout {
        AboutLayout {
            has_profile: true,
            has_text: true,
            skill_count: skills,
        }
    }

    #[test]
    fn test_entrance_observer_breakpoint() {
        let config = EntranceConfig::default();
        let narrow = entrance_observer(&config, 375.0);
        assert_eq!(narrow.threshold, 0.05);
        assert_eq!(narrow.root_margin, "0px 0px -20px 0px");

        let wide = entrance_observer(&config, 376.0);
        assert_eq!(wide.threshold, 0.1);
        assert_eq!(wide.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn test_section_styles() {
        let hidden = SectionStyle::hidden(&EntranceConfig::default());
        assert_eq!(hidden.opacity, "0");
        assert_eq!(hidden.transform, "translateY(30px)");
        assert!(hidden.transition.is_some());

        let shown = SectionStyle::revealed();
        assert_eq!(shown.opacity, "1");
        assert_eq!(shown.transform, "translateY(0)");
    }

    #[test]
    fn test_transition_refresh_only_for_mobile_journey() {
        let config = EntranceConfig::default();
        assert_eq!(transition_refresh_delay(&config, "journey", 390.0), Some(100));
        assert_eq!(transition_refresh_delay(&config, "journey", 1024.0), None);
        assert_eq!(transition_refresh_delay(&config, "about", 390.0), None);
    }

    fn step(target: RevealTarget, delay_ms: u32) -> RevealStep {
        RevealStep { target, delay_ms }
    }

    #[test]
    fn test_schedule_stagger() {
        let steps = about().schedule(layout(3));
        let expected = vec![
            step(RevealTarget::Profile, 100),
            step(RevealTarget::Text, 300),
            step(RevealTarget::Skill(0), 500),
            step(RevealTarget::Skill(1), 700),
            step(RevealTarget::Skill(2), 900),
        ];
        assert_eq!(steps, expected);
    }

    #[test]
    fn test_schedule_skips_missing_parts() {
        let steps = about().schedule(AboutLayout {
            has_profile: false,
            has_text: true,
            skill_count: 0,
        });
        assert_eq!(steps, vec![step(RevealTarget::Text, 300)]);
    }

    #[test]
    fn test_trigger_fires_once_across_paths() {
        let mut reveal = about();
        assert!(reveal.trigger(RevealTrigger::Observer, layout(2)).is_some());
        assert!(reveal.has_fired());
        assert!(reveal.trigger(RevealTrigger::ForcedViewport, layout(2)).is_none());
        assert!(reveal.trigger(RevealTrigger::Observer, layout(2)).is_none());
    }

    #[test]
    fn test_forced_delay_exact_match_only() {
        let reveal = about();
        assert_eq!(reveal.forced_delay(ViewportSize::new(375.0, 667.0)), Some(1000));
        assert_eq!(reveal.forced_delay(ViewportSize::new(375.0, 812.0)), None);
        assert_eq!(reveal.forced_delay(ViewportSize::new(390.0, 667.0)), None);
    }

    proptest! {
        #[test]
        fn gate_arms_exactly_once(calls in 1usize..50) {
            let mut gate = OneShotGate::new();
            let armed = (0..calls).filter(|_| gate.arm()).count();
            prop_assert_eq!(armed, 1);
        }
    }
}
