//! Entrance animations: section fade/slide-in and the one-shot about reveal.

use std::rc::Rc;

use folio_motion::entrance::{
    entrance_observer, transition_refresh_delay, SectionStyle, FLY_IN_CLASS,
};
use folio_motion::{AboutLayout, FolioResult, RevealTarget, RevealTrigger};
use web_sys::Element;

use crate::controller::{PageController, SharedState};
use crate::dom;
use crate::selectors::{
    ABOUT_CONTAINER, ABOUT_PROFILE, ABOUT_SKILL_CARDS, ABOUT_TEXT, ALL_SECTIONS, HOME_ID,
};
use crate::timers;

fn apply_style(element: &Element, style: &SectionStyle) {
    dom::set_style(element, "opacity", style.opacity);
    dom::set_style(element, "transform", &style.transform);
    if let Some(transition) = &style.transition {
        dom::set_style(element, "transition", transition);
    }
}

/// Hide every section, reveal each as it enters the viewport. The home
/// section is on screen from the start and is revealed immediately.
pub fn install_sections(ctrl: &PageController) -> FolioResult<()> {
    let sections = dom::query_all(&ctrl.document, ALL_SECTIONS);
    let config = Rc::clone(&ctrl.config);

    let hidden = SectionStyle::hidden(&config.entrance);
    for section in &sections {
        apply_style(section, &hidden);
    }

    let width = dom::viewport_size(&ctrl.window).width;
    let options = entrance_observer(&config.entrance, width);
    let window = ctrl.window.clone();

    if !sections.is_empty() {
        dom::observe_intersecting(&sections, &options, move |target| {
            apply_style(target, &SectionStyle::revealed());

            let width = dom::viewport_size(&window).width;
            if let Some(delay) = transition_refresh_delay(&config.entrance, &target.id(), width) {
                let target = target.clone();
                let transition = config.entrance.transition.clone();
                let refresh = timers::set_timeout(&window, delay, move || {
                    dom::set_style(&target, "transition", &transition);
                });
                if let Err(err) = refresh {
                    tracing::warn!(error = %err, "transition refresh not scheduled");
                }
            }
        })?;
    }

    if let Some(home) = ctrl.document.get_element_by_id(HOME_ID) {
        apply_style(&home, &SectionStyle::revealed());
    }

    tracing::debug!(
        count = sections.len(),
        threshold = options.threshold,
        "entrance observer attached"
    );
    Ok(())
}

/// Fly in the about container's profile, text and skill cards, once.
pub fn install_about_reveal(ctrl: &PageController) -> FolioResult<()> {
    let Some(container) = dom::query(&ctrl.document, ABOUT_CONTAINER) else {
        tracing::debug!("no about container, about reveal not attached");
        return Ok(());
    };

    let options = ctrl.config.about_reveal.observer();
    let state = Rc::clone(&ctrl.state);
    dom::observe_intersecting(std::slice::from_ref(&container), &options, move |target| {
        if !state.borrow().about.has_fired() {
            trigger_reveal(target, &state, RevealTrigger::Observer);
        }
    })?;

    let viewport = dom::viewport_size(&ctrl.window);
    let forced_delay = ctrl.state.borrow().about.forced_delay(viewport);
    if let Some(delay) = forced_delay {
        let state = Rc::clone(&ctrl.state);
        timers::set_timeout(&ctrl.window, delay, move || {
            if !state.borrow().about.has_fired() {
                tracing::info!(
                    width = viewport.width,
                    height = viewport.height,
                    "forcing about reveal"
                );
                trigger_reveal(&container, &state, RevealTrigger::ForcedViewport);
            }
        })?;
    }
    Ok(())
}

fn trigger_reveal(container: &Element, state: &SharedState, trigger: RevealTrigger) {
    let profile = dom::query_in(container, ABOUT_PROFILE);
    let text = dom::query_in(container, ABOUT_TEXT);
    let skills = dom::query_all_in(container, ABOUT_SKILL_CARDS);
    let layout = AboutLayout {
        has_profile: profile.is_some(),
        has_text: text.is_some(),
        skill_count: skills.len(),
    };

    let Some(steps) = state.borrow_mut().about.trigger(trigger, layout) else {
        return;
    };

    let mut state = state.borrow_mut();
    for step in steps {
        let element = match step.target {
            RevealTarget::Profile => profile.clone(),
            RevealTarget::Text => text.clone(),
            RevealTarget::Skill(i) => skills.get(i).cloned(),
        };
        let Some(element) = element else {
            continue;
        };
        let scheduled = state
            .about_timers
            .schedule(step.delay_ms, move || dom::add_class(&element, FLY_IN_CLASS));
        if let Err(err) = scheduled {
            tracing::warn!(?step, error = %err, "reveal step not scheduled");
        }
    }
    tracing::debug!(pending = state.about_timers.len(), "about reveal scheduled");
}
