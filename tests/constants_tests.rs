// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_positive() {
    assert!(INTRO_TICK_MS > 0);
    assert!(INTRO_MAX_STEP > 0.0);
    assert!(RESUME_RESET_MS > 0);
    assert!(MAX_FRAME_DT_SEC > 0.0);

    // Glitch flash must fit inside one period
    assert!(GLITCH_ACTIVE_MS < GLITCH_PERIOD_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fractions_are_within_unit_range() {
    assert!(SCROLL_LERP > 0.0 && SCROLL_LERP < 1.0);
    assert!(CARD_STACK_THRESHOLD > 0.0 && CARD_STACK_THRESHOLD <= 1.0);
    assert!(MAGNETIC_INNER_FRACTION < MAGNETIC_OUTER_FRACTION);
    assert!(TRACK_CENTER_BAND[0] < TRACK_CENTER_BAND[1]);
    assert!(TRACK_CENTER_BAND[0] >= 0.0 && TRACK_CENTER_BAND[1] <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_echo_tolerance_exceeds_settle_snap() {
    // A settled smooth scroll writes positions within SCROLL_SETTLE_PX of the
    // target; those must never be mistaken for user scrolling.
    assert!(SCROLL_ECHO_PX > SCROLL_SETTLE_PX);
    assert!(WHEEL_LINE_PX > 1.0);
}

#[test]
fn dom_hooks_are_well_formed() {
    for id in [
        CANVAS_ID,
        CONFIG_SCRIPT_ID,
        INTRO_ID,
        INTRO_TEXT_ID,
        LOADING_BAR_ID,
        RESUME_BUTTON_ID,
        FORM_ID,
        FORM_STATUS_ID,
    ] {
        assert!(!id.is_empty() && !id.starts_with('#'), "bad id {id}");
    }
    for sel in [
        HERO_BG_SELECTOR,
        TILT_SELECTOR,
        MAGNETIC_SELECTOR,
        MAGNETIC_INNER_SELECTOR,
        GLITCH_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "bad selector {sel}");
    }
    assert_ne!(BODY_LOADING_CLASS, BODY_LOADED_CLASS);
}

#[test]
fn intro_ids_match_core_selectors() {
    assert_eq!(format!("#{INTRO_ID}"), folio_core::intro::INTRO.selector);
    assert_eq!(format!("#{INTRO_TEXT_ID}"), folio_core::intro::INTRO_TEXT.selector);
    assert_eq!(format!("#{LOADING_BAR_ID}"), folio_core::intro::LOADING_BAR.selector);
}
