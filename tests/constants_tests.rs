// Host-side tests for the DOM contract and timing constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use leafstorm_core::{
    leaf_interval_ms, FxConfig, BOLT_LIFETIME_MS, FLASH_GAP_RANGE_MS, FLASH_X_RANGE,
    FLASH_Y_RANGE, GRACE_PERIOD_MS, LEAF_DURATION_MS, LEAF_PRE_ROLL_MS,
};

#[test]
fn leaf_interval_is_rounded_fraction_of_duration() {
    assert_eq!(leaf_interval_ms(), 8140.0);
    assert_eq!(LEAF_DURATION_MS, 22_000.0);
    assert_eq!(LEAF_PRE_ROLL_MS, 300.0);
    assert_eq!(GRACE_PERIOD_MS, 500.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flash_ranges_are_the_page_bands() {
    assert_eq!(FLASH_X_RANGE, (10.0, 90.0));
    assert_eq!(FLASH_Y_RANGE, (10.0, 60.0));
    assert_eq!(FLASH_GAP_RANGE_MS, (180.0, 520.0));
    assert!(BOLT_LIFETIME_MS > 0.0);
}

#[test]
fn default_bolt_fallback_covers_lifetime_and_grace() {
    let cfg = FxConfig::default();
    assert_eq!(cfg.bolt_fallback_ms, Some(BOLT_LIFETIME_MS + GRACE_PERIOD_MS));
}

#[test]
fn class_names_are_bare_and_selectors_are_prefixed() {
    for class in [
        SCREEN_DIM_CLASS,
        FX_LAYER_CLASS,
        FLASH_SCRIM_CLASS,
        LEAF_CLASS,
        BOLT_CLASS,
        SHOW_CLASS,
        FOCUS_CLASS,
        HOVER_CLASS,
        OPEN_CLASS,
    ] {
        assert!(!class.is_empty());
        assert!(!class.starts_with('.'), "{class}");
        assert!(!class.contains(' '), "{class}");
    }
    for sel in [
        BACKGROUND_SELECTOR,
        HITBOX_SELECTOR,
        CHARACTER_SELECTOR,
        LOGO_SELECTOR,
        GAME_INFO_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel}");
    }
    assert_eq!(class_selector(FLASH_SCRIM_CLASS), ".flash-scrim");
    assert!(FLASH_X_VAR.starts_with("--") && FLASH_Y_VAR.starts_with("--"));
}

#[test]
fn bgm_settings_are_sane() {
    assert!(BGM_SRC.ends_with(".mp3"));
    assert!((0.0..=1.0).contains(&BGM_VOLUME));
    assert!(!BGM_TOGGLE_ID.starts_with('#'));
}
