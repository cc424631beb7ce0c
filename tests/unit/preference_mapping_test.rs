//! Preference cards and the toggles they switch on.

use examaccess::preferences::{
    apply_preference, find_toggle, SetupState, ToggleCategory, PREFERENCES, TOGGLES,
};
use examaccess::ExamHandoff;

#[test]
fn test_every_mapped_toggle_exists() {
    for pref in PREFERENCES {
        for id in pref.auto_toggles {
            assert!(find_toggle(id).is_some(), "{} maps unknown toggle {}", pref.id, id);
        }
    }
}

#[test]
fn test_reading_enables_four_toggles() {
    let mut setup = SetupState::new();
    setup.toggle_preference("reading");

    for id in ["increase-font", "line-spacing", "bold-text", "highlight-keywords"] {
        assert!(setup.toggles.is_enabled(id), "{} should be on", id);
    }
    assert_eq!(setup.toggles.enabled_ids().count(), 4);
}

#[test]
fn test_selection_overrides_manual_off() {
    let mut setup = SetupState::new();
    setup.toggle_switch("captions");
    setup.toggle_switch("captions");
    assert!(!setup.toggles.is_enabled("captions"));

    setup.toggle_preference("listening");
    assert!(setup.toggles.is_enabled("captions"));
}

#[test]
fn test_deselect_keeps_auto_enabled_toggles() {
    let mut setup = SetupState::new();
    setup.toggle_preference("reading");
    setup.toggle_preference("reading");

    assert!(!setup.is_preference_selected("reading"));
    for id in apply_preference("reading") {
        assert!(setup.toggles.is_enabled(id));
    }
}

#[test]
fn test_manual_switch_after_selection_wins() {
    let mut setup = SetupState::new();
    setup.toggle_preference("sign");
    setup.toggle_switch("sign-video");

    assert!(!setup.toggles.is_enabled("sign-video"));
    assert!(setup.toggles.is_enabled("dual-language"));
}

#[test]
fn test_unknown_preference_maps_to_nothing() {
    assert!(apply_preference("telepathy").is_empty());

    let mut setup = SetupState::new();
    setup.toggle_preference("telepathy");
    assert!(setup.toggles.is_empty());
}

#[test]
fn test_sections_cover_every_toggle_once() {
    let total: usize = ToggleCategory::all()
        .iter()
        .map(|category| category.toggles().count())
        .sum();
    assert_eq!(total, TOGGLES.len());
    assert_eq!(ToggleCategory::SpeechMotor.toggles().count(), 2);
}

#[test]
fn test_handoff_preserves_selection_order() {
    let mut setup = SetupState::new();
    setup.toggle_preference("sign");
    setup.toggle_preference("listening");
    setup.toggle_preference("reading");

    let handoff = ExamHandoff::from_setup(&setup);
    let order: Vec<&str> = handoff.preferences.iter().collect();
    assert_eq!(order, vec!["sign", "listening", "reading"]);

    let json = serde_json::to_string(&handoff).unwrap();
    assert_eq!(ExamHandoff::from_json(&json).unwrap(), handoff);
}
