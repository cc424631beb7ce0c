//! Mode resolution over toggle and preference combinations.

use examaccess::preferences::{SelectedPreferences, ToggleState, TOGGLES};
use examaccess::{resolve_modes, ResolvedModes};

fn toggles(on: &[&str]) -> ToggleState {
    on.iter().map(|id| (*id, true)).collect()
}

#[test]
fn test_sign_mode_truth_table() {
    let none = SelectedPreferences::new();
    let cases = [
        (&[] as &[&str], false),
        (&["sign-video"][..], true),
        (&["dual-language"][..], true),
        (&["sign-video", "dual-language"][..], true),
        (&["captions", "high-contrast"][..], false),
    ];

    for (on, expected) in cases {
        assert_eq!(resolve_modes(&toggles(on), &none).sign, expected, "{:?}", on);
    }
}

#[test]
fn test_explicit_false_is_off() {
    let state: ToggleState = [("sign-video", false), ("high-contrast", false)]
        .into_iter()
        .collect();
    assert_eq!(
        resolve_modes(&state, &SelectedPreferences::new()),
        ResolvedModes::default()
    );
}

#[test]
fn test_only_sign_toggles_split() {
    let none = SelectedPreferences::new();
    for toggle in TOGGLES {
        let modes = resolve_modes(&toggles(&[toggle.id]), &none);
        let expected = toggle.id == "sign-video" || toggle.id == "dual-language";
        assert_eq!(modes.sign, expected, "{}", toggle.id);
    }
}

#[test]
fn test_preference_driven_modes() {
    let prefs: SelectedPreferences = ["reading", "listening"].into_iter().collect();
    let modes = resolve_modes(&ToggleState::new(), &prefs);

    assert!(modes.reading);
    assert!(modes.listening);
    assert!(!modes.simplified);
    // Reading preference alone does not enlarge base text
    assert!(!modes.large_text);
}

#[test]
fn test_toggle_driven_modes() {
    let modes = resolve_modes(
        &toggles(&[
            "high-contrast",
            "extra-large-text",
            "voice-answers",
            "voice-nav",
            "bold-text",
            "realtime-captions",
        ]),
        &SelectedPreferences::new(),
    );

    assert!(modes.high_contrast);
    assert!(modes.large_text);
    assert!(modes.voice);
    assert!(modes.voice_navigation);
    assert!(modes.bold_text);
    assert!(modes.captions);
    assert!(!modes.listening);
    assert!(!modes.reading);
}

#[test]
fn test_unknown_keys_ignored() {
    let modes = resolve_modes(
        &toggles(&["holograms"]),
        &["telepathy"].into_iter().collect(),
    );
    assert_eq!(modes, ResolvedModes::default());
}

#[test]
fn test_resolution_is_repeatable() {
    let mut state = toggles(&["captions", "high-contrast"]);
    let mut prefs = SelectedPreferences::new();
    prefs.insert("reading");

    let first = resolve_modes(&state, &prefs);
    assert_eq!(resolve_modes(&state, &prefs), first);

    state.flip("sign-video");
    let flipped = resolve_modes(&state, &prefs);
    assert!(flipped.sign);
    assert_eq!(resolve_modes(&state, &prefs), flipped);

    state.flip("sign-video");
    assert_eq!(resolve_modes(&state, &prefs), first);
}
