#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn parse_accepts_stored_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn stored_choice_overrides_system_preference() {
    assert_eq!(resolve(Some("light"), Some(true)), Theme::Light);
    assert_eq!(resolve(Some("dark"), Some(false)), Theme::Dark);
}

#[test]
fn system_preference_used_without_stored_choice() {
    assert_eq!(resolve(None, Some(false)), Theme::Light);
    assert_eq!(resolve(None, Some(true)), Theme::Dark);
}

#[test]
fn unknown_environment_defaults_to_dark() {
    assert_eq!(resolve(None, None), Theme::Dark);
    assert_eq!(resolve(Some("garbage"), None), Theme::Dark);
}

#[test]
fn read_preference_is_dark_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Dark);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Dark), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}
