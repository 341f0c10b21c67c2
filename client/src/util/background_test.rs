use super::*;

const KEYS: &[&str] = &["sonoma", "sequoia", "ventura", "monterey"];

#[test]
fn initial_is_first_catalog_entry() {
    assert_eq!(initial_background(), "sonoma");
}

#[test]
fn every_key_has_a_url() {
    for key in background_keys() {
        assert!(background_url(key).is_some(), "{key} has no url");
    }
    assert_eq!(background_url("unknown"), None);
}

#[test]
fn no_previous_visit_keeps_initial() {
    assert_eq!(pick_background("sonoma", None, KEYS, 0.5), None);
}

#[test]
fn different_previous_keeps_initial() {
    assert_eq!(pick_background("sonoma", Some("ventura"), KEYS, 0.5), None);
}

#[test]
fn repeat_picks_a_different_key() {
    for roll in [0.0, 0.2, 0.34, 0.5, 0.67, 0.99] {
        let picked = pick_background("sonoma", Some("sonoma"), KEYS, roll);
        assert!(picked.is_some());
        assert_ne!(picked, Some("sonoma"));
    }
}

#[test]
fn roll_selects_among_remaining_keys() {
    assert_eq!(pick_background("sonoma", Some("sonoma"), KEYS, 0.0), Some("sequoia"));
    assert_eq!(pick_background("sonoma", Some("sonoma"), KEYS, 0.5), Some("ventura"));
    assert_eq!(pick_background("sonoma", Some("sonoma"), KEYS, 0.999), Some("monterey"));
}

#[test]
fn out_of_range_roll_is_clamped() {
    assert_eq!(pick_background("sonoma", Some("sonoma"), KEYS, 1.0), Some("monterey"));
    assert_eq!(pick_background("sonoma", Some("sonoma"), KEYS, -3.0), Some("sequoia"));
}

#[test]
fn single_wallpaper_cannot_be_replaced() {
    assert_eq!(pick_background("sonoma", Some("sonoma"), &["sonoma"], 0.5), None);
}
