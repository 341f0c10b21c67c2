#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_empty_outside_browser() {
    assert_eq!(load_item("lastBackground"), None);
}

#[test]
fn save_is_noop_outside_browser() {
    save_item("lastBackground", "sonoma");
    assert_eq!(load_item("lastBackground"), None);
}
