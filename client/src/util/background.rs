//! Desktop wallpaper catalog and the repeat-avoidance pick.
//!
//! The server always renders [`initial_background`]. After hydration the
//! shell compares it with the key remembered in `localStorage`; when they
//! match, a different wallpaper is chosen at random so consecutive visits
//! rarely show the same one.

#[cfg(test)]
#[path = "background_test.rs"]
mod background_test;

/// `localStorage` key holding the last wallpaper shown.
pub const LAST_BACKGROUND_KEY: &str = "lastBackground";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Background {
    pub key: &'static str,
    pub url: &'static str,
}

pub const BACKGROUNDS: &[Background] = &[
    Background { key: "sonoma", url: "/backgrounds/sonoma.jpg" },
    Background { key: "sequoia", url: "/backgrounds/sequoia.jpg" },
    Background { key: "ventura", url: "/backgrounds/ventura.jpg" },
    Background { key: "monterey", url: "/backgrounds/monterey.jpg" },
];

/// Wallpaper rendered on the server.
pub fn initial_background() -> &'static str {
    BACKGROUNDS.first().map_or("", |b| b.key)
}

pub fn background_keys() -> Vec<&'static str> {
    BACKGROUNDS.iter().map(|b| b.key).collect()
}

pub fn background_url(key: &str) -> Option<&'static str> {
    BACKGROUNDS.iter().find(|b| b.key == key).map(|b| b.url)
}

/// Choose a replacement wallpaper, or `None` to keep `initial`.
///
/// A replacement is chosen only when `last` equals `initial`. `roll` is a
/// uniform sample in `[0, 1)` selecting among the other keys.
pub fn pick_background(initial: &str, last: Option<&str>, keys: &[&'static str], roll: f64) -> Option<&'static str> {
    if last != Some(initial) {
        return None;
    }
    let candidates: Vec<&'static str> = keys.iter().copied().filter(|k| *k != initial).collect();
    if candidates.is_empty() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let index = ((roll.clamp(0.0, 1.0) * candidates.len() as f64).floor() as usize).min(candidates.len() - 1);
    candidates.get(index).copied()
}

/// Uniform sample in `[0, 1)`; constant outside the browser.
pub fn random_roll() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
