//! Scoped changes to `<body>` that must always be reverted.
//!
//! Each guard applies its change on `acquire` and reverts it on `Drop`, so a
//! window that unmounts mid-drag or mid-close never leaves the page stuck
//! unscrollable or with a grabbing cursor. Server builds hold no state.

#[cfg(test)]
#[path = "body_effects_test.rs"]
mod body_effects_test;

/// Class that forces the grabbing cursor over the whole page.
pub const GRAB_CLASS: &str = "cursor-grabbing";

#[cfg(feature = "hydrate")]
fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// `overflow: hidden` on `<body>` while held; restores the prior value on drop.
pub struct ScrollLock {
    #[cfg(feature = "hydrate")]
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(body) = body() else {
                return Self { previous: String::new() };
            };
            let style = body.style();
            let previous = style.get_property_value("overflow").unwrap_or_default();
            if let Err(e) = style.set_property("overflow", "hidden") {
                log::warn!("scroll lock failed: {e:?}");
            }
            Self { previous }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(body) = body() else {
                return;
            };
            let style = body.style();
            let restored = if self.previous.is_empty() {
                style.remove_property("overflow").map(|_| ())
            } else {
                style.set_property("overflow", &self.previous)
            };
            if let Err(e) = restored {
                log::warn!("scroll unlock failed: {e:?}");
            }
        }
    }
}

/// [`GRAB_CLASS`] on `<body>` while held.
pub struct GrabCursor {
    _private: (),
}

impl GrabCursor {
    pub fn acquire() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if let Some(body) = body() {
                if let Err(e) = body.class_list().add_1(GRAB_CLASS) {
                    log::warn!("grab cursor failed: {e:?}");
                }
            }
        }
        Self { _private: () }
    }
}

impl Drop for GrabCursor {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(body) = body() {
                if let Err(e) = body.class_list().remove_1(GRAB_CLASS) {
                    log::warn!("grab cursor release failed: {e:?}");
                }
            }
        }
    }
}
