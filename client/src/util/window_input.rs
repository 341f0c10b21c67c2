//! DOM event decoding for draggable windows.

use wasm_bindgen::JsCast;
use windowing::geom::Point;
use windowing::input::PressTarget;

/// Selector for interactive controls embedded in a drag handle.
const CONTROL_SELECTOR: &str = "button, a, input";

pub fn mouse_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Position of the first active touch, if any.
pub fn first_touch_point(ev: &web_sys::TouchEvent) -> Option<Point> {
    let touch = ev.touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

fn target_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target()?.dyn_into::<web_sys::Element>().ok()
}

/// Classify a press that landed on the drag handle.
pub fn handle_press_target(ev: &web_sys::Event) -> PressTarget {
    let on_control = target_element(ev)
        .and_then(|el| el.closest(CONTROL_SELECTOR).ok().flatten())
        .is_some();
    if on_control { PressTarget::HandleControl } else { PressTarget::Handle }
}

/// Classify a document-level press relative to the window root.
pub fn document_press_target(root: Option<&web_sys::Element>, ev: &web_sys::Event) -> PressTarget {
    let Some(root) = root else {
        return PressTarget::Outside;
    };
    let node = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    if root.contains(node.as_ref()) { PressTarget::Body } else { PressTarget::Outside }
}
