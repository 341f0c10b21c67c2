use super::*;

#[test]
fn transform_at_zero() {
    assert_eq!(transform_css(Offset::ZERO), "translate3d(0px, 0px, 0)");
}

#[test]
fn transform_keeps_fractional_and_negative_components() {
    assert_eq!(transform_css(Offset::new(-12.5, 40.0)), "translate3d(-12.5px, 40px, 0)");
}

#[test]
fn transition_disabled_while_dragging() {
    assert_eq!(transition_css(true), "none");
}

#[test]
fn transition_eased_when_idle() {
    assert_eq!(transition_css(false), "transform 0.2s ease-out");
}

#[test]
fn window_style_combines_both() {
    assert_eq!(
        window_style(Offset::new(40.0, 0.0), false),
        "transform: translate3d(40px, 0px, 0); transition: transform 0.2s ease-out;"
    );
    assert_eq!(window_style(Offset::ZERO, true), "transform: translate3d(0px, 0px, 0); transition: none;");
}
