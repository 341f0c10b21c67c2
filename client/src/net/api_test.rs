use super::*;

#[test]
fn chat_failed_message_with_detail() {
    assert_eq!(chat_failed_message(500, Some("upstream timeout")), "chat request failed (500): upstream timeout");
}

#[test]
fn chat_failed_message_without_detail() {
    assert_eq!(chat_failed_message(502, None), "chat request failed: 502");
    assert_eq!(chat_failed_message(500, Some("")), "chat request failed: 500");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_chat_is_unavailable_outside_browser() {
    let result = block_on_ready(send_chat(Vec::new()));
    assert_eq!(result, Err("not available on server".to_owned()));
}

/// Minimal single-poll executor; the non-hydrate body never awaits.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
