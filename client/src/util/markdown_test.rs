use super::*;

#[test]
fn plain_text_becomes_paragraph() {
    assert_eq!(render_markdown_html("hello"), "<p>hello</p>\n");
}

#[test]
fn emphasis_and_code_render() {
    let html = render_markdown_html("**bold** and `code`");
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<code>code</code>"));
}

#[test]
fn inline_html_is_dropped() {
    let html = render_markdown_html("safe <script>alert(1)</script> text");
    assert!(!html.contains("<script>"));
    assert!(html.contains("safe"));
}

#[test]
fn block_html_is_dropped() {
    let html = render_markdown_html("<div onclick=\"x()\">hi</div>\n\nafter");
    assert!(!html.contains("onclick"));
    assert!(html.contains("<p>after</p>"));
}

#[test]
fn strikethrough_is_enabled() {
    assert!(render_markdown_html("~~old~~").contains("<del>old</del>"));
}
