//! Chat terminal in the middle of the desktop.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits the transcript to the `/api/chat` relay and appends the reply (or
//! an error line). Input is disabled while a request is in flight.

use leptos::prelude::*;

use crate::net::api::send_chat;
use crate::state::terminal::{LineKind, TerminalLine, TerminalState};
use crate::util::markdown::render_markdown_html;

fn new_line_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[component]
pub fn MacTerminal() -> impl IntoView {
    let terminal = RwSignal::new(TerminalState::default());
    let input = RwSignal::new(String::new());
    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        // Re-run whenever a line is added or the pending row toggles.
        terminal.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = transcript_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let Some(messages) = terminal.try_update(|t| t.submit(&text, new_line_id())).flatten() else {
            return;
        };
        input.set(String::new());

        leptos::task::spawn_local(async move {
            let result = send_chat(messages).await;
            #[cfg(feature = "hydrate")]
            if let Err(e) = &result {
                log::warn!("chat relay failed: {e}");
            }
            terminal.update(|t| t.receive(result, new_line_id()));
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <section class="terminal" aria-label="Terminal">
            <div class="terminal__titlebar">
                <div class="window__controls">
                    <span class="window__control window__control--close"></span>
                    <span class="window__control window__control--minimize"></span>
                    <span class="window__control window__control--zoom"></span>
                </div>
                <span class="terminal__title">"dante@portfolio: ~"</span>
            </div>
            <div class="terminal__transcript" node_ref=transcript_ref>
                {move || terminal.with(|t| t.lines.iter().map(render_line).collect::<Vec<_>>())}
                {move || terminal.with(|t| t.pending).then(|| view! { <div class="terminal__pending">"thinking..."</div> })}
            </div>
            <div class="terminal__prompt">
                <span class="terminal__caret">"$"</span>
                <input
                    class="terminal__input"
                    type="text"
                    placeholder="Ask me anything..."
                    autocomplete="off"
                    disabled=move || terminal.with(|t| t.pending)
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </div>
        </section>
    }
}

fn render_line(line: &TerminalLine) -> AnyView {
    match line.kind {
        LineKind::Welcome => view! { <div class="terminal__line terminal__line--welcome">{line.text.clone()}</div> }.into_any(),
        LineKind::User => view! {
            <div class="terminal__line terminal__line--user">
                <span class="terminal__caret">"$"</span>
                {line.text.clone()}
            </div>
        }
        .into_any(),
        LineKind::Assistant => {
            let rendered = render_markdown_html(&line.text);
            view! { <div class="terminal__line terminal__line--assistant" inner_html=rendered></div> }.into_any()
        }
        LineKind::Error => view! { <div class="terminal__line terminal__line--error">{line.text.clone()}</div> }.into_any(),
    }
}
