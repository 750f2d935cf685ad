//! Terminal input line with virtual cursor and typeahead.
//!
//! The visible line is rendered from the session's buffer; a transparent
//! `<input>` only captures keyboard focus. Editing keys are translated to
//! [`Key`] and applied to the session, while pasted or composed text arrives
//! through the native `input` event and is inserted whole.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::{Key, ProjectsRequest, Session, Submission, TokenClass};
use crate::utils::{BrowserTimer, GithubClient, load_projects};

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Run the repository request and hand the outcome back to the session.
fn spawn_projects(session: RwSignal<Session>, request: ProjectsRequest) {
    spawn_local(async move {
        let result = load_projects(&GithubClient, &BrowserTimer, &request.url).await;
        session.update(|s| {
            s.settle(request.ticket, result);
        });
    });
}

/// Moves whatever the native input holds into the buffer.
fn flush_native_input(session: RwSignal<Session>, ev: &ev::Event) {
    let Some(target) = ev.target() else { return };
    let input = target.unchecked_into::<web_sys::HtmlInputElement>();
    let text = input.value();
    if text.is_empty() {
        return;
    }
    input.set_value("");
    session.update(|s| s.insert_text(&text));
}

#[component]
pub fn Input() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = ctx.session;
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.is_composing() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let Some(key) = Key::from_dom(&ev.key(), ev.ctrl_key()) else {
            return;
        };
        ev.prevent_default();

        match session.try_update(|s| s.handle_key(key)).flatten() {
            Some(Submission::Running(request)) => spawn_projects(session, request),
            Some(Submission::Busy) => log::debug!("input ignored while a command is running"),
            _ => {}
        }
    };

    let handle_input = move |ev: ev::Event| {
        let composing = ev
            .dyn_ref::<web_sys::InputEvent>()
            .is_some_and(|e| e.is_composing());
        if !composing {
            flush_native_input(session, &ev);
        }
    };

    let handle_composition_end = move |ev: ev::CompositionEvent| {
        flush_native_input(session, &ev);
    };

    let prompt = move || session.with(|s| s.prompt());
    let token_class = move || match session.with(|s| s.first_token_class()) {
        TokenClass::Pass => css::pass,
        TokenClass::Fail => css::fail,
    };
    let before = move || session.with(|s| s.buffer().before().to_string());
    let under_cursor = move || {
        session.with(|s| {
            s.buffer()
                .after()
                .chars()
                .next()
                .map_or_else(|| " ".to_string(), String::from)
        })
    };
    let after = move || {
        session.with(|s| {
            let mut rest = s.buffer().after().chars();
            rest.next();
            rest.as_str().to_string()
        })
    };
    let typeahead = move || {
        session.with(|s| {
            s.suggestion()
                .map(|x| x.continuation.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class=css::line role="group" aria-label="command prompt">
            <span class=format!("{} glow", css::prompt)>{prompt}</span>
            " "
            <span class=token_class>
                <span data-testid="before-cursor">{before}</span>
                <span class=css::cursor data-testid="cursor">{under_cursor}</span>
                <span data-testid="after-cursor">{after}</span>
            </span>
            <span class=css::typeahead data-testid="typeahead">{typeahead}</span>
            <input
                node_ref=input_ref
                type="text"
                class=css::capture
                aria-label="command input"
                autocomplete="off"
                autocapitalize="off"
                spellcheck="false"
                on:keydown=handle_keydown
                on:input=handle_input
                on:compositionend=handle_composition_end
            />
        </div>
    }
}
