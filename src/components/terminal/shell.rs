//! Main shell component.
//!
//! Hosts the banner, the output log and the input line inside one scrolling
//! container, and keys the color palette off the session's theme.

use leptos::prelude::*;

use super::{Banner, Input, Output};
use crate::app::AppContext;
use crate::core::{ScrollController, ScrollTrigger, Session};
use crate::models::OutputData;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

const CURSOR_SELECTOR: &str = "[data-testid=\"cursor\"]";

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// What the autoscroll effect compares between runs.
#[derive(Clone, PartialEq)]
struct ScrollSnapshot {
    /// Entry count, newest ID, and whether the newest entry is still loading.
    output: (usize, Option<usize>, bool),
    buffer: (String, usize),
}

impl ScrollSnapshot {
    fn of(session: &Session) -> Self {
        let last = session.output().last();
        Self {
            output: (
                session.output().len(),
                last.map(|e| e.id),
                last.is_some_and(|e| e.data == Some(OutputData::Loading)),
            ),
            buffer: (session.buffer().text().to_string(), session.buffer().cursor()),
        }
    }
}

/// Keep the cursor in view after output or buffer changes.
fn setup_autoscroll_effect(session: RwSignal<Session>, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move |previous: Option<ScrollSnapshot>| {
        let snapshot = session.with(ScrollSnapshot::of);
        let trigger = match &previous {
            Some(prev) if prev.output == snapshot.output => ScrollTrigger::BufferChanged,
            _ => ScrollTrigger::OutputChanged,
        };
        if previous.as_ref() != Some(&snapshot)
            && let Some(container) = output_ref.get()
        {
            let viewport = dom::viewport(&container);
            if ScrollController::should_adjust(trigger, viewport.is_constrained())
                && let Some(point) = dom::edit_point(&container, CURSOR_SELECTOR)
                && let Some(top) = ScrollController::adjust(viewport, point)
            {
                container.set_scroll_top(top.round() as i32);
            }
        }
        snapshot
    });
}

// ============================================================================
// Shell Component
// ============================================================================

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let session = ctx.session;
    let output_ref = NodeRef::<leptos::html::Div>::new();

    setup_autoscroll_effect(session, output_ref);

    let theme_id = move || format!("theme-{}", session.with(|s| s.theme()));
    let banner_visible = move || session.with(|s| s.banner_visible());

    view! {
        <div id=theme_id class=css::screen>
            <div
                node_ref=output_ref
                class=css::container
                on:click=move |_| dom::focus_terminal_input()
            >
                <Show when=banner_visible fallback=|| ()>
                    <Banner />
                </Show>
                // The key changes when a loading entry settles, so it re-renders.
                <For
                    each=move || session.with(|s| s.output().to_vec())
                    key=|entry| (entry.id, entry.data == Some(OutputData::Loading))
                    children=|entry| view! { <Output entry=entry /> }
                />
                <Input />
            </div>
        </div>
    }
}
