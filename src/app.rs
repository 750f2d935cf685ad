//! Root application module.
//!
//! Contains the main App component and the AppContext that hands the
//! interpreter session to every component.

use leptos::prelude::*;

use crate::components::terminal::Shell;
use crate::core::Session;
use crate::models::Profile;
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; children reach it with
/// `use_context::<AppContext>()`. The whole interpreter lives in one signal,
/// so every key event is a single `update` and the view re-reads what it
/// needs.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<Session>,
}

impl AppContext {
    pub fn new(profile: Profile) -> Self {
        Self {
            session: RwSignal::new(Session::new(profile)),
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Sets the document title from the profile
/// - Renders the Shell inside an ErrorBoundary
#[component]
pub fn App(profile: Profile) -> impl IntoView {
    if let Some(document) = dom::window().and_then(|w| w.document()) {
        document.set_title(&profile.title);
    }

    let ctx = AppContext::new(profile);
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: monospace;
                ">
                    <h1>"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = dom::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
