//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::{ListingState, SessionState};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Session state**: authentication lifecycle and the token store
/// - **Listing state**: the query tuple and the committed file collection
///
/// Share workflow state is deliberately absent: it is scoped to one open
/// dialog and lives in the dialog component instead.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Authentication state and transitions.
    pub session: SessionState,

    /// Listing query and file collection.
    pub listing: ListingState,
}

impl AppContext {
    /// Creates the application context at process start.
    ///
    /// The session is rehydrated from the token store when a complete
    /// persisted pair exists; everything else starts empty.
    pub fn new() -> Self {
        Self {
            session: SessionState::bootstrap(),
            listing: ListingState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
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
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1>"Something went wrong"</h1>
                        <p>"An unexpected error occurred. Please try reloading the page."</p>
                        <ul style="text-align: left;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }>
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
