//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange
//! events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the route signal is derived from
//!   `#/path` and refreshed by `hashchange` events
//! - **Browser back/forward buttons work automatically**
//! - **The dashboard is wrapped in the auth guard**; login, register, and
//!   the shared-file viewer are public entry points

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::auth::{LoginPage, RegisterPage, RequireAuth};
use crate::components::dashboard::DashboardPage;
use crate::components::shared::SharedFilePage;
use crate::models::AppRoute;

/// Main application router.
///
/// Routes:
/// - `#/` → Dashboard (guarded)
/// - `#/login`, `#/register` → auth entry points
/// - `#/shared/{token}` → public shared-file viewer
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! {
        {move || match route_memo.get() {
            AppRoute::Dashboard => view! {
                <RequireAuth>
                    <DashboardPage />
                </RequireAuth>
            }
            .into_any(),
            AppRoute::Login { redirect } => view! { <LoginPage redirect=redirect /> }.into_any(),
            AppRoute::Register => view! { <RegisterPage /> }.into_any(),
            AppRoute::Shared { token } => view! { <SharedFilePage token=token /> }.into_any(),
        }}
    }
}
