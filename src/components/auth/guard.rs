//! Route guard for protected views.
//!
//! Children render only while the session is authenticated. A session
//! rehydrated from the token store is trusted immediately (no blank flash
//! on reload) while its token is confirmed in the background; if the
//! backend rejects it, the session controller drops to anonymous and the
//! guard redirects to login with the originally requested path.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::models::{AppRoute, SessionStatus};

stylance::import_crate_style!(css, "src/components/auth/auth.module.css");

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = ctx.session;

    // Memoized so children are not torn down and remounted when the
    // session signal changes without leaving the Authenticated phase
    // (e.g. background verification filling in the confirmed user).
    let phase = Memo::new(move |_| session.status());

    // Redirect on anonymous/failed sessions; lazily confirm rehydrated
    // ones. Re-runs when the phase changes, so a token expiring
    // mid-session also lands here.
    Effect::new(move |_| match phase.get() {
        SessionStatus::Anonymous | SessionStatus::Error(_) => {
            AppRoute::current().login_with_return().replace();
        }
        SessionStatus::Authenticated => {
            if session.needs_verification() {
                spawn_local(async move { session.verify().await });
            }
        }
        SessionStatus::Verifying => {}
    });

    view! {
        {move || match phase.get() {
            SessionStatus::Authenticated => children().into_any(),
            SessionStatus::Verifying => view! {
                <div class=css::guardLoading>
                    <span class=css::spinner aria-label="Checking session"></span>
                </div>
            }
            .into_any(),
            // Redirecting; render nothing in the meantime
            _ => ().into_any(),
        }}
    }
}
