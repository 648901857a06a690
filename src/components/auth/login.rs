//! Login form.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::APP_NAME;
use crate::models::{AppRoute, SessionStatus};

stylance::import_crate_style!(css, "src/components/auth/auth.module.css");

#[component]
pub fn LoginPage(redirect: Option<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = ctx.session;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let busy = Signal::derive(move || session.status() == SessionStatus::Verifying);
    let error = Signal::derive(move || {
        session
            .session
            .with(|s| s.error_message().map(String::from))
    });

    // Leave as soon as the session is live; also covers a signed-in user
    // landing on the login page directly.
    let return_path = redirect.clone();
    Effect::new(move |_| {
        if session.is_authenticated() {
            match &return_path {
                Some(path) => AppRoute::from_hash(&format!("#{}", path)).replace(),
                None => AppRoute::Dashboard.replace(),
            }
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.trim().is_empty() || password.is_empty() {
            return;
        }
        spawn_local(async move { session.login(email, password).await });
    };

    view! {
        <div class=css::authPage>
            <form class=css::authCard on:submit=submit>
                <h1 class=css::authTitle>{APP_NAME}</h1>
                <p class=css::authSubtitle>"Sign in to your media library"</p>

                {move || error.get().map(|msg| view! {
                    <div class=css::errorBox role="alert">{msg}</div>
                })}

                <label class=css::field>
                    <span class=css::fieldLabel>"Email"</span>
                    <input
                        class=css::fieldInput
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>

                <label class=css::field>
                    <span class=css::fieldLabel>"Password"</span>
                    <input
                        class=css::fieldInput
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <button class=css::submitButton type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>

                <p class=css::switchLine>
                    "No account? "
                    <a
                        class=css::switchLink
                        href=AppRoute::Register.to_hash()
                    >
                        "Register"
                    </a>
                </p>
            </form>
        </div>
    }
}
