//! Registration form.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::APP_NAME;
use crate::models::{AppRoute, SessionStatus};

stylance::import_crate_style!(css, "src/components/auth/auth.module.css");

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = ctx.session;

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let busy = Signal::derive(move || session.status() == SessionStatus::Verifying);
    let error = Signal::derive(move || {
        session
            .session
            .with(|s| s.error_message().map(String::from))
    });

    Effect::new(move |_| {
        if session.is_authenticated() {
            AppRoute::Dashboard.replace();
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return;
        }
        spawn_local(async move { session.register(name, email, password).await });
    };

    view! {
        <div class=css::authPage>
            <form class=css::authCard on:submit=submit>
                <h1 class=css::authTitle>{APP_NAME}</h1>
                <p class=css::authSubtitle>"Create your account"</p>

                {move || error.get().map(|msg| view! {
                    <div class=css::errorBox role="alert">{msg}</div>
                })}

                <label class=css::field>
                    <span class=css::fieldLabel>"Name"</span>
                    <input
                        class=css::fieldInput
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>

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
                    {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                </button>

                <p class=css::switchLine>
                    "Already registered? "
                    <a
                        class=css::switchLink
                        href=AppRoute::Login { redirect: None }.to_hash()
                    >
                        "Sign in"
                    </a>
                </p>
            </form>
        </div>
    }
}
