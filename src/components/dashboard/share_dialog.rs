//! Share dialog: invite by email or generate a public link.
//!
//! One [`ShareSession`] is created per dialog open and discarded on close;
//! the link sub-flow therefore fires its generation request at most once
//! per open, no matter how often the tabs are switched. Activation happens
//! on the first visit to the Link tab, not on dialog open, so an
//! invite-only interaction costs no network call.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::COPY_RESET_MS;
use crate::core::api;
use crate::models::{InviteState, LinkState, ShareSession, ShareTab};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/dashboard/share_dialog.module.css");

#[component]
pub fn ShareDialog(
    file_id: String,
    file_name: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = ctx.session;

    // Dialog-instance state; dropped with the component on close.
    let share = RwSignal::new(ShareSession::new());
    let (email, set_email) = signal(String::new());
    let (copied, set_copied) = signal(false);

    let file_id = StoredValue::new(file_id);

    let generate = move || {
        spawn_local(async move {
            let Some(token) = session.token() else {
                session.expire();
                return;
            };
            match api::generate_share_link(&file_id.get_value(), &token).await {
                Ok(url) => share.update(|s| s.link_ready(url)),
                Err(e) => {
                    if e.is_auth_failure() {
                        session.expire();
                    }
                    web_sys::console::warn_1(
                        &format!("share link generation failed: {}", e).into(),
                    );
                    share.update(|s| s.link_failed());
                }
            }
        });
    };

    let select_tab = move |tab: ShareTab| {
        let fire = share.try_update(|s| s.activate_tab(tab)).unwrap_or(false);
        if fire {
            generate();
        }
    };

    let retry_link = move |_| {
        if share.try_update(|s| s.retry_link()).unwrap_or(false) {
            generate();
        }
    };

    let send_invite = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let recipient = email.get_untracked().trim().to_string();
        if recipient.is_empty() {
            return;
        }
        if !share.try_update(|s| s.begin_invite()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let Some(token) = session.token() else {
                session.expire();
                return;
            };
            match api::share_by_email(&file_id.get_value(), &recipient, &token).await {
                Ok(()) => {
                    share.update(|s| s.invite_sent(recipient));
                    set_email.set(String::new());
                }
                Err(e) => {
                    if e.is_auth_failure() {
                        session.expire();
                    }
                    share.update(|s| {
                        s.invite_failed("Failed to share file. Please try again.".to_string())
                    });
                }
            }
        });
    };

    let copy_link = move |_| {
        let Some(url) = share.with_untracked(|s| s.link_url().map(String::from)) else {
            return;
        };
        spawn_local(async move {
            if dom::copy_text(&url).await {
                set_copied.set(true);
                TimeoutFuture::new(COPY_RESET_MS).await;
                set_copied.set(false);
            }
        });
    };

    let active_tab = Signal::derive(move || share.with(|s| s.active_tab));
    let link_state = Signal::derive(move || share.with(|s| s.link.clone()));
    let invite_state = Signal::derive(move || share.with(|s| s.invite.clone()));

    let tab_class = move |tab: ShareTab| {
        if active_tab.get() == tab {
            format!("{} {}", css::tab, css::tabActive)
        } else {
            css::tab.to_string()
        }
    };

    view! {
        <div class=css::overlay on:click=move |_| on_close.run(())>
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <div class=css::dialogHeader>
                    <div>
                        <h2 class=css::dialogTitle>{format!("Share \"{}\"", file_name)}</h2>
                        <p class=css::dialogSubtitle>"Invite others or create a public link."</p>
                    </div>
                    <button
                        class=css::closeButton
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>

                <div class=css::tabList role="tablist">
                    <button
                        class=move || tab_class(ShareTab::Invite)
                        role="tab"
                        on:click=move |_| select_tab(ShareTab::Invite)
                    >
                        <Icon icon=ic::MAIL />
                        "Invite User"
                    </button>
                    <button
                        class=move || tab_class(ShareTab::Link)
                        role="tab"
                        on:click=move |_| select_tab(ShareTab::Link)
                    >
                        <Icon icon=ic::LINK />
                        "Copy Link"
                    </button>
                </div>

                <Show when=move || active_tab.get() == ShareTab::Invite>
                    <form class=css::tabPanel on:submit=send_invite>
                        {move || match invite_state.get() {
                            InviteState::Sent(recipient) => Some(view! {
                                <div class=css::noticeSuccess role="status">
                                    <Icon icon=ic::CHECK />
                                    {format!("Successfully shared with {}", recipient)}
                                </div>
                            }
                            .into_any()),
                            InviteState::Failed(message) => Some(view! {
                                <div class=css::noticeError role="alert">{message}</div>
                            }
                            .into_any()),
                            _ => None,
                        }}

                        <label class=css::field>
                            <span class=css::fieldLabel>"Email address"</span>
                            <input
                                class=css::fieldInput
                                type="email"
                                required
                                placeholder="Enter email address"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </label>

                        <button
                            class=css::primaryButton
                            type="submit"
                            disabled=move || invite_state.get() == InviteState::Sending
                        >
                            {move || if invite_state.get() == InviteState::Sending {
                                "Sending Invite..."
                            } else {
                                "Send Invite"
                            }}
                        </button>
                    </form>
                </Show>

                <Show when=move || active_tab.get() == ShareTab::Link>
                    <div class=css::tabPanel>
                        <span class=css::fieldLabel>"Public Link"</span>
                        {move || match link_state.get() {
                            LinkState::Generating | LinkState::NotRequested => view! {
                                <div class=css::linkPending>"Generating Link..."</div>
                            }
                            .into_any(),
                            LinkState::Ready(url) => view! {
                                <div class=css::linkRow>
                                    <input class=css::fieldInput readonly prop:value=url />
                                    <button
                                        class=css::copyButton
                                        aria-label="Copy link"
                                        on:click=copy_link
                                    >
                                        {move || {
                                            let icon = if copied.get() { ic::CHECK } else { ic::COPY };
                                            view! { <Icon icon=icon /> }
                                        }}
                                    </button>
                                </div>
                            }
                            .into_any(),
                            LinkState::Failed => view! {
                                <div class=css::noticeError role="alert">
                                    "Failed to generate link."
                                    <button class=css::retryButton on:click=retry_link>
                                        "Retry"
                                    </button>
                                </div>
                            }
                            .into_any(),
                        }}
                        <p class=css::linkHint>"Anyone with this link can view the file."</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
