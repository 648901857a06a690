//! Public shared-file viewer.
//!
//! Resolves a share token against the backend. A 401 means the link
//! requires a signed-in viewer: redirect to login carrying this page as
//! the return path. 403/404 mean the link is dead or not meant for this
//! account, which is a terminal message, not a login problem.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::api;
use crate::core::error::ApiError;
use crate::models::{AppRoute, FileRecord};
use crate::utils::dom;
use crate::utils::format::{format_date, format_size};

stylance::import_crate_style!(css, "src/components/shared/shared.module.css");

#[component]
pub fn SharedFilePage(token: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let session = ctx.session;
    let share_token = StoredValue::new(token);

    let file = LocalResource::new(move || {
        let token = share_token.get_value();
        let auth = session.token();
        async move { api::fetch_shared_file(&token, auth.as_deref()).await }
    });

    // Unauthorized: sign in and come back to this link.
    Effect::new(move |_| {
        if let Some(Err(ApiError::Unauthorized)) = file.get() {
            AppRoute::Shared {
                token: share_token.get_value(),
            }
            .login_with_return()
            .replace();
        }
    });

    view! {
        <div class=css::page>
            <Suspense fallback=move || view! {
                <div class=css::loading>
                    <span class=css::spinner aria-label="Loading shared file"></span>
                </div>
            }>
                {move || file.get().map(|result| match result {
                    Ok(record) => view! { <SharedFileCard record=record /> }.into_any(),
                    Err(ApiError::Unauthorized) => ().into_any(),
                    Err(e) => {
                        let message = if e.is_access_denied() {
                            "Invalid link or you do not have permission to view this file."
                                .to_string()
                        } else {
                            e.to_string()
                        };
                        view! {
                            <div class=css::deniedCard>
                                <h2 class=css::deniedTitle>"Error"</h2>
                                <p class=css::deniedMessage>{message}</p>
                                <button
                                    class=css::backLink
                                    on:click=|_| AppRoute::Dashboard.push()
                                >
                                    "Go to Dashboard"
                                </button>
                            </div>
                        }
                        .into_any()
                    }
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn SharedFileCard(record: FileRecord) -> impl IntoView {
    let url = StoredValue::new(record.url.clone());
    let date = format_date(&record.created_at);
    let size = format_size(record.size_bytes);

    view! {
        <div class=css::fileCard>
            <div class=css::fileHeader>
                <div>
                    <h1 class=css::fileName>{record.name.clone()}</h1>
                    <p class=css::fileMeta>{format!("Shared File \u{2022} {} \u{2022} {}", date, size)}</p>
                </div>
                <button
                    class=css::downloadButton
                    on:click=move |_| dom::open_in_new_tab(&url.get_value())
                >
                    <Icon icon=ic::DOWNLOAD />
                    "Download"
                </button>
            </div>

            <div class=css::preview>
                <Icon icon=ic::FILE />
                <p class=css::previewHint>
                    "Use the download button to view this file."
                </p>
            </div>

            <p class=css::footer>"Shared via mediahub secure link"</p>
        </div>
    }
}
