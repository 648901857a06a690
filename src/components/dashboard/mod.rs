//! Protected dashboard: upload, search, and the file grid.
//!
//! - [`DashboardPage`] - Page layout, welcome header, logout
//! - [`SearchBar`] / [`Toolbar`] - Listing query controls
//! - [`FileGrid`] / `FileCard` - The committed collection
//! - [`UploadForm`] - Batch upload with tags
//! - `ShareDialog` - Per-file share workflow

mod file_card;
mod file_grid;
mod search_bar;
mod share_dialog;
mod toolbar;
mod upload_form;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::APP_NAME;

use file_grid::FileGrid;
use search_bar::SearchBar;
use toolbar::Toolbar;
use upload_form::UploadForm;

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

/// Dashboard page shown behind the auth guard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Initial load; reads no tracked signals, so this runs once per mount.
    Effect::new(move |_| {
        ctx.listing.refresh(ctx.session);
    });

    let welcome = move || {
        ctx.session
            .user()
            .map(|u| format!("Welcome back, {}!", u.name))
            .unwrap_or_default()
    };

    view! {
        <div class=css::page>
            <header class=css::header>
                <span class=css::brand>{APP_NAME}</span>
                <div class=css::headerRight>
                    <span class=css::userName>{move || ctx.session.display_name()}</span>
                    <button
                        class=css::logoutButton
                        on:click=move |_| ctx.session.logout()
                    >
                        "Sign out"
                    </button>
                </div>
            </header>

            <main class=css::main>
                <div class=css::intro>
                    <h1 class=css::introTitle>{welcome}</h1>
                    <p class=css::introSubtitle>
                        "Upload, organize, and search your media files"
                    </p>
                </div>

                <div class=css::columns>
                    <aside class=css::uploadColumn>
                        <UploadForm />
                    </aside>

                    <section class=css::listingColumn>
                        <SearchBar />
                        <Toolbar />
                        <FileGrid />
                    </section>
                </div>
            </main>
        </div>
    }
}
