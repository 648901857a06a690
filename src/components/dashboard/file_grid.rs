//! File grid: loading skeleton, empty state, or the committed collection.

use leptos::prelude::*;

use crate::app::AppContext;

use super::file_card::FileCard;

stylance::import_crate_style!(css, "src/components/dashboard/file_grid.module.css");

#[component]
pub fn FileGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let files = ctx.listing.files;
    let loading = ctx.listing.loading;
    let error = ctx.listing.error;

    let is_empty = Signal::derive(move || files.with(|f| f.is_empty()));

    view! {
        {move || error.get().map(|msg| view! {
            <div class=css::fetchError role="alert">{msg}</div>
        })}

        <Show when=move || loading.get() && is_empty.get()>
            <div class=css::grid aria-hidden="true">
                {(0..6)
                    .map(|_| view! {
                        <div class=css::skeletonCard>
                            <div class=css::skeletonThumb></div>
                            <div class=css::skeletonLine></div>
                            <div class=css::skeletonLineShort></div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </Show>

        <Show when=move || !loading.get() && is_empty.get() && error.with(|e| e.is_none())>
            <div class=css::emptyState>
                <h3 class=css::emptyTitle>"No files found"</h3>
                <p class=css::emptyHint>"Upload your first file to get started"</p>
            </div>
        </Show>

        <div class=css::grid>
            <For
                each=move || files.get()
                key=|file| file.id.clone()
                children=move |file| view! { <FileCard file=file /> }
            />
        </div>
    }
}
