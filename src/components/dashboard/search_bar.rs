//! Search input feeding the listing query controller.
//!
//! The bound signal updates on every keystroke so the field never lags;
//! the fetch itself goes through the controller's debounce.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let value = Signal::derive(move || ctx.listing.query.with(|q| q.search_text.clone()));

    view! {
        <div class=css::searchBar>
            <span class=css::searchIcon aria-hidden="true">
                <Icon icon=ic::SEARCH />
            </span>
            <input
                class=css::searchInput
                type="search"
                placeholder="Search files by name or tags..."
                prop:value=move || value.get()
                on:input=move |ev| {
                    ctx.listing.set_search_text(ctx.session, event_target_value(&ev))
                }
            />
        </div>
    }
}
