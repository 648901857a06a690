//! Sort and filter controls.
//!
//! Both selects are discrete choices, so they fetch immediately through
//! the listing controller; Clear Filters resets the whole query tuple with
//! exactly one fetch.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{SortKey, TypeFilter};

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let sort_key = Signal::derive(move || ctx.listing.query.with(|q| q.sort_key));
    let type_filter = Signal::derive(move || ctx.listing.query.with(|q| q.type_filter));

    view! {
        <div class=css::toolbar>
            <select
                class=css::toolbarSelect
                aria-label="Sort by"
                on:change=move |ev| {
                    ctx.listing
                        .set_sort(ctx.session, SortKey::from_param(&event_target_value(&ev)))
                }
            >
                {SortKey::ALL
                    .iter()
                    .map(|key| {
                        let key = *key;
                        view! {
                            <option
                                value=key.as_param()
                                selected=move || sort_key.get() == key
                            >
                                {key.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <select
                class=css::toolbarSelect
                aria-label="Filter by type"
                on:change=move |ev| {
                    ctx.listing
                        .set_type_filter(
                            ctx.session,
                            TypeFilter::from_param(&event_target_value(&ev)),
                        )
                }
            >
                {TypeFilter::ALL_VARIANTS
                    .iter()
                    .map(|filter| {
                        let filter = *filter;
                        view! {
                            <option
                                value=filter.as_param()
                                selected=move || type_filter.get() == filter
                            >
                                {filter.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <button
                class=css::clearButton
                on:click=move |_| ctx.listing.clear_filters(ctx.session)
            >
                "Clear Filters"
            </button>
        </div>
    }
}
