//! Single file card: preview, metadata, and the action menu.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{FileRecord, MediaKind};
use crate::utils::dom;
use crate::utils::format::format_size;

use super::share_dialog::ShareDialog;

stylance::import_crate_style!(css, "src/components/dashboard/file_grid.module.css");

/// Icon for a file based on its media category.
fn kind_icon(kind: MediaKind) -> IconData {
    match kind {
        MediaKind::Image => ic::FILE_IMAGE,
        MediaKind::Video => ic::FILE_VIDEO,
        MediaKind::Audio => ic::FILE_AUDIO,
        MediaKind::Pdf => ic::FILE_PDF,
        MediaKind::Spreadsheet => ic::FILE_SPREADSHEET,
        MediaKind::Other => ic::FILE,
    }
}

#[component]
pub fn FileCard(file: FileRecord) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (busy, set_busy) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let (share_open, set_share_open) = signal(false);
    let (action_error, set_action_error) = signal(Option::<String>::None);

    let id = StoredValue::new(file.id.clone());
    let url = StoredValue::new(file.url.clone());
    let name = StoredValue::new(file.name.clone());

    // The counter is edited in place by the listing controller, so derive
    // it from the collection rather than the snapshot captured at render.
    let initial_count = file.view_count;
    let files = ctx.listing.files;
    let view_count = Signal::derive(move || {
        files.with(|records| {
            records
                .iter()
                .find(|f| f.id == id.get_value())
                .map(|f| f.view_count)
                .unwrap_or(initial_count)
        })
    });

    let handle_view = move |_| {
        set_menu_open.set(false);
        set_action_error.set(None);
        spawn_local(async move {
            match ctx.listing.bump_view(ctx.session, &id.get_value()).await {
                Ok(()) => dom::open_in_new_tab(&url.get_value()),
                Err(e) => set_action_error.set(Some(e.to_string())),
            }
        });
    };

    let handle_download = move |_| {
        set_menu_open.set(false);
        dom::open_in_new_tab(&url.get_value());
    };

    let handle_share = move |_| {
        set_menu_open.set(false);
        set_share_open.set(true);
    };

    let handle_delete = move |_| {
        set_menu_open.set(false);
        if !dom::confirm("Are you sure you want to delete this file?") {
            return;
        }
        set_busy.set(true);
        set_action_error.set(None);
        spawn_local(async move {
            if let Err(e) = ctx.listing.delete(ctx.session, &id.get_value()).await {
                set_action_error.set(Some(format!("Delete failed: {}", e)));
            }
            set_busy.set(false);
        });
    };

    let icon = kind_icon(file.kind());
    let size_label = format_size(file.size_bytes);
    let tag_overflow = file.tags.len().saturating_sub(3);
    let visible_tags: Vec<String> = file.tags.iter().take(3).cloned().collect();

    view! {
        <div class=css::card>
            <div class=css::thumb>
                <span class=css::thumbIcon aria-hidden="true">
                    <Icon icon=icon />
                </span>
                <span class=css::thumbName>{file.name.clone()}</span>
            </div>

            <div class=css::cardBody>
                <div class=css::cardHeader>
                    <h3 class=css::cardTitle title=name.get_value()>{file.name.clone()}</h3>
                    <div class=css::menuWrapper>
                        <button
                            class=css::menuButton
                            aria-label="File actions"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <Icon icon=ic::MORE />
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class=css::menu role="menu">
                                <button class=css::menuItem on:click=handle_view>
                                    <Icon icon=ic::EYE />
                                    "View"
                                </button>
                                <button class=css::menuItem on:click=handle_share>
                                    <Icon icon=ic::SHARE />
                                    "Share"
                                </button>
                                <button class=css::menuItem on:click=handle_download>
                                    <Icon icon=ic::DOWNLOAD />
                                    "Download"
                                </button>
                                <button
                                    class=css::menuItem
                                    disabled=move || busy.get()
                                    on:click=handle_delete
                                >
                                    <Icon icon=ic::TRASH />
                                    "Delete"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>

                {move || action_error.get().map(|msg| view! {
                    <p class=css::cardError role="alert">{msg}</p>
                })}

                <div class=css::cardMeta>
                    <span>{size_label}</span>
                    <span class=css::viewCount>
                        <Icon icon=ic::EYE />
                        {move || view_count.get()}
                    </span>
                </div>

                <Show when={
                    let has_tags = !visible_tags.is_empty();
                    move || has_tags
                }>
                    <div class=css::tagRow>
                        {visible_tags
                            .iter()
                            .map(|tag| view! { <span class=css::tag>{tag.clone()}</span> })
                            .collect_view()}
                        {(tag_overflow > 0).then(|| view! {
                            <span class=css::tagOverflow>{format!("+{}", tag_overflow)}</span>
                        })}
                    </div>
                </Show>
            </div>

            <Show when=move || share_open.get()>
                <ShareDialog
                    file_id=id.get_value()
                    file_name=name.get_value()
                    on_close=Callback::new(move |_| set_share_open.set(false))
                />
            </Show>
        </div>
    }
}
