//! Batch upload form with shared tags.
//!
//! Selection is validated client-side before submission (size cap,
//! accepted media categories); the backend remains the authority. On
//! success the form resets and the new records appear at the top of the
//! grid without a re-fetch; on failure the form stays populated so the
//! user can retry.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::upload;
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/dashboard/upload_form.module.css");

#[component]
pub fn UploadForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (selected, set_selected) = signal(Vec::<web_sys::File>::new());
    let (tags, set_tags) = signal(Vec::<String>::new());
    let (tag_input, set_tag_input) = signal(String::new());
    let (uploading, set_uploading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let on_files_picked = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let mut files = Vec::new();
        if let Some(list) = input.files() {
            for i in 0..list.length() {
                if let Some(file) = list.get(i) {
                    files.push(file);
                }
            }
        }
        set_selected.set(files);
        set_error.set(None);
    };

    let add_tag = move || {
        let tag = tag_input.get_untracked().trim().to_string();
        if tag.is_empty() {
            return;
        }
        set_tags.update(|tags| {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        });
        set_tag_input.set(String::new());
    };

    let on_tag_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            add_tag();
        }
    };

    let remove_tag = move |tag: String| {
        set_tags.update(|tags| tags.retain(|t| *t != tag));
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let files = selected.get_untracked();
        if let Err(e) = upload::validate_selection(&files) {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_uploading.set(true);
        set_error.set(None);
        let batch_tags = tags.get_untracked();
        spawn_local(async move {
            match upload::upload_batch(ctx.listing, ctx.session, files, batch_tags).await {
                Ok(_) => {
                    set_selected.set(Vec::new());
                    set_tags.set(Vec::new());
                    set_tag_input.set(String::new());
                    if let Some(input) = input_ref.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(e) => {
                    set_error.set(Some(format!("Upload failed: {}. Please try again.", e)));
                }
            }
            set_uploading.set(false);
        });
    };

    let has_selection = Signal::derive(move || selected.with(|f| !f.is_empty()));

    view! {
        <form class=css::card on:submit=submit>
            <h2 class=css::cardTitle>
                <Icon icon=ic::UPLOAD />
                "Upload Files"
            </h2>

            {move || error.get().map(|msg| view! {
                <div class=css::errorBox role="alert">{msg}</div>
            })}

            <label class=css::dropzone>
                <input
                    class=css::fileInput
                    type="file"
                    multiple
                    accept="image/*,video/*,audio/*,application/pdf,.csv,.xls,.xlsx"
                    node_ref=input_ref
                    on:change=on_files_picked
                />
                <Show
                    when=move || has_selection.get()
                    fallback=|| view! {
                        <div class=css::dropzoneHint>
                            <Icon icon=ic::UPLOAD />
                            <p>"Click to select files"</p>
                            <p class=css::dropzoneFine>
                                "Images, videos, audio, PDFs, spreadsheets (max 100MB each)"
                            </p>
                        </div>
                    }
                >
                    <ul class=css::selectionList>
                        <For
                            each=move || selected.get()
                            key=|file| format!("{}:{}", file.name(), file.size())
                            children=move |file| {
                                let size = format_size(file.size() as u64);
                                view! {
                                    <li class=css::selectionItem>
                                        <span class=css::selectionName>{file.name()}</span>
                                        <span class=css::selectionSize>{size}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </label>

            <div class=css::tagEntry>
                <input
                    class=css::tagInput
                    type="text"
                    placeholder="Add a tag"
                    prop:value=move || tag_input.get()
                    on:input=move |ev| set_tag_input.set(event_target_value(&ev))
                    on:keydown=on_tag_keydown
                />
                <button
                    class=css::tagAddButton
                    type="button"
                    aria-label="Add tag"
                    on:click=move |_| add_tag()
                >
                    <Icon icon=ic::PLUS />
                </button>
            </div>

            <Show when=move || tags.with(|t| !t.is_empty())>
                <div class=css::tagRow>
                    <For
                        each=move || tags.get()
                        key=|tag| tag.clone()
                        children=move |tag| {
                            let label = tag.clone();
                            view! {
                                <span class=css::tag>
                                    {label}
                                    <button
                                        class=css::tagRemove
                                        type="button"
                                        aria-label="Remove tag"
                                        on:click=move |_| remove_tag(tag.clone())
                                    >
                                        <Icon icon=ic::CLOSE />
                                    </button>
                                </span>
                            }
                        }
                    />
                </div>
            </Show>

            <button
                class=css::submitButton
                type="submit"
                disabled=move || uploading.get() || !has_selection.get()
            >
                {move || if uploading.get() { "Uploading..." } else { "Upload" }}
            </button>
        </form>
    }
}
