//! Recipient entry component with manual and file-import tabs.
//!
//! Both tabs write to the same underlying field: manual edits flow up
//! verbatim through `on_edit`, and a completed file read flows up through
//! `on_import` as the file's decoded text, which the owner normalizes
//! into the shared field (overwriting whatever was typed manually).

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdFileSpreadsheet;

/// The two entry modes, presented as alternative tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryMode {
    Manual,
    Import,
}

impl EntryMode {
    const ALL: [Self; 2] = [Self::Manual, Self::Import];

    const fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual Entry",
            Self::Import => "Import CSV",
        }
    }
}

/// Props for the [`RecipientEntry`] component.
#[derive(Props, Clone, PartialEq)]
pub struct RecipientEntryProps {
    /// Current shared field text. Manual edits and imports both land here,
    /// so switching tabs never loses the latest value.
    value: String,
    /// Fired on each manual edit with the verbatim field text.
    on_edit: EventHandler<String>,
    /// Fired when a file read completes, with the file's decoded text.
    on_import: EventHandler<String>,
}

/// Tabbed recipient input: a comma-separated text field or a delimited
/// file import (picker button or drag-and-drop).
///
/// File reads are asynchronous and guarded by a monotonic token: when a
/// second file is selected before the first read completes, only the
/// newest read publishes its result.
#[component]
pub fn RecipientEntry(props: RecipientEntryProps) -> Element {
    let mut mode = use_signal(|| EntryMode::Manual);
    let mut dragging = use_signal(|| false);
    let mut imported = use_signal(|| Option::<String>::None);
    let mut read_token = use_signal(|| 0u64);

    let on_import = props.on_import;

    // Read and forward the first file from a list. Shared by the
    // file-picker (`handle_files`) and drag-and-drop (`handle_drop`)
    // paths.
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();

            // Supersede any in-flight read; completions from older
            // selections must not touch the shared field.
            read_token += 1;
            let my_token = *read_token.peek();

            match file.read_bytes().await {
                Ok(bytes) => {
                    if *read_token.peek() != my_token {
                        return;
                    }
                    // Lossy decode: binary files degrade to garbage
                    // tokens instead of erroring.
                    let text = String::from_utf8_lossy(&bytes).into_owned();
                    imported.set(Some(name));
                    on_import.call(text);
                }
                Err(e) => {
                    // Unreadable files are absorbed without a user-facing
                    // error; the field keeps its previous value.
                    web_sys::console::warn_1(&format!("recipient import failed: {e}").into());
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let drop_class = if dragging() {
        "border-[var(--border-accent)] bg-[var(--surface-active)]"
    } else {
        "border-[var(--border-muted)] bg-[var(--surface)]"
    };

    rsx! {
        div { class: "space-y-3",
            // Tab list
            div {
                class: "grid grid-cols-2 gap-1 p-1 rounded-lg bg-[var(--surface-inset)]",
                role: "tablist",

                for tab in EntryMode::ALL {
                    {render_tab(tab, mode() == tab, move |selected| mode.set(selected))}
                }
            }

            if mode() == EntryMode::Manual {
                input {
                    r#type: "text",
                    value: "{props.value}",
                    placeholder: "Enter phone numbers (comma-separated)",
                    aria_label: "Recipient phone numbers",
                    class: "w-full px-3 py-2 rounded border border-[var(--border)] bg-[var(--surface)]
                            text-[var(--text)] placeholder-[var(--text-placeholder)]",
                    oninput: move |e| props.on_edit.call(e.value()),
                }
            } else {
                div {
                    class: "border-2 border-dashed rounded-lg p-6 text-center transition-colors {drop_class}",
                    ondragover: move |evt| {
                        evt.prevent_default();
                        dragging.set(true);
                    },
                    ondragleave: move |_| {
                        dragging.set(false);
                    },
                    ondrop: handle_drop,

                    if let Some(ref name) = imported() {
                        p { class: "text-[var(--text-success)] mb-2",
                            "Loaded: {name}"
                        }
                    }

                    p { class: "text-[var(--text-secondary)] mb-3",
                        "Drop a recipient file here or "
                    }

                    label {
                        class: "inline-flex items-center gap-2 px-4 py-2 bg-[var(--btn-primary)]
                                hover:bg-[var(--btn-primary-hover)] rounded cursor-pointer text-white
                                font-medium transition-colors",
                        input {
                            r#type: "file",
                            accept: ".csv,.txt",
                            class: "hidden",
                            onchange: handle_files,
                        }
                        Icon { icon: LdFileSpreadsheet, width: 16, height: 16 }
                        "Import CSV"
                    }

                    p { class: "text-[var(--muted)] text-sm mt-2",
                        "Numbers separated by commas or newlines"
                    }
                }
            }
        }
    }
}

/// Render a single tab button.
fn render_tab(
    tab: EntryMode,
    is_selected: bool,
    mut on_select: impl FnMut(EntryMode) + 'static,
) -> Element {
    let style = if is_selected {
        "bg-[var(--surface-active)] text-[var(--text-heading)]"
    } else {
        "text-[var(--text-secondary)] hover:text-[var(--text-heading)]"
    };

    rsx! {
        button {
            r#type: "button",
            class: "px-4 py-2 rounded-md text-sm font-medium transition-colors cursor-pointer {style}",
            role: "tab",
            "aria-selected": "{is_selected}",
            onclick: move |_| on_select(tab),
            "{tab.label()}"
        }
    }
}
