//! Attachment picker with inline preview.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

use crate::attachment::AttachmentHandle;

/// Props for the [`AttachmentPicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct AttachmentPickerProps {
    /// Object URL of the currently held attachment, if any. Drives the
    /// preview thumbnail.
    preview_url: Option<String>,
    /// Fired with a freshly created handle when a file is selected.
    /// The owner is responsible for releasing the handle it replaces.
    on_select: EventHandler<AttachmentHandle>,
}

/// Image picker button with a thumbnail of the current attachment.
///
/// Any file type is accepted; a non-image preview simply fails to render.
/// Reads are token-guarded so a second selection made before the first
/// read completes wins.
#[component]
pub fn AttachmentPicker(props: AttachmentPickerProps) -> Element {
    let mut read_token = use_signal(|| 0u64);

    let on_select = props.on_select;

    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();

            read_token += 1;
            let my_token = *read_token.peek();

            match file.read_bytes().await {
                Ok(bytes) => {
                    if *read_token.peek() != my_token {
                        return;
                    }
                    match AttachmentHandle::from_bytes(&bytes, &name) {
                        Ok(handle) => on_select.call(handle),
                        Err(e) => {
                            web_sys::console::warn_1(
                                &format!("attachment preview unavailable: {e}").into(),
                            );
                        }
                    }
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("failed to read image: {e}").into());
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    rsx! {
        div { class: "flex items-center gap-3",
            label {
                class: "inline-flex items-center gap-2 px-4 py-2 rounded border border-[var(--border)]
                        bg-[var(--surface)] hover:bg-[var(--surface-active)] cursor-pointer
                        text-[var(--text-heading)] font-medium transition-colors",
                input {
                    r#type: "file",
                    accept: "image/*",
                    class: "hidden",
                    onchange: handle_files,
                }
                Icon { icon: LdUpload, width: 16, height: 16 }
                "Upload Image"
            }

            if let Some(ref url) = props.preview_url {
                img {
                    src: "{url}",
                    alt: "Attached image preview",
                    class: "h-20 w-20 object-cover rounded-md border border-[var(--border)]",
                }
            }
        }
    }
}
