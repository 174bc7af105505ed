use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdSend;
use volley_compose::{ComposeError, DispatchRequest, DispatchService, RecipientSource};
use volley_io::{
    AttachmentHandle, AttachmentPicker, ConsoleDispatcher, MessageInput, RecipientEntry, alert,
    analytics,
};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the composer state via Dioxus signals and wires the recipient,
/// message, and attachment inputs to the send trigger. Send is a
/// stateless action: it snapshots the current fields into a request and
/// hands it to the dispatch backend, leaving the form as-is.
fn app() -> Element {
    // --- Composer state ---
    let mut recipients = use_signal(RecipientSource::default);
    let mut message = use_signal(String::new);
    let mut attachment = use_signal(|| Option::<AttachmentHandle>::None);

    // --- Recipient handlers ---
    let on_edit = move |raw: String| {
        recipients.write().edit(raw);
    };

    let on_import = move |content: String| {
        // Importing overwrites whatever was typed manually.
        recipients.write().import(&content);
        analytics::track_import();
    };

    // --- Attachment ownership ---
    // At most one handle is held; the previous handle's object URL is
    // revoked before the new one is stored.
    let on_attachment = move |handle: AttachmentHandle| {
        let mut slot = attachment.write();
        if let Some(previous) = slot.take() {
            previous.release();
        }
        *slot = Some(handle);
    };

    use_drop(move || {
        if let Some(handle) = attachment.peek().as_ref() {
            handle.release();
        }
    });

    // --- Send trigger ---
    let on_send = move |_| {
        let image = attachment.peek().as_ref().map(|h| h.url().to_owned());
        let source = recipients.peek();
        let body = message.peek();

        match DispatchRequest::assemble(&source, &body, image) {
            Ok(request) => {
                if let Err(e) = ConsoleDispatcher.dispatch(&request) {
                    web_sys::console::warn_1(&format!("dispatch failed: {e}").into());
                } else {
                    analytics::track_send();
                }
            }
            Err(ComposeError::MissingFields) => {
                alert::warn("Please enter phone numbers and message");
            }
        }
    };

    // --- Render state ---
    let raw_recipients = recipients.read().raw().to_owned();
    let preview_url = attachment.read().as_ref().map(|h| h.url().to_owned());

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        div { class: "min-h-screen bg-[var(--bg)] text-[var(--text)] flex flex-col",
            // Header
            header { class: "px-6 py-4 border-b border-[var(--border)]",
                h1 { class: "text-2xl font-bold text-[var(--text-heading)]", "volley" }
                p { class: "text-[var(--muted)] text-sm",
                    "Compose one message and send it to a whole list of numbers"
                }
            }

            // Composer card
            main { class: "flex-1 flex items-start justify-center p-6",
                div { class: "w-full max-w-2xl bg-[var(--surface)] rounded-lg shadow p-6 space-y-4",
                    h2 { class: "text-lg font-semibold text-[var(--text-heading)]",
                        "Send Bulk Messages"
                    }

                    RecipientEntry {
                        value: raw_recipients,
                        on_edit: on_edit,
                        on_import: on_import,
                    }

                    MessageInput {
                        value: message(),
                        on_edit: move |text: String| message.set(text),
                    }

                    AttachmentPicker {
                        preview_url: preview_url,
                        on_select: on_attachment,
                    }

                    button {
                        class: "w-full inline-flex items-center justify-center gap-2 px-4 py-2
                                bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] rounded
                                text-white font-medium transition-colors cursor-pointer",
                        onclick: on_send,
                        Icon { icon: LdSend, width: 16, height: 16 }
                        "Send Bulk Message"
                    }
                }
            }
        }
    }
}
