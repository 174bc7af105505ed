//! Message body textarea.

use dioxus::prelude::*;

/// Props for the [`MessageInput`] component.
#[derive(Props, Clone, PartialEq)]
pub struct MessageInputProps {
    /// Current message body.
    value: String,
    /// Fired on each edit with the verbatim textarea content.
    on_edit: EventHandler<String>,
}

/// Free-text message input. No length constraint, no side effects; the
/// text is stored exactly as typed.
#[component]
pub fn MessageInput(props: MessageInputProps) -> Element {
    rsx! {
        textarea {
            value: "{props.value}",
            placeholder: "Enter your message",
            aria_label: "Message",
            class: "w-full min-h-[120px] px-3 py-2 rounded border border-[var(--border)]
                    bg-[var(--surface)] text-[var(--text)] placeholder-[var(--text-placeholder)]
                    resize-y",
            oninput: move |e| props.on_edit.call(e.value()),
        }
    }
}
