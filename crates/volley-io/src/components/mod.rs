//! Dioxus UI components for volley.
//!
//! Provides the recipient entry tabs (manual text and file import), the
//! message textarea, and the attachment picker with inline preview.

mod attachment;
mod message;
mod recipients;

pub use attachment::AttachmentPicker;
pub use message::MessageInput;
pub use recipients::RecipientEntry;
