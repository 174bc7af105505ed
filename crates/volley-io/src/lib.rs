//! volley-io: Browser I/O and Dioxus component library.
//!
//! Handles attachment object-URL lifecycle, the console-logging dispatch
//! backend, the blocking alert, analytics events, and provides the form
//! components for the volley web application.

pub mod alert;
pub mod analytics;
pub mod attachment;
pub mod components;
pub mod dispatch;

pub use attachment::AttachmentHandle;
pub use components::{AttachmentPicker, MessageInput, RecipientEntry};
pub use dispatch::ConsoleDispatcher;
