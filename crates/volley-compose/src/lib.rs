//! volley-compose: Pure bulk-message composition logic (sans-IO).
//!
//! Collects recipient phone numbers (typed manually or imported from a
//! delimited file), a message body, and an optional attachment reference,
//! and assembles them into a [`DispatchRequest`] for the delivery backend.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! strings and returns structured data. All browser interaction (file
//! reads, object URLs, the console dispatch stub) lives in `volley-io`.

pub mod dispatch;
pub mod recipients;
pub mod request;

pub use dispatch::{DispatchError, DispatchService};
pub use recipients::{Provenance, RecipientSource};
pub use request::{ComposeError, DispatchRequest};
