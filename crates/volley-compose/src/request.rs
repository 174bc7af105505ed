//! Send-request assembly.
//!
//! A [`DispatchRequest`] is the immutable snapshot built at send time and
//! handed to the dispatch backend. Serialization matches the backend's
//! wire shape: `{ "phoneNumbers": [...], "message": "...", "image": ... }`
//! with `image` as JSON `null` when no attachment is held.

use serde::{Deserialize, Serialize};

use crate::recipients::RecipientSource;

/// Error raised when a send request cannot be assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// Recipients or message missing at send time. The one user-visible
    /// error this system produces.
    #[error("phone numbers and message are both required")]
    MissingFields,
}

/// An immutable snapshot of one send attempt.
///
/// Constructed fresh per attempt by [`assemble`](Self::assemble); never
/// persisted. Its lifetime ends once handed to the dispatch backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRequest {
    /// Recipient identifiers, derived from the entry field at send time.
    pub phone_numbers: Vec<String>,
    /// Message body, exactly as entered.
    pub message: String,
    /// Object URL of the attached image, if one is held.
    pub image: Option<String>,
}

impl DispatchRequest {
    /// Assemble a send request from the current field values.
    ///
    /// Derives the recipient list from `source`, then snapshots it together
    /// with `message` (verbatim, no trimming) and the attachment URL.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::MissingFields`] when the derived recipient
    /// list or the message is empty; no request is built in that case.
    pub fn assemble(
        source: &RecipientSource,
        message: &str,
        image: Option<String>,
    ) -> Result<Self, ComposeError> {
        let phone_numbers = source.recipients();
        if phone_numbers.is_empty() || message.is_empty() {
            return Err(ComposeError::MissingFields);
        }

        Ok(Self {
            phone_numbers,
            message: message.to_owned(),
            image,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn manual(raw: &str) -> RecipientSource {
        let mut source = RecipientSource::default();
        source.edit(raw);
        source
    }

    #[test]
    fn assemble_snapshots_all_fields() {
        let request =
            DispatchRequest::assemble(&manual("111, 222"), "hello", Some("blob:abc".into()))
                .unwrap();
        assert_eq!(request.phone_numbers, vec!["111", "222"]);
        assert_eq!(request.message, "hello");
        assert_eq!(request.image.as_deref(), Some("blob:abc"));
    }

    #[test]
    fn assemble_keeps_message_verbatim() {
        // No trimming or mutation of the body, surrounding whitespace included.
        let request = DispatchRequest::assemble(&manual("111"), "  spaced out \n", None).unwrap();
        assert_eq!(request.message, "  spaced out \n");
    }

    #[test]
    fn empty_recipients_abort_assembly() {
        let err = DispatchRequest::assemble(&manual(""), "hello", None).unwrap_err();
        assert_eq!(err, ComposeError::MissingFields);
    }

    #[test]
    fn delimiter_only_recipients_abort_assembly() {
        // The precondition checks the derived list, so text that parses to
        // nothing aborts even though the raw field is non-empty.
        let err = DispatchRequest::assemble(&manual(" , ,, "), "hello", None).unwrap_err();
        assert_eq!(err, ComposeError::MissingFields);
    }

    #[test]
    fn empty_message_aborts_assembly() {
        let err = DispatchRequest::assemble(&manual("111"), "", None).unwrap_err();
        assert_eq!(err, ComposeError::MissingFields);
    }

    #[test]
    fn serializes_to_backend_wire_shape() {
        let request = DispatchRequest::assemble(&manual("111, 222"), "hi", None).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "phoneNumbers": ["111", "222"],
                "message": "hi",
                "image": null,
            })
        );
    }

    #[test]
    fn serializes_attachment_url_when_present() {
        let request =
            DispatchRequest::assemble(&manual("111"), "hi", Some("blob:xyz".into())).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["image"], "blob:xyz");
    }
}
