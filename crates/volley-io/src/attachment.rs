//! Attachment preview handles backed by Blob object URLs.
//!
//! Wraps a selected file's bytes in a `Blob` and generates an object URL
//! so the image can be previewed via `<img src>` without uploading it
//! anywhere. The composer holds at most one handle at a time and must
//! call [`AttachmentHandle::release`] before replacing it or on teardown,
//! or the browser keeps the underlying Blob alive.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// MIME types by filename extension, for the Blob's `type` so the
/// browser knows how to render the preview.
const IMAGE_MIME_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("avif", "image/avif"),
];

/// Errors that can occur when creating an attachment preview.
#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for AttachmentError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Guess a MIME type from a filename's extension.
///
/// Unknown or missing extensions fall back to `application/octet-stream`:
/// any file is accepted, and a non-image preview simply fails to render
/// rather than erroring.
fn mime_for_filename(name: &str) -> &'static str {
    name.rsplit_once('.')
        .and_then(|(_, ext)| {
            IMAGE_MIME_TYPES
                .iter()
                .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
        })
        .map_or("application/octet-stream", |(_, mime)| mime)
}

/// A browser-local previewable reference to one attached file.
///
/// Owns an object URL created from the file's bytes. The URL stays valid
/// until [`release`](Self::release) is called (or the page unloads); it
/// is never uploaded anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentHandle {
    url: String,
    filename: String,
}

impl AttachmentHandle {
    /// Create a previewable handle from raw file bytes.
    ///
    /// Builds a `Blob` typed by the filename's extension and generates an
    /// object URL for it.
    ///
    /// # Errors
    ///
    /// Returns [`AttachmentError::JsError`] if Blob or URL creation fails.
    pub fn from_bytes(bytes: &[u8], filename: &str) -> Result<Self, AttachmentError> {
        let uint8_array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&uint8_array);

        let opts = BlobPropertyBag::new();
        opts.set_type(mime_for_filename(filename));
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        Ok(Self {
            url,
            filename: filename.to_owned(),
        })
    }

    /// The object URL, usable as an `<img src>` and as the request's
    /// `image` field.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The name of the file this handle was created from.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Revoke the object URL.
    ///
    /// Best-effort: failures are silently ignored since the URL may have
    /// already been revoked.
    pub fn release(&self) {
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_to_image_types() {
        assert_eq!(mime_for_filename("photo.png"), "image/png");
        assert_eq!(mime_for_filename("photo.JPG"), "image/jpeg");
        assert_eq!(mime_for_filename("a.b.webp"), "image/webp");
    }

    #[test]
    fn unknown_or_missing_extension_falls_back() {
        assert_eq!(mime_for_filename("notes.csv"), "application/octet-stream");
        assert_eq!(mime_for_filename("noextension"), "application/octet-stream");
        assert_eq!(mime_for_filename(""), "application/octet-stream");
    }
}
