//! The dispatch backend seam.
//!
//! Actual message delivery (rate limiting, per-recipient tracking,
//! retries, provider integration) is out of scope for this repository and
//! lives behind [`DispatchService`]. The composer hands an assembled
//! [`DispatchRequest`] across this boundary and nothing more; the bundled
//! implementation in `volley-io` only logs the payload to the console.

use crate::request::DispatchRequest;

/// Error reported by a dispatch backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The backend rejected or failed to accept the request.
    #[error("dispatch backend error: {0}")]
    Backend(String),
}

/// A delivery backend that accepts assembled send requests.
///
/// Implementations receive the request snapshot exactly as assembled --
/// recipients derived at send time, message verbatim, attachment URL or
/// none. The composer offers no retry and expects no acknowledgment
/// beyond the returned `Result`.
pub trait DispatchService {
    /// Hand one assembled request to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Backend`] when the backend cannot accept
    /// the request.
    fn dispatch(&self, request: &DispatchRequest) -> Result<(), DispatchError>;
}
