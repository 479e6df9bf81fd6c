//! Single-slot image session.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

use crate::error::SessionError;

/// The image most recently uploaded for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// Base64-encoded image bytes.
    pub payload: String,
    pub mime_type: String,
    pub captured_at: DateTime<Utc>,
}

/// Process-wide slot holding at most one [`StoredImage`].
///
/// Not keyed by caller: concurrent uploads overwrite each other and the last
/// `store` wins. Records are swapped as a whole, so a reader never sees fields
/// from two different uploads.
#[derive(Debug, Default)]
pub struct ImageSession {
    slot: RwLock<Option<Arc<StoredImage>>>,
}

impl ImageSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current image with `bytes`.
    pub fn store(&self, bytes: &[u8], mime_type: impl Into<String>) -> Arc<StoredImage> {
        let image = Arc::new(StoredImage {
            payload: STANDARD.encode(bytes),
            mime_type: mime_type.into(),
            captured_at: Utc::now(),
        });
        debug!(mime_type = %image.mime_type, size = bytes.len(), "Stored session image");
        *self.slot.write() = Some(image.clone());
        image
    }

    /// Current image, or [`SessionError::Empty`] if nothing was stored.
    pub fn fetch(&self) -> Result<Arc<StoredImage>, SessionError> {
        self.slot.read().clone().ok_or(SessionError::Empty)
    }

    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.read().is_none()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
