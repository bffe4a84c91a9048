//! Pending-image staging map.
//!
//! Every image inserted into the composer gets a stable local identity
//! before anything is sent to the server: a `data:` URL embedding the
//! encoded payload, made unique per insertion by a trailing fragment.
//! The map owns the original bytes until the resolver uploads them (or
//! the composition session is cancelled).

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use mime::Mime;
use studymate_shared::constants::MAX_INLINE_IMAGE_SIZE;

use crate::error::ComposeError;

/// One staged payload: the original file identity plus its bytes.
#[derive(Debug, Clone)]
pub struct StagedImage {
    pub file_name: String,
    pub mime: Mime,
    pub bytes: Vec<u8>,
}

/// Temporary-reference → payload map for one composition session.
#[derive(Debug, Default)]
pub struct PendingImages {
    entries: HashMap<String, StagedImage>,
    /// Per-insertion counter; makes references unique even when the
    /// same bytes are inserted twice.
    next_seq: u64,
}

impl PendingImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and stage an image payload.
    ///
    /// On success the returned temporary reference (a `data:` URL) is
    /// recorded in the map and must be inserted into the document by
    /// the caller.  On violation nothing is staged.
    pub fn stage(&mut self, file_name: &str, bytes: Vec<u8>) -> Result<String, ComposeError> {
        let mime = mime_guess::from_path(file_name).first().ok_or_else(|| {
            ComposeError::UnsupportedFile {
                file_name: file_name.to_string(),
            }
        })?;

        if mime.type_() != mime::IMAGE {
            return Err(ComposeError::UnsupportedFile {
                file_name: file_name.to_string(),
            });
        }

        if bytes.len() > MAX_INLINE_IMAGE_SIZE {
            return Err(ComposeError::FileTooLarge {
                file_name: file_name.to_string(),
                size: bytes.len(),
                max: MAX_INLINE_IMAGE_SIZE,
            });
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        let reference = format!("data:{};base64,{}#p{}", mime, BASE64.encode(&bytes), seq);

        tracing::debug!(
            file_name = %file_name,
            size = bytes.len(),
            seq,
            "staged inline image"
        );

        self.entries.insert(
            reference.clone(),
            StagedImage {
                file_name: file_name.to_string(),
                mime,
                bytes,
            },
        );

        Ok(reference)
    }

    pub fn get(&self, reference: &str) -> Option<&StagedImage> {
        self.entries.get(reference)
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.entries.contains_key(reference)
    }

    /// Remove a staged entry after its upload succeeded.  Removing an
    /// absent reference is a no-op.
    pub fn release(&mut self, reference: &str) {
        self.entries.remove(reference);
    }

    /// Drop every staged entry (cancel path).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
