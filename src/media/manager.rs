// src/media/manager.rs

use crate::domain::{Attachment, MediaKind, MAX_ATTACHMENT_BYTES};
use crate::media::{
    MediaPicker, MediaSelectionError, PickedAsset, PickerRequest, PickerResponse,
    LIBRARY_SELECTION_LIMIT,
};
use chrono::Utc;
use std::sync::mpsc::{self, Receiver};

/// The three buttons of the "Add Attachment" prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureChoice {
    Camera,
    Library { selected: Vec<String> },
    Cancel,
}

impl CaptureChoice {
    /// (form value, button label) in display order.
    pub const OPTIONS: [(&'static str, &'static str); 3] = [
        ("camera", "Take Photo"),
        ("library", "Choose from Library"),
        ("cancel", "Cancel"),
    ];
}

/// Ordered attachments of one complaint form.
///
/// Only items that pass the kind and size checks get in, and nothing is
/// ever evicted behind the user's back.
#[derive(Debug, Default)]
pub struct AttachmentManager {
    items: Vec<Attachment>,
}

impl AttachmentManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.items
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Starts the chosen capture source. Cancel answers immediately with
    /// `PickerResponse::Cancelled` so callers only have one path to handle.
    pub fn request_capture(
        &self,
        picker: &dyn MediaPicker,
        choice: CaptureChoice,
    ) -> Receiver<PickerResponse> {
        match choice {
            CaptureChoice::Camera => picker.launch(PickerRequest::Camera),
            CaptureChoice::Library { selected } => picker.launch(PickerRequest::Library {
                selected,
                selection_limit: LIBRARY_SELECTION_LIMIT,
            }),
            CaptureChoice::Cancel => {
                let (tx, rx) = mpsc::channel();
                // Receiver is alive, this cannot fail
                let _ = tx.send(PickerResponse::Cancelled);
                rx
            }
        }
    }

    /// Applies a picker result. Each rejected item yields one error and is
    /// skipped; the rest of the batch is still considered.
    pub fn on_media_selected(&mut self, response: PickerResponse) -> Vec<MediaSelectionError> {
        match response {
            PickerResponse::Cancelled => Vec::new(),
            PickerResponse::Failed { code, message } => {
                tracing::warn!(%code, %message, "media picker failed");
                vec![MediaSelectionError::Picker { code, message }]
            }
            PickerResponse::Picked(assets) => {
                let mut rejected = Vec::new();
                for asset in assets {
                    match Self::admit(asset) {
                        Ok(attachment) => self.items.push(attachment),
                        Err(e) => rejected.push(e),
                    }
                }
                rejected
            }
        }
    }

    /// No-op when `index` is out of range.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    fn admit(asset: PickedAsset) -> Result<Attachment, MediaSelectionError> {
        let file_name = asset
            .file_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("attachment-{}", Utc::now().timestamp_millis()));

        let declared = asset.kind.unwrap_or_default();
        let Some(kind) = MediaKind::from_declared(&declared) else {
            return Err(MediaSelectionError::UnsupportedKind {
                file_name,
                declared,
            });
        };

        let Some(size_bytes) = asset.file_size else {
            return Err(MediaSelectionError::UnknownSize { file_name });
        };
        if size_bytes > MAX_ATTACHMENT_BYTES {
            return Err(MediaSelectionError::TooLarge {
                file_name,
                size_bytes,
            });
        }

        Ok(Attachment {
            source: asset.uri,
            kind,
            size_bytes,
            file_name,
        })
    }
}
