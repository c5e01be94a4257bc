use std::fmt;
use std::sync::mpsc::Receiver;

/// Library picks are capped at this many items.
pub const LIBRARY_SELECTION_LIMIT: usize = 5;

/// What the user asked the picker for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerRequest {
    Camera,
    Library {
        selected: Vec<String>,
        selection_limit: usize,
    },
}

/// One item as reported by the picker. Every field except the locator is
/// whatever the source claims, unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedAsset {
    pub uri: String,
    pub kind: Option<String>,
    pub file_size: Option<u64>,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerErrorCode {
    CameraUnavailable,
    Permission,
    Others,
}

impl PickerErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            PickerErrorCode::CameraUnavailable => "camera_unavailable",
            PickerErrorCode::Permission => "permission",
            PickerErrorCode::Others => "others",
        }
    }
}

impl fmt::Display for PickerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single terminal value a picker delivers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerResponse {
    Cancelled,
    Failed {
        code: PickerErrorCode,
        message: String,
    },
    Picked(Vec<PickedAsset>),
}

/// Camera / media-library collaborator.
///
/// `launch` must not block the caller; the answer arrives on the returned
/// channel exactly once.
pub trait MediaPicker: Send + Sync {
    fn launch(&self, request: PickerRequest) -> Receiver<PickerResponse>;

    /// File names the library view can offer for selection.
    fn library_items(&self) -> Vec<String> {
        Vec::new()
    }
}
