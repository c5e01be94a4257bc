mod local;
mod manager;
mod media_error;
mod picker;

pub use local::LocalMediaPicker;
pub use manager::{AttachmentManager, CaptureChoice};
pub use media_error::MediaSelectionError;
pub use picker::{
    MediaPicker, PickedAsset, PickerErrorCode, PickerRequest, PickerResponse,
    LIBRARY_SELECTION_LIMIT,
};
