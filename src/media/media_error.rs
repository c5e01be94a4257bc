use crate::domain::Notice;
use crate::media::PickerErrorCode;
use thiserror::Error;

/// Why a picked item (or a whole pick) didn't make it into the complaint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaSelectionError {
    #[error("Failed to select media: {message}")]
    Picker {
        code: PickerErrorCode,
        message: String,
    },
    #[error("Please select only images (JPEG, PNG) or videos (MP4, MOV)")]
    UnsupportedKind { file_name: String, declared: String },
    #[error("Please select files smaller than 10MB")]
    TooLarge { file_name: String, size_bytes: u64 },
    #[error("Could not determine the size of {file_name}")]
    UnknownSize { file_name: String },
}

impl MediaSelectionError {
    pub fn title(&self) -> &'static str {
        match self {
            MediaSelectionError::Picker { .. } => "Error",
            MediaSelectionError::UnsupportedKind { .. } => "Invalid File Type",
            MediaSelectionError::TooLarge { .. } => "File Too Large",
            MediaSelectionError::UnknownSize { .. } => "Unknown File Size",
        }
    }

    pub fn to_notice(&self) -> Notice {
        Notice::new(self.title(), self.to_string())
    }
}
