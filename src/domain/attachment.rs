// src/domain/attachment.rs

use mime::Mime;
use std::fmt;

/// 10 MiB
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Media types a complaint may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Jpeg,
    /// Non-standard alias some Android pickers report.
    Jpg,
    Png,
    Mp4,
    QuickTime,
}

impl MediaKind {
    pub const ALL: [MediaKind; 5] = [
        MediaKind::Jpeg,
        MediaKind::Png,
        MediaKind::Jpg,
        MediaKind::Mp4,
        MediaKind::QuickTime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Jpeg => "image/jpeg",
            MediaKind::Jpg => "image/jpg",
            MediaKind::Png => "image/png",
            MediaKind::Mp4 => "video/mp4",
            MediaKind::QuickTime => "video/quicktime",
        }
    }

    /// Parses a declared content type. Parameters (`; codecs=...`) and
    /// letter case are ignored; anything outside the allowed set is `None`.
    pub fn from_declared(declared: &str) -> Option<Self> {
        let parsed: Mime = declared.trim().parse().ok()?;
        let essence = parsed.essence_str().to_ascii_lowercase();
        MediaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == essence)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A media item accepted into a complaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Opaque handle to the local media (a `file://` URL for local pickers).
    pub source: String,
    pub kind: MediaKind,
    pub size_bytes: u64,
    pub file_name: String,
}
