// src/media/local.rs

use crate::media::{MediaPicker, PickedAsset, PickerErrorCode, PickerRequest, PickerResponse};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::SystemTime;
use url::Url;

/// Picker backed by two directories on the device:
/// the camera's capture folder and the media library.
#[derive(Debug, Clone, Default)]
pub struct LocalMediaPicker {
    camera_dir: Option<PathBuf>,
    library_dir: Option<PathBuf>,
}

impl LocalMediaPicker {
    pub fn new(camera_dir: Option<PathBuf>, library_dir: Option<PathBuf>) -> Self {
        Self {
            camera_dir,
            library_dir,
        }
    }

    fn pick(&self, request: PickerRequest) -> PickerResponse {
        match request {
            PickerRequest::Camera => self.latest_capture(),
            PickerRequest::Library {
                selected,
                selection_limit,
            } => self.pick_from_library(&selected, selection_limit),
        }
    }

    /// "Taking a photo" hands back the newest file the camera wrote.
    fn latest_capture(&self) -> PickerResponse {
        let Some(dir) = &self.camera_dir else {
            return failed(
                PickerErrorCode::CameraUnavailable,
                "Camera not available on this device",
            );
        };

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => return failed(PickerErrorCode::Permission, &e.to_string()),
        };

        let newest = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let meta = entry.metadata().ok()?;
                if !meta.is_file() {
                    return None;
                }
                let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                Some((modified, entry.path()))
            })
            .max_by_key(|(modified, _)| *modified);

        match newest {
            Some((_, path)) => match describe(&path) {
                Ok(asset) => PickerResponse::Picked(vec![asset]),
                Err(message) => failed(PickerErrorCode::Others, &message),
            },
            None => failed(PickerErrorCode::Others, "No capture found"),
        }
    }

    fn pick_from_library(&self, selected: &[String], limit: usize) -> PickerResponse {
        let Some(dir) = &self.library_dir else {
            return failed(PickerErrorCode::Others, "Media library not available");
        };

        if selected.is_empty() {
            return PickerResponse::Cancelled;
        }
        if selected.len() > limit {
            return failed(
                PickerErrorCode::Others,
                &format!("You can select up to {limit} items"),
            );
        }

        let mut assets = Vec::with_capacity(selected.len());
        for name in selected {
            if !is_plain_file_name(name) {
                return failed(PickerErrorCode::Others, &format!("Invalid selection {name:?}"));
            }
            match describe(&dir.join(name)) {
                Ok(asset) => assets.push(asset),
                Err(message) => return failed(PickerErrorCode::Others, &message),
            }
        }

        PickerResponse::Picked(assets)
    }
}

impl MediaPicker for LocalMediaPicker {
    fn launch(&self, request: PickerRequest) -> Receiver<PickerResponse> {
        let (tx, rx) = mpsc::channel();
        let picker = self.clone();

        std::thread::spawn(move || {
            let response = picker.pick(request);
            // Caller may have gone away; nothing to do then.
            let _ = tx.send(response);
        });

        rx
    }

    fn library_items(&self) -> Vec<String> {
        let Some(dir) = &self.library_dir else {
            return Vec::new();
        };

        let mut names: Vec<String> = match fs::read_dir(dir) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
                .filter_map(|e| e.file_name().into_string().ok())
                .collect(),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot list media library");
                Vec::new()
            }
        };
        names.sort();
        names
    }
}

fn failed(code: PickerErrorCode, message: &str) -> PickerResponse {
    PickerResponse::Failed {
        code,
        message: message.to_string(),
    }
}

/// No separators, no `..`, nothing hidden.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains('/')
        && !name.contains('\\')
}

fn describe(path: &Path) -> Result<PickedAsset, String> {
    let meta = fs::metadata(path).map_err(|e| format!("{}: {e}", path.display()))?;
    if !meta.is_file() {
        return Err(format!("{} is not a file", path.display()));
    }

    let absolute = path
        .canonicalize()
        .map_err(|e| format!("{}: {e}", path.display()))?;
    let uri = Url::from_file_path(&absolute)
        .map_err(|_| format!("{} has no file URL", absolute.display()))?
        .to_string();

    Ok(PickedAsset {
        uri,
        kind: Some(kind_for_extension(path).to_string()),
        file_size: Some(meta.len()),
        file_name: path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string),
    })
}

fn kind_for_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        _ => "application/octet-stream",
    }
}
