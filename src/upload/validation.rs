use crate::domain::SelectedFile;
use crate::error::{RejectionReason, ValidationError};

/// Largest accepted image, 5 MiB.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

/// How the file reached the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    Picker,
    Drop,
}

impl FileSource {
    /// Message shown to the user when a file from this source is refused.
    pub fn rejection_message(self) -> &'static str {
        match self {
            FileSource::Picker => "Invalid file type or size. Only PNG/JPEG under 5MB is allowed.",
            FileSource::Drop => "Invalid file. Only PNG/JPEG under 5MB is allowed.",
        }
    }
}

/// Accepts a PNG or JPEG of at most [`MAX_IMAGE_BYTES`]; the same rule for
/// every source.
pub fn validate_selection(
    origin: FileSource,
    file: Option<SelectedFile>,
) -> Result<SelectedFile, ValidationError> {
    let reject = |reason| ValidationError { origin, reason };

    let file = file.ok_or(reject(RejectionReason::NoFile))?;
    if !ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str()) {
        return Err(reject(RejectionReason::UnsupportedType));
    }
    if file.size() > MAX_IMAGE_BYTES {
        return Err(reject(RejectionReason::TooLarge { size: file.size() }));
    }
    Ok(file)
}
