use crate::api::{UploadFile, ValidationError};
use std::path::Path;

/// Upload ceiling for spreadsheet imports (10 MiB).
pub const MAX_IMPORT_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted extensions and the content type sent for each.
const IMPORT_TYPES: [(&str, &str); 3] = [
    ("csv", "text/csv"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("xls", "application/vnd.ms-excel"),
];

/// Checks an import file and wraps it for a multipart upload.
///
/// # Errors
/// Returns a `ValidationError` if the file is empty, larger than
/// [`MAX_IMPORT_BYTES`], or not a `.csv`, `.xlsx` or `.xls` file.
pub fn import_upload(file_name: &str, bytes: Vec<u8>) -> Result<UploadFile, ValidationError> {
    if bytes.is_empty() {
        return Err(ValidationError::EmptyFile);
    }
    if u64::try_from(bytes.len()).map_or(true, |len| len > MAX_IMPORT_BYTES) {
        return Err(ValidationError::FileTooLarge {
            max_bytes: MAX_IMPORT_BYTES,
        });
    }

    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let mime = IMPORT_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .ok_or_else(|| ValidationError::UnsupportedFile(file_name.to_string()))?;

    let file_name = Path::new(file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file_name)
        .to_string();

    Ok(UploadFile {
        file_name,
        bytes,
        mime: mime.to_string(),
    })
}
