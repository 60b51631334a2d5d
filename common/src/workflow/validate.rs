use super::error::WorkflowError;
use crate::model::upload::FileMeta;

/// Hard cap on upload size: 5 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Checks an upload candidate before it is accepted into the workflow.
///
/// `None` means the triggering drop or pick event carried no file at all and
/// is rejected. The explicit clear action does not go through validation; it
/// is a separate transition on the machine.
///
/// A file with an empty MIME type is only accepted with a `.csv` suffix
/// (case-sensitive); any browser-reported MIME type passes the type check.
pub fn validate(candidate: Option<&FileMeta>) -> Result<(), WorkflowError> {
    let meta = candidate
        .ok_or_else(|| WorkflowError::Validation("No file was supplied".to_string()))?;

    if meta.mime.is_empty() && !meta.name.ends_with(".csv") {
        return Err(WorkflowError::Validation(
            "Please upload a valid CSV file".to_string(),
        ));
    }

    if meta.size_bytes > MAX_UPLOAD_BYTES {
        return Err(WorkflowError::Validation(
            "File size should be less than 5MB".to_string(),
        ));
    }

    Ok(())
}
