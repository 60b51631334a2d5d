/// Metadata of an upload candidate, extracted from the platform file handle
/// before validation.
///
/// The handle itself (the browser's `File` object in the frontend) stays
/// opaque to the workflow core; everything the validator needs to decide is
/// in here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    /// Filename as reported by the browser.
    pub name: String,
    pub size_bytes: u64,
    /// MIME type as reported by the browser; empty when the browser does not
    /// recognize the file type.
    pub mime: String,
}
