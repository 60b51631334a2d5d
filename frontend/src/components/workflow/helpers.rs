//! Utility functions for the workflow component.
//!
//! Responsibilities include:
//! - **Metadata extraction**: turning a browser `File` handle into the
//!   validator's `FileMeta` view.
//! - **Formatting**: human-readable byte counts for the file card.
//! - **Request transmission**: building the multipart payload and sending it
//!   through `gloo-net`, with the raw response handed to the interpreter.
//! - **Export delivery**: saving the rendered CSV through a temporary
//!   object-URL anchor.

use gloo_net::http::Request;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AbortSignal, Blob, BlobPropertyBag, FormData, HtmlAnchorElement, Url};

use common::model::response::ProcessResponse;
use common::model::upload::FileMeta;
use common::workflow::error::WorkflowError;
use common::workflow::interpret::interpret;
use common::workflow::machine::Submission;

/// Extracts the validator's view of a browser file handle.
pub fn file_meta(file: &web_sys::File) -> FileMeta {
    FileMeta {
        name: file.name(),
        size_bytes: file.size() as u64,
        mime: file.type_(),
    }
}

/// Human-readable size for the file card, e.g. `1,204 KB`.
pub fn format_size(size_bytes: u64) -> String {
    let kib = size_bytes.div_ceil(1024);
    format!("{} KB", kib.to_formatted_string(&Locale::en))
}

/// Builds the outbound multipart payload: three named parts `file`, `query`,
/// `column`. The query template is forwarded verbatim; placeholder
/// substitution is the service's responsibility.
fn build_form(submission: &Submission<web_sys::File>) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename("file", &submission.file, &submission.file.name())?;
    form.append_with_str("query", &submission.query)?;
    form.append_with_str("column", &submission.column)?;
    Ok(form)
}

/// Sends one processing request and interprets the raw response.
///
/// Failures before a response exists (network loss, an aborted fetch) map to
/// `WorkflowError::Transport`; everything after that is the interpreter's
/// call.
pub async fn send_process_request(
    endpoint: &str,
    submission: &Submission<web_sys::File>,
    signal: Option<&AbortSignal>,
) -> Result<ProcessResponse, WorkflowError> {
    let form =
        build_form(submission).map_err(|err| WorkflowError::Transport(format!("{:?}", err)))?;

    let response = Request::post(endpoint)
        .abort_signal(signal)
        .body(form)
        .map_err(|err| WorkflowError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| WorkflowError::Transport(err.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|err| WorkflowError::Transport(err.to_string()))?;

    interpret(status, &status_text, &body)
}

/// Saves the export artifact by injecting a temporary object-URL anchor and
/// clicking it.
pub fn trigger_download(content: &str, filename: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document body unavailable"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}
