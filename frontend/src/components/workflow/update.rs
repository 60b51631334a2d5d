//! Update function for the workflow component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `WorkflowComponent` state, the
//! `Context`, and a `Msg`, dispatches the intent into the workflow machine,
//! runs the side effects, and returns a `bool` indicating whether the view
//! should re-render.
//!
//! Key behaviors
//! - Upload handling: validation and state resets happen in the machine;
//!   accepted files kick off asynchronous column discovery.
//! - Submission: the machine's guard decides; on success a multipart POST is
//!   sent with an abort handle so a later upload, clear, or cancel can
//!   abandon it.
//! - All raw failure detail goes to the console, never to the user.

use gloo_console::{debug, error, warn};
use gloo_file::{futures::read_as_bytes, Blob};
use wasm_bindgen::JsCast;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::workflow::columns::parse_columns;
use common::workflow::error::WorkflowError;
use common::workflow::export::{export_csv, EXPORT_FILENAME};

use super::helpers::{file_meta, send_process_request, trigger_download};
use super::messages::Msg;
use super::state::WorkflowComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async callbacks).
/// - Returns `true` to re-render the view, `false` to short-circuit when
///   only side effects occur.
pub fn update(
    component: &mut WorkflowComponent,
    ctx: &Context<WorkflowComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileChosen(candidate) => {
            let candidate = candidate.map(|file| {
                let meta = file_meta(&file);
                (file, meta)
            });
            let Some(ticket) = component.workflow.offer_file(candidate) else {
                // Rejected; only the banner changed.
                return true;
            };

            // A fresh file invalidates whatever was still in flight.
            component.abort_in_flight();

            if let Some(file) = component.workflow.file_handle() {
                let blob = Blob::from(file.clone());
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = match read_as_bytes(&blob).await {
                        Ok(bytes) => parse_columns(&bytes),
                        Err(err) => Err(WorkflowError::Parse(err.to_string())),
                    };
                    link.send_message(Msg::ColumnsLoaded(ticket, outcome));
                });
            }
            true
        }
        Msg::ClearFile => {
            component.abort_in_flight();
            component.workflow.clear_file();
            true
        }
        Msg::ColumnsLoaded(ticket, outcome) => {
            if let Err(err) = &outcome {
                warn!("column discovery failed:", err.to_string());
            }
            let has_columns = matches!(&outcome, Ok(columns) if !columns.is_empty());
            if !component.workflow.columns_loaded(ticket, outcome) {
                return false;
            }
            if has_columns {
                focus_column_select();
            }
            true
        }
        Msg::UpdateQuery(query) => {
            component.workflow.set_query(query);
            true
        }
        Msg::SelectColumn(name) => {
            component.workflow.select_column(name);
            true
        }
        Msg::Submit => {
            let Some(submission) = component.workflow.begin_submit() else {
                // Guard failed; the validation banner is already set.
                return true;
            };

            let controller = web_sys::AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            component.abort = controller;

            let endpoint = ctx.props().endpoint().to_string();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome =
                    send_process_request(&endpoint, &submission, signal.as_ref()).await;
                link.send_message(Msg::SubmissionFinished(submission.ticket, outcome));
            });
            true
        }
        Msg::CancelSubmit => {
            component.abort_in_flight();
            component.workflow.cancel_submit();
            true
        }
        Msg::SubmissionFinished(ticket, outcome) => {
            if let Err(err) = &outcome {
                error!("processing failed:", err.to_string());
            }
            if !component.workflow.submission_finished(ticket, outcome) {
                // A newer upload, clear, or cancel already superseded this run.
                return false;
            }
            component.abort = None;
            if let Some(logs) = component.workflow.logs() {
                debug!("service logs:", logs.to_string());
            }
            true
        }
        Msg::DismissBanner => {
            component.workflow.dismiss_banner();
            true
        }
        Msg::DownloadResults => {
            let content = export_csv(component.workflow.results());
            if let Err(err) = trigger_download(&content, EXPORT_FILENAME) {
                error!("download failed:", format!("{:?}", err));
            }
            false
        }
    }
}

/// Moves keyboard focus to the column selector once it exists in the DOM.
/// The selector only renders after the column set arrives, so the focus call
/// is deferred a tick.
fn focus_column_select() {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(10).await;
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(select) = document
                .get_element_by_id("column-select")
                .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
            {
                select.focus().ok();
            }
        }
    });
}
