//! Component state for the workflow hub.
//!
//! The machine in `common::workflow` owns every piece of shared workflow
//! state; what lives here are the browser-side extras: the abort handle of
//! the in-flight fetch and the node ref of the hidden file picker.

use web_sys::AbortController;
use yew::prelude::*;

use common::workflow::machine::Workflow;

/// State container for the `WorkflowComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct WorkflowComponent {
    /// The workflow state machine, holding the browser file handle.
    pub workflow: Workflow<web_sys::File>,

    /// Abort handle of the outstanding `POST /api/process` call, if any.
    /// A new upload, a clear, or an explicit cancel aborts the fetch; the
    /// machine's ticket guard drops whatever still resolves afterwards.
    pub abort: Option<AbortController>,

    /// Reference to the hidden file input behind the browse link.
    pub file_input_ref: NodeRef,
}

impl WorkflowComponent {
    pub fn new() -> Self {
        Self {
            workflow: Workflow::new(),
            abort: None,
            file_input_ref: Default::default(),
        }
    }

    /// Aborts the outstanding fetch, if one is in flight.
    pub fn abort_in_flight(&mut self) {
        if let Some(controller) = self.abort.take() {
            controller.abort();
        }
    }
}
