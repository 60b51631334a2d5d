//! Defines the properties for the `WorkflowComponent`.

use yew::prelude::*;

/// Endpoint the workflow submits to unless a parent overrides it.
pub const PROCESS_ENDPOINT: &str = "/api/process";

/// Properties for the `WorkflowComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct WorkflowProps {
    /// Optional override for the processing endpoint.
    ///
    /// Defaults to `/api/process` on the current origin; a parent only needs
    /// to set this when the extraction service is hosted elsewhere.
    #[prop_or_default]
    pub endpoint: Option<String>,
}

impl WorkflowProps {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(PROCESS_ENDPOINT)
    }
}
