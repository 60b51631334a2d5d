use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-row verdict reported by the extraction service.
///
/// Serialized lowercase on the wire (`success` / `error`); the `Display`
/// form is identical and is what the CSV export writes into its `Status`
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Success,
    Error,
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowStatus::Success => write!(f, "success"),
            RowStatus::Error => write!(f, "error"),
        }
    }
}

/// Outcome of the extraction for a single entity of the uploaded dataset.
///
/// Rows are produced only by the response interpreter and are immutable once
/// stored; their order is whatever the service returned. `entity`, `email`
/// and `status` are required on the wire, `error` carries the failure detail
/// of an `error`-status row when the service supplies one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub entity: String,
    pub email: String,
    pub status: RowStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Decoded success body of `POST /api/process`.
///
/// `logs` is opaque diagnostic data the service may attach; it is captured
/// into workflow state but never rendered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessResponse {
    pub results: Vec<ResultRow>,
    #[serde(default)]
    pub logs: Option<serde_json::Value>,
}
