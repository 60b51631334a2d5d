use serde_json::Value;

use super::error::WorkflowError;
use crate::model::response::{ProcessResponse, ResultRow};

const UNEXPECTED_STRUCTURE: &str = "Unexpected response structure from server";

/// Validates the raw service response and decodes it into a
/// [`ProcessResponse`].
///
/// Fails closed: a non-2xx status, an undecodable body, a missing or
/// non-array `results` field, and any result row missing a required field
/// are all failures. A sibling `logs` field is captured when present and
/// non-null.
pub fn interpret(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<ProcessResponse, WorkflowError> {
    if !(200..300).contains(&status) {
        return Err(WorkflowError::Transport(format!(
            "Error {}: {}",
            status, status_text
        )));
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|err| WorkflowError::Schema(format!("undecodable response body: {}", err)))?;

    let rows = match value.get("results") {
        Some(Value::Array(rows)) => rows,
        _ => return Err(WorkflowError::Schema(UNEXPECTED_STRUCTURE.to_string())),
    };

    let mut results = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let row: ResultRow = serde_json::from_value(row.clone()).map_err(|err| {
            WorkflowError::Schema(format!("malformed result row {}: {}", index, err))
        })?;
        results.push(row);
    }

    let logs = value.get("logs").filter(|logs| !logs.is_null()).cloned();

    Ok(ProcessResponse { results, logs })
}
