use thiserror::Error;

use crate::model::banner::Banner;

/// Generic message shown for any transport or schema failure. The raw
/// failure detail is logged, never rendered.
pub const PROCESSING_FAILED_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

const PARSE_FAILED_MESSAGE: &str = "Could not read column names from the uploaded file";

/// Failure kinds of the workflow.
///
/// `Validation` is raised before any network call and carries the exact
/// message shown to the user. `Transport` covers non-2xx responses and
/// network-level failures, `Schema` a success response whose body does not
/// match the contract; both carry detail for the log only. `Parse` covers
/// column discovery failures on the uploaded file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Schema(String),

    #[error("{0}")]
    Parse(String),
}

impl WorkflowError {
    /// Maps the failure onto the single user-facing banner slot.
    ///
    /// Validation messages are shown verbatim. A parse failure is a warning:
    /// the workflow stays usable, the user just gets no column options.
    /// Transport and schema failures collapse to one generic message.
    pub fn banner(&self) -> Banner {
        match self {
            WorkflowError::Validation(message) => Banner::error(message.clone()),
            WorkflowError::Parse(_) => Banner::warning(PARSE_FAILED_MESSAGE),
            WorkflowError::Transport(_) | WorkflowError::Schema(_) => {
                Banner::error(PROCESSING_FAILED_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::banner::Severity;

    #[test]
    fn validation_banner_keeps_its_message() {
        let banner = WorkflowError::Validation("Please upload a file".into()).banner();
        assert_eq!(banner.message, "Please upload a file");
        assert_eq!(banner.severity, Severity::Error);
    }

    #[test]
    fn parse_banner_is_a_warning() {
        let banner = WorkflowError::Parse("invalid utf-8".into()).banner();
        assert_eq!(banner.severity, Severity::Warning);
        assert_eq!(banner.message, PARSE_FAILED_MESSAGE);
    }

    #[test]
    fn transport_and_schema_share_the_generic_message() {
        let transport = WorkflowError::Transport("Error 500: Internal Server Error".into());
        let schema = WorkflowError::Schema("results missing".into());
        assert_eq!(transport.banner().message, PROCESSING_FAILED_MESSAGE);
        assert_eq!(schema.banner().message, PROCESSING_FAILED_MESSAGE);
        assert_eq!(transport.banner().severity, Severity::Error);
    }
}
