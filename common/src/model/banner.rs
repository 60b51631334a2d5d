/// Severity of a user-facing banner message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// The single user-facing notification slot.
///
/// There is at most one banner at a time; a new one replaces the prior one,
/// and the machine models "no banner" as `Option::None`. The banner is
/// independent of the processing status and may be shown or dismissed at any
/// point, including mid-processing.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub message: String,
    pub severity: Severity,
}

impl Banner {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}
