//! The workflow state machine.
//!
//! This is the hub every other component reads from and reports to. It owns
//! the processing status, the current file, the query text, the discovered
//! columns, the selection, the result set, and the banner slot. All mutation
//! goes through one entry point per transition; the view reads snapshots
//! through the getters and never touches a field directly.
//!
//! Asynchronous work (column discovery, the network call) completes through
//! a [`Ticket`] minted when the work was spawned. Every accepted upload,
//! clear, submit, and cancel advances the machine generation, so a
//! completion presented with a stale ticket is dropped and an abandoned
//! request can never corrupt newer state.

use serde_json::Value;

use super::error::WorkflowError;
use super::validate;
use crate::model::banner::Banner;
use crate::model::response::{ProcessResponse, ResultRow};
use crate::model::status::ProcessingStatus;
use crate::model::upload::FileMeta;

/// Handle tying an asynchronous completion to the machine generation that
/// spawned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Everything the request builder needs for one submission.
#[derive(Debug, Clone)]
pub struct Submission<F> {
    pub ticket: Ticket,
    pub file: F,
    pub query: String,
    pub column: String,
}

/// The workflow state machine.
///
/// `F` is the platform file handle (`web_sys::File` in the browser); the
/// machine never looks inside it, it only stores and hands it back to the
/// request builder.
pub struct Workflow<F> {
    status: ProcessingStatus,
    file: Option<(F, FileMeta)>,
    query: String,
    columns: Vec<String>,
    selected_column: Option<String>,
    results: Vec<ResultRow>,
    banner: Option<Banner>,
    logs: Option<Value>,
    generation: u64,
}

impl<F> Workflow<F> {
    pub fn new() -> Self {
        Self {
            status: ProcessingStatus::Idle,
            file: None,
            query: String::new(),
            columns: Vec::new(),
            selected_column: None,
            results: Vec::new(),
            banner: None,
            logs: None,
            generation: 0,
        }
    }

    /// Runs an upload candidate through the validator.
    ///
    /// Acceptance replaces the current file and resets every dependent piece
    /// of state; rejection changes nothing but the banner, the previous file
    /// stays in place. Returns the ticket for the column discovery when the
    /// file was accepted.
    pub fn offer_file(&mut self, candidate: Option<(F, FileMeta)>) -> Option<Ticket> {
        if let Err(err) = validate::validate(candidate.as_ref().map(|(_, meta)| meta)) {
            self.banner = Some(err.banner());
            return None;
        }
        self.file = candidate;
        self.reset_dependent_state();
        Some(self.advance())
    }

    /// The explicit clear action from the remove control: drops the file and
    /// all dependent state without raising an error.
    pub fn clear_file(&mut self) {
        self.file = None;
        self.reset_dependent_state();
        self.advance();
    }

    /// Stores the outcome of the asynchronous column discovery.
    ///
    /// A parse failure surfaces as a warning banner; an empty column set
    /// stays silent, the selector simply remains hidden. Returns `false`
    /// when the ticket was stale and nothing was applied.
    pub fn columns_loaded(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<String>, WorkflowError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match outcome {
            Ok(columns) => self.columns = columns,
            Err(err) => self.banner = Some(err.banner()),
        }
        true
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Selects a column by name. The empty string unsets the selection;
    /// names outside the current column set are ignored.
    pub fn select_column(&mut self, name: String) {
        if name.is_empty() {
            self.selected_column = None;
        } else if self.columns.iter().any(|column| *column == name) {
            self.selected_column = Some(name);
        }
    }

    /// The submit guard (`idle`/`completed`/`error` → `processing`).
    ///
    /// Returns the request bundle when the guards pass; otherwise sets the
    /// matching validation message and leaves the status unchanged, and no
    /// network call may be made. A submit while already processing is a
    /// no-op.
    pub fn begin_submit(&mut self) -> Option<Submission<F>>
    where
        F: Clone,
    {
        if self.status == ProcessingStatus::Processing {
            return None;
        }

        let Some((file, _)) = &self.file else {
            self.refuse_submit("Please upload a file");
            return None;
        };
        let file = file.clone();

        if self.query.is_empty() {
            self.refuse_submit("Please enter a query");
            return None;
        }
        let Some(column) = self.selected_column.clone() else {
            self.refuse_submit("Please select a column");
            return None;
        };

        let ticket = self.advance();
        self.status = ProcessingStatus::Processing;
        self.banner = None;

        Some(Submission {
            ticket,
            file,
            query: self.query.clone(),
            column,
        })
    }

    /// Applies the outcome of a finished submission.
    ///
    /// Success stores the result set in response order and captures the
    /// service logs; failure keeps the prior results (the view hides them
    /// while the status is `Error`) and raises the generic banner. Stale
    /// tickets are dropped; returns whether the outcome was applied.
    pub fn submission_finished(
        &mut self,
        ticket: Ticket,
        outcome: Result<ProcessResponse, WorkflowError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match outcome {
            Ok(response) => {
                self.results = response.results;
                self.logs = response.logs;
                self.status = ProcessingStatus::Completed;
            }
            Err(err) => {
                self.banner = Some(err.banner());
                self.status = ProcessingStatus::Error;
            }
        }
        true
    }

    /// Abandons the in-flight submission: the pending response is orphaned
    /// and the status returns to `Idle`. A no-op outside `Processing`.
    pub fn cancel_submit(&mut self) {
        if self.status == ProcessingStatus::Processing {
            self.advance();
            self.status = ProcessingStatus::Idle;
        }
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn file_meta(&self) -> Option<&FileMeta> {
        self.file.as_ref().map(|(_, meta)| meta)
    }

    pub fn file_handle(&self) -> Option<&F> {
        self.file.as_ref().map(|(file, _)| file)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn selected_column(&self) -> Option<&str> {
        self.selected_column.as_deref()
    }

    pub fn results(&self) -> &[ResultRow] {
        &self.results
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn logs(&self) -> Option<&Value> {
        self.logs.as_ref()
    }

    fn refuse_submit(&mut self, message: &str) {
        self.banner = Some(WorkflowError::Validation(message.to_string()).banner());
    }

    fn reset_dependent_state(&mut self) {
        self.status = ProcessingStatus::Idle;
        self.results.clear();
        self.banner = None;
        self.columns.clear();
        self.selected_column = None;
        self.logs = None;
    }

    fn advance(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

impl<F> Default for Workflow<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::banner::Severity;
    use crate::model::response::RowStatus;
    use crate::workflow::error::PROCESSING_FAILED_MESSAGE;

    // The tests stand in for the browser: the file handle is a plain unit.
    type TestWorkflow = Workflow<()>;

    fn csv_meta(name: &str) -> FileMeta {
        FileMeta {
            name: name.to_string(),
            size_bytes: 2048,
            mime: "text/csv".to_string(),
        }
    }

    fn rows(n: usize) -> Vec<ResultRow> {
        (0..n)
            .map(|i| ResultRow {
                entity: format!("entity-{}", i),
                email: format!("e{}@x.com", i),
                status: RowStatus::Success,
                error: None,
            })
            .collect()
    }

    fn response(n: usize) -> ProcessResponse {
        ProcessResponse {
            results: rows(n),
            logs: None,
        }
    }

    /// Drives a fresh machine to the point where a submit is legal.
    fn ready_workflow() -> TestWorkflow {
        let mut workflow = TestWorkflow::new();
        let ticket = workflow.offer_file(Some(((), csv_meta("companies.csv")))).unwrap();
        workflow.columns_loaded(ticket, Ok(vec!["company".to_string(), "country".to_string()]));
        workflow.set_query("Find the email address of {company}".to_string());
        workflow.select_column("company".to_string());
        workflow
    }

    #[test]
    fn starts_idle_and_empty() {
        let workflow = TestWorkflow::new();
        assert_eq!(workflow.status(), ProcessingStatus::Idle);
        assert!(!workflow.has_file());
        assert!(workflow.columns().is_empty());
        assert!(workflow.banner().is_none());
    }

    #[test]
    fn accepted_upload_resets_dependent_state() {
        let mut workflow = ready_workflow();
        let ticket = workflow.begin_submit().unwrap().ticket;
        workflow.submission_finished(ticket, Ok(response(3)));
        assert_eq!(workflow.status(), ProcessingStatus::Completed);

        workflow.offer_file(Some(((), csv_meta("other.csv")))).unwrap();
        assert_eq!(workflow.status(), ProcessingStatus::Idle);
        assert!(workflow.results().is_empty());
        assert!(workflow.columns().is_empty());
        assert_eq!(workflow.selected_column(), None);
        assert!(workflow.banner().is_none());
        assert_eq!(workflow.file_meta().unwrap().name, "other.csv");
    }

    #[test]
    fn upload_while_processing_orphans_the_response() {
        let mut workflow = ready_workflow();
        let pending = workflow.begin_submit().unwrap().ticket;
        workflow.offer_file(Some(((), csv_meta("other.csv")))).unwrap();
        assert_eq!(workflow.status(), ProcessingStatus::Idle);

        assert!(!workflow.submission_finished(pending, Ok(response(1))));
        assert!(workflow.results().is_empty());
        assert_eq!(workflow.status(), ProcessingStatus::Idle);
    }

    #[test]
    fn rejected_upload_keeps_the_previous_file() {
        let mut workflow = ready_workflow();
        let rejected = workflow.offer_file(Some((
            (),
            FileMeta {
                name: "huge.csv".to_string(),
                size_bytes: 6 * 1024 * 1024,
                mime: "text/csv".to_string(),
            },
        )));
        assert!(rejected.is_none());
        assert_eq!(workflow.file_meta().unwrap().name, "companies.csv");
        assert_eq!(
            workflow.banner().unwrap().message,
            "File size should be less than 5MB"
        );
        // Columns from the previous file are still selectable.
        assert_eq!(workflow.selected_column(), Some("company"));
    }

    #[test]
    fn missing_candidate_is_rejected_not_cleared() {
        let mut workflow = ready_workflow();
        assert!(workflow.offer_file(None).is_none());
        assert!(workflow.has_file());
        assert_eq!(workflow.banner().unwrap().message, "No file was supplied");
    }

    #[test]
    fn clear_drops_everything_quietly() {
        let mut workflow = ready_workflow();
        workflow.clear_file();
        assert!(!workflow.has_file());
        assert!(workflow.columns().is_empty());
        assert_eq!(workflow.selected_column(), None);
        assert!(workflow.banner().is_none());
        assert_eq!(workflow.status(), ProcessingStatus::Idle);
    }

    #[test]
    fn stale_column_discovery_is_dropped() {
        let mut workflow = TestWorkflow::new();
        let first = workflow.offer_file(Some(((), csv_meta("a.csv")))).unwrap();
        let second = workflow.offer_file(Some(((), csv_meta("b.csv")))).unwrap();

        assert!(!workflow.columns_loaded(first, Ok(vec!["stale".to_string()])));
        assert!(workflow.columns().is_empty());

        assert!(workflow.columns_loaded(second, Ok(vec!["fresh".to_string()])));
        assert_eq!(workflow.columns(), ["fresh".to_string()]);
    }

    #[test]
    fn parse_failure_surfaces_as_a_warning() {
        let mut workflow = TestWorkflow::new();
        let ticket = workflow.offer_file(Some(((), csv_meta("bad.csv")))).unwrap();
        workflow.columns_loaded(ticket, Err(WorkflowError::Parse("invalid utf-8".into())));
        let banner = workflow.banner().unwrap();
        assert_eq!(banner.severity, Severity::Warning);
        assert_eq!(workflow.status(), ProcessingStatus::Idle);
    }

    #[test]
    fn select_column_ignores_unknown_names() {
        let mut workflow = ready_workflow();
        workflow.select_column("no-such-column".to_string());
        assert_eq!(workflow.selected_column(), Some("company"));
        workflow.select_column(String::new());
        assert_eq!(workflow.selected_column(), None);
    }

    #[test]
    fn submit_without_file_sets_the_message_and_stays_put() {
        let mut workflow = TestWorkflow::new();
        workflow.set_query("anything".to_string());
        assert!(workflow.begin_submit().is_none());
        assert_eq!(workflow.banner().unwrap().message, "Please upload a file");
        assert_eq!(workflow.status(), ProcessingStatus::Idle);
    }

    #[test]
    fn submit_without_query_sets_the_message() {
        let mut workflow = ready_workflow();
        workflow.set_query(String::new());
        assert!(workflow.begin_submit().is_none());
        assert_eq!(workflow.banner().unwrap().message, "Please enter a query");
    }

    #[test]
    fn submit_without_column_sets_the_message() {
        let mut workflow = ready_workflow();
        workflow.select_column(String::new());
        assert!(workflow.begin_submit().is_none());
        assert_eq!(workflow.banner().unwrap().message, "Please select a column");
    }

    #[test]
    fn submit_carries_the_request_parts_verbatim() {
        let mut workflow = ready_workflow();
        let submission = workflow.begin_submit().unwrap();
        assert_eq!(submission.query, "Find the email address of {company}");
        assert_eq!(submission.column, "company");
        assert_eq!(workflow.status(), ProcessingStatus::Processing);
        assert!(workflow.banner().is_none());
    }

    #[test]
    fn second_submit_while_processing_is_a_no_op() {
        let mut workflow = ready_workflow();
        workflow.begin_submit().unwrap();
        assert!(workflow.begin_submit().is_none());
        assert!(workflow.banner().is_none());
        assert_eq!(workflow.status(), ProcessingStatus::Processing);
    }

    #[test]
    fn success_stores_results_in_response_order() {
        let mut workflow = ready_workflow();
        let ticket = workflow.begin_submit().unwrap().ticket;
        assert!(workflow.submission_finished(ticket, Ok(response(4))));
        assert_eq!(workflow.status(), ProcessingStatus::Completed);
        assert_eq!(workflow.results().len(), 4);
        assert_eq!(workflow.results()[0].entity, "entity-0");
        assert_eq!(workflow.results()[3].entity, "entity-3");
    }

    #[test]
    fn failure_keeps_prior_results_and_raises_the_generic_banner() {
        let mut workflow = ready_workflow();
        let ticket = workflow.begin_submit().unwrap().ticket;
        workflow.submission_finished(ticket, Ok(response(2)));

        let ticket = workflow.begin_submit().unwrap().ticket;
        workflow.submission_finished(
            ticket,
            Err(WorkflowError::Transport("Error 500: Internal Server Error".into())),
        );
        assert_eq!(workflow.status(), ProcessingStatus::Error);
        assert_eq!(workflow.results().len(), 2);
        assert_eq!(workflow.banner().unwrap().message, PROCESSING_FAILED_MESSAGE);
    }

    #[test]
    fn completed_and_error_are_re_enterable() {
        let mut workflow = ready_workflow();
        let ticket = workflow.begin_submit().unwrap().ticket;
        workflow.submission_finished(ticket, Err(WorkflowError::Schema("bad".into())));
        assert_eq!(workflow.status(), ProcessingStatus::Error);

        let ticket = workflow.begin_submit().unwrap().ticket;
        workflow.submission_finished(ticket, Ok(response(1)));
        assert_eq!(workflow.status(), ProcessingStatus::Completed);
    }

    #[test]
    fn cancel_orphans_the_pending_response() {
        let mut workflow = ready_workflow();
        let ticket = workflow.begin_submit().unwrap().ticket;
        workflow.cancel_submit();
        assert_eq!(workflow.status(), ProcessingStatus::Idle);

        assert!(!workflow.submission_finished(ticket, Ok(response(5))));
        assert!(workflow.results().is_empty());
        assert_eq!(workflow.status(), ProcessingStatus::Idle);
    }

    #[test]
    fn cancel_outside_processing_changes_nothing() {
        let mut workflow = ready_workflow();
        workflow.cancel_submit();
        assert_eq!(workflow.status(), ProcessingStatus::Idle);
        assert_eq!(workflow.selected_column(), Some("company"));
    }

    #[test]
    fn logs_are_captured_but_cleared_with_the_file() {
        let mut workflow = ready_workflow();
        let ticket = workflow.begin_submit().unwrap().ticket;
        workflow.submission_finished(
            ticket,
            Ok(ProcessResponse {
                results: rows(1),
                logs: Some(serde_json::json!(["fetched 1 page"])),
            }),
        );
        assert!(workflow.logs().is_some());

        workflow.clear_file();
        assert!(workflow.logs().is_none());
    }
}
