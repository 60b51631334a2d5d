use common::model::response::ProcessResponse;
use common::workflow::error::WorkflowError;
use common::workflow::machine::Ticket;

#[derive(Clone)]
pub enum Msg {
    OpenFileDialog,
    FileChosen(Option<web_sys::File>),
    ClearFile,
    ColumnsLoaded(Ticket, Result<Vec<String>, WorkflowError>),
    UpdateQuery(String),
    SelectColumn(String),
    Submit,
    CancelSubmit,
    SubmissionFinished(Ticket, Result<ProcessResponse, WorkflowError>),
    DismissBanner,
    DownloadResults,
}
