//! View rendering for the workflow component.
//!
//! The page is two columns: the left side stacks the upload card, the column
//! selector, and the query input; the right side is the status pane, which
//! shows the idle prompt, the processing spinner, the results table, or the
//! error notice depending on the machine status. Above both sits the single
//! banner slot.
//!
//! Notes
//! - Results render only while the status is `Completed`; a result set kept
//!   across a failed re-run stays hidden until the next success.
//! - The hidden file input is a sibling of the drop zone so a programmatic
//!   click cannot bubble back into the zone's own click handler.

use web_sys::{DragEvent, Event, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::banner::Severity;
use common::model::response::{ResultRow, RowStatus};
use common::model::status::ProcessingStatus;

use super::helpers::format_size;
use super::messages::Msg;
use super::state::WorkflowComponent;

/// Main view function for the workflow component.
pub fn view(component: &WorkflowComponent, ctx: &Context<WorkflowComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="workflow-root">
            { build_banner(component, link) }
            <div class="workflow-columns">
                <div class="workflow-config">
                    { build_upload_card(component, link) }
                    { build_column_select(component, link) }
                    { build_query_card(component, link) }
                </div>
                { build_status_pane(component, link) }
            </div>
        </div>
    }
}

/// Renders the single banner slot with its severity styling and a dismiss
/// button. Empty when no banner is active.
fn build_banner(component: &WorkflowComponent, link: &Scope<WorkflowComponent>) -> Html {
    let Some(banner) = component.workflow.banner() else {
        return html! {};
    };

    html! {
        <div class={classes!("banner", severity_class(banner.severity))} role="alert">
            <span class="banner-message">{ banner.message.clone() }</span>
            <button
                class="banner-close"
                aria-label="Dismiss"
                onclick={link.callback(|_| Msg::DismissBanner)}
            >
                {"\u{2715}"}
            </button>
        </div>
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "banner-error",
        Severity::Warning => "banner-warning",
        Severity::Info => "banner-info",
    }
}

/// Builds the upload card: a drop zone with a browse link while no file is
/// accepted, the file summary with a remove button afterwards. Dropping a
/// file anywhere on the card works in both states.
fn build_upload_card(component: &WorkflowComponent, link: &Scope<WorkflowComponent>) -> Html {
    let ondragover = Callback::from(|e: DragEvent| e.prevent_default());
    let ondrop = link.callback(|e: DragEvent| {
        e.prevent_default();
        let file = e
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        Msg::FileChosen(file)
    });

    html! {
        <div class="card upload-card" {ondragover} {ondrop}>
            <h2>{"Upload Dataset"}</h2>
            {
                match component.workflow.file_meta() {
                    None => build_drop_zone(component, link),
                    Some(meta) => html! {
                        <div class="file-summary">
                            <div>
                                <p class="file-name">{ meta.name.clone() }</p>
                                <p class="file-size">{ format_size(meta.size_bytes) }</p>
                            </div>
                            <button
                                class="file-remove"
                                aria-label="Remove file"
                                onclick={link.callback(|_| Msg::ClearFile)}
                            >
                                {"\u{2715}"}
                            </button>
                        </div>
                    },
                }
            }
        </div>
    }
}

/// The drop target plus the hidden file input behind the browse link.
fn build_drop_zone(component: &WorkflowComponent, link: &Scope<WorkflowComponent>) -> Html {
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChosen(input.files().and_then(|files| files.get(0)))
    });

    html! {
        <>
            <div class="drop-zone" onclick={link.callback(|_: MouseEvent| Msg::OpenFileDialog)}>
                <p>
                    {"Drag and drop your CSV file here, or "}
                    <span class="browse-link">{"browse"}</span>
                </p>
                <p class="drop-hint">{"Maximum file size: 5MB"}</p>
            </div>
            <input
                type="file"
                accept=".csv"
                style="display: none;"
                ref={component.file_input_ref.clone()}
                onchange={onchange}
            />
        </>
    }
}

/// Column selector, rendered only once column discovery produced names.
/// Disabled while a submission is in flight.
fn build_column_select(component: &WorkflowComponent, link: &Scope<WorkflowComponent>) -> Html {
    let columns = component.workflow.columns();
    if columns.is_empty() {
        return html! {};
    }
    let processing = component.workflow.status() == ProcessingStatus::Processing;
    let selected = component.workflow.selected_column().unwrap_or("");

    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SelectColumn(select.value())
    });

    html! {
        <div class="card column-card">
            <label for="column-select">{"Select Column for Query"}</label>
            <select id="column-select" disabled={processing} {onchange}>
                <option value="" selected={selected.is_empty()}>{"Select a column"}</option>
                {
                    for columns.iter().map(|column| html! {
                        <option value={column.clone()} selected={selected == column.as_str()}>
                            { column.clone() }
                        </option>
                    })
                }
            </select>
        </div>
    }
}

/// Query input and the submit/cancel controls. The submit button mirrors the
/// machine guard: disabled without a file and a selected column, or while a
/// submission is processing.
fn build_query_card(component: &WorkflowComponent, link: &Scope<WorkflowComponent>) -> Html {
    let processing = component.workflow.status() == ProcessingStatus::Processing;
    let disabled = !component.workflow.has_file()
        || component.workflow.selected_column().is_none()
        || processing;

    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateQuery(input.value())
    });

    html! {
        <div class="card query-card">
            <h2>{"Search Query"}</h2>
            <label for="query">{"What information would you like to extract?"}</label>
            <input
                type="text"
                id="query"
                value={component.workflow.query().to_string()}
                placeholder="e.g., Find the email address of {company}"
                {oninput}
            />
            <p class="query-hint">
                {"Use {company} as a placeholder for each entity in your dataset"}
            </p>
            <button
                class="submit-btn"
                disabled={disabled}
                onclick={link.callback(|_| Msg::Submit)}
            >
                {"Process Dataset"}
            </button>
            {
                if processing {
                    html! {
                        <button class="cancel-btn" onclick={link.callback(|_| Msg::CancelSubmit)}>
                            {"Cancel"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Right-hand pane reflecting the machine status.
fn build_status_pane(component: &WorkflowComponent, link: &Scope<WorkflowComponent>) -> Html {
    let status = component.workflow.status();
    let body = match status {
        ProcessingStatus::Idle => {
            if component.workflow.has_file() {
                html! {}
            } else {
                html! {
                    <div class="status-empty">
                        <p>{"Upload a file to begin"}</p>
                    </div>
                }
            }
        }
        ProcessingStatus::Processing => html! {
            <div class="status-processing">
                <div class="spinner" />
                <p>{"Processing your request..."}</p>
            </div>
        },
        ProcessingStatus::Completed => {
            if component.workflow.results().is_empty() {
                html! {}
            } else {
                build_results_table(component, link)
            }
        }
        ProcessingStatus::Error => html! {
            <div class="status-error">
                <p>{"An error occurred during processing"}</p>
            </div>
        },
    };

    html! {
        <div class="card status-pane">
            <h2>{"Processing Status"}</h2>
            { body }
        </div>
    }
}

/// Result table plus the lossless CSV download control.
fn build_results_table(component: &WorkflowComponent, link: &Scope<WorkflowComponent>) -> Html {
    html! {
        <div class="results">
            <div class="results-actions">
                <button class="download-btn" onclick={link.callback(|_| Msg::DownloadResults)}>
                    {"Download Results"}
                </button>
            </div>
            <table class="results-table">
                <thead>
                    <tr>
                        <th>{"Entity"}</th>
                        <th>{"Result"}</th>
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for component.workflow.results().iter().map(result_row) }
                </tbody>
            </table>
        </div>
    }
}

/// One table row; failed rows are tinted and show their error detail.
fn result_row(row: &ResultRow) -> Html {
    let failed = row.status == RowStatus::Error;
    html! {
        <tr class={if failed { "row-error" } else { "" }}>
            <td>{ row.entity.clone() }</td>
            <td>
                { if row.email.is_empty() { "N/A".to_string() } else { row.email.clone() } }
            </td>
            <td>
                <span class={if failed { "status-chip error" } else { "status-chip success" }}>
                    { row.status.to_string() }
                </span>
                {
                    match &row.error {
                        Some(detail) if failed => html! {
                            <span class="error-detail">{ detail.clone() }</span>
                        },
                        _ => html! {},
                    }
                }
            </td>
        </tr>
    }
}
