//! Upload–configure–submit–render workflow: root module wiring the Yew
//! `Component` implementation with submodules for state, update logic, view
//! rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `WorkflowProps`, `WorkflowComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//!
//! The workflow decisions themselves live in `common::workflow`; this
//! component only translates browser events into machine intents and machine
//! snapshots into markup.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::WorkflowProps;
pub use state::WorkflowComponent;

impl Component for WorkflowComponent {
    type Message = Msg;
    type Properties = WorkflowProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WorkflowComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
