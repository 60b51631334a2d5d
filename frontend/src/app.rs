use crate::components::workflow::WorkflowComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="app-shell">
                <header class="app-header">
                    <h1>{"AI Information Retrieval Agent"}</h1>
                    <p>{"Upload your dataset and let AI extract the information you need"}</p>
                </header>
                <WorkflowComponent />
            </div>
        }
    }
}
