use yew::html::Scope;
use yew::prelude::*;

use crate::components::results::{Msg, ResultsDashboard};
use crate::tops_sheet::TopSheet;

/// Industry guidelines and disclaimers of the bundle, in an overlay sheet.
pub fn guidelines_sheet(component: &ResultsDashboard, link: &Scope<ResultsDashboard>) -> Html {
    let bundle = component.session.bundle();

    html! {
        <TopSheet node_ref={component.guidelines_ref.clone()}>
            <div class="modal-overlay" onclick={link.callback(|_| Msg::CloseGuidelines)}>
                <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <div class="modal-header">
                        <h3>{"Industry Guidelines & Disclaimers"}</h3>
                        <button class="modal-close" onclick={link.callback(|_| Msg::CloseGuidelines)}>
                            { "✕" }
                        </button>
                    </div>
                    <div class="modal-body">
                        if !bundle.disclaimers.is_empty() {
                            <div class="modal-section disclaimers-section">
                                <h4>{"Important Disclaimers"}</h4>
                                <ul>
                                    { for bundle.disclaimers.iter().map(|disclaimer| html! { <li>{ disclaimer }</li> }) }
                                </ul>
                            </div>
                        }
                        {
                            match &bundle.industry_notes {
                                Some(notes) => html! {
                                    <div class="modal-section industry-notes">
                                        <h4>{"Industry Guidelines"}</h4>
                                        <p><strong>{"Tone: "}</strong>{ &notes.tone }</p>
                                        if !notes.restrictions.is_empty() {
                                            <div class="restrictions">
                                                <strong>{"Key Restrictions:"}</strong>
                                                <ul>
                                                    { for notes.restrictions.iter().map(|restriction| html! { <li>{ restriction }</li> }) }
                                                </ul>
                                            </div>
                                        }
                                    </div>
                                },
                                None => html! {},
                            }
                        }
                    </div>
                </div>
            </div>
        </TopSheet>
    }
}
