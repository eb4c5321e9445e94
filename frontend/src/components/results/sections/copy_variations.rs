use common::model::content::RiskTone;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::results::{Msg, ResultsDashboard};

pub fn copy_variations(component: &ResultsDashboard, link: &Scope<ResultsDashboard>) -> Html {
    let variations = &component.session.bundle().copy_variations;
    let selected = component.session.selection().copy();

    html! {
        <div class="copy-variations">
            <h3>{"Copy Variations"}</h3>
            <p class="section-description">{ format!("{} variations generated", variations.len()) }</p>

            <div class="variations-list">
                {
                    for variations.iter().enumerate().map(|(index, variation)| {
                        let clipboard_text = variation.clipboard_text();
                        html! {
                            <div
                                class={classes!("variation-card", (selected == Some(index)).then_some("selected"))}
                                onclick={link.callback(move |_| Msg::SelectCopy(index))}
                            >
                                <div class="variation-header">
                                    <span class="variation-number">{ format!("#{}", index + 1) }</span>
                                    {
                                        match &variation.performance_analysis {
                                            Some(analysis) => html! {
                                                <span class={classes!("risk-badge", badge_class(analysis.tone()))}>
                                                    { &analysis.label }
                                                </span>
                                            },
                                            None => html! {},
                                        }
                                    }
                                </div>

                                <div class="variation-content">
                                    <div class="copy-field">
                                        <label>{"Headline"}</label>
                                        <p class="headline">{ &variation.headline }</p>
                                    </div>
                                    <div class="copy-field">
                                        <label>{"Primary Text"}</label>
                                        <p>{ &variation.primary_text }</p>
                                    </div>
                                    <div class="copy-field">
                                        <label>{"Call to Action"}</label>
                                        <p class="cta">{ &variation.cta }</p>
                                    </div>
                                    {
                                        match variation.notes.as_deref().filter(|notes| !notes.is_empty()) {
                                            Some(notes) => html! {
                                                <div class="copy-field">
                                                    <label>{"Notes"}</label>
                                                    <p class="notes">{ notes }</p>
                                                </div>
                                            },
                                            None => html! {},
                                        }
                                    }
                                    {
                                        match &variation.performance_analysis {
                                            Some(analysis) => html! {
                                                <div class="performance-details">
                                                    <small>{ &analysis.details }</small>
                                                    if analysis.requires_review {
                                                        <small class="review-required">{"Compliance review recommended"}</small>
                                                    }
                                                </div>
                                            },
                                            None => html! {},
                                        }
                                    }
                                </div>

                                <button
                                    class="copy-button"
                                    onclick={link.callback(move |e: MouseEvent| {
                                        e.stop_propagation();
                                        Msg::CopyText(clipboard_text.clone(), "Copied to clipboard!")
                                    })}
                                >
                                    {"Copy Text"}
                                </button>
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}

fn badge_class(tone: RiskTone) -> &'static str {
    match tone {
        RiskTone::Safe => "safe",
        RiskTone::Medium => "medium",
        RiskTone::Risky => "risky",
    }
}
