//! View rendering for the campaign brief form.
//!
//! Three select fields are filled from the configuration; audience and
//! message are free text. The submit button is disabled until every field is
//! filled and while a request is pending.

use common::model::brief::BriefField;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CampaignFormComponent;

pub fn view(component: &CampaignFormComponent, ctx: &Context<CampaignFormComponent>) -> Html {
    let link = ctx.link();
    let Some(config) = &ctx.props().config else {
        return html! { <div class="loading">{"Loading configuration..."}</div> };
    };
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="campaign-form-container">
            <div class="form-card">
                <h2>{"Campaign Brief"}</h2>
                <p class="form-description">
                    {"Fill out your campaign details to generate optimized content"}
                </p>

                <form class="campaign-form" {onsubmit}>
                    { select_field(component, link, BriefField::Industry, "Industry / Content Category *", "Select an industry...", &config.industries) }
                    { select_field(component, link, BriefField::Platform, "Platform Target *", "Select a platform...", &config.platforms) }
                    { select_field(component, link, BriefField::Objective, "Campaign Objective *", "Select an objective...", &config.objectives) }
                    { audience_field(component, link) }
                    { message_field(component, link) }

                    {
                        if let Some(error) = component.form.error() {
                            html! { <div class="error-message">{ error }</div> }
                        } else {
                            html! {}
                        }
                    }

                    <button type="submit" class="submit-button" disabled={!component.form.can_submit()}>
                        {
                            if component.form.is_submitting() {
                                html! {
                                    <span class="loading-text">
                                        <span class="spinner"></span>
                                        {"Generating Content... (This may take 15-30 seconds)"}
                                    </span>
                                }
                            } else {
                                html! { {"Generate Campaign Content"} }
                            }
                        }
                    </button>

                    {
                        if component.form.is_submitting() {
                            html! {
                                <div class="loading-info">
                                    <p>{"Creating your campaign content..."}</p>
                                    <p>{"Generating copy variations..."}</p>
                                    <p>{"Preparing image prompts..."}</p>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </form>
            </div>
        </div>
    }
}

fn select_field(
    component: &CampaignFormComponent,
    link: &Scope<CampaignFormComponent>,
    field: BriefField,
    label: &str,
    placeholder: &str,
    options: &[String],
) -> Html {
    let current = component.form.value(field).to_string();
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetField(field, select.value())
    });

    html! {
        <div class="form-group">
            <label for={field.name()}>{ label }</label>
            <select id={field.name()} name={field.name()} {onchange} required=true>
                <option value="" selected={current.is_empty()}>{ placeholder }</option>
                {
                    for options.iter().map(|option| html! {
                        <option value={option.clone()} selected={*option == current}>{ option }</option>
                    })
                }
            </select>
        </div>
    }
}

fn audience_field(component: &CampaignFormComponent, link: &Scope<CampaignFormComponent>) -> Html {
    let field = BriefField::Audience;
    html! {
        <div class="form-group">
            <label for={field.name()}>{"Target Audience *"}</label>
            <input
                type="text"
                id={field.name()}
                name={field.name()}
                value={component.form.value(field).to_string()}
                placeholder="e.g., Women 25-45, health-conscious, active lifestyle"
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetField(field, input.value())
                })}
                required=true
            />
            <small>{"Age range, interests, demographics, etc."}</small>
        </div>
    }
}

fn message_field(component: &CampaignFormComponent, link: &Scope<CampaignFormComponent>) -> Html {
    let field = BriefField::Message;
    html! {
        <div class="form-group">
            <label for={field.name()}>{"Key Message / Angle *"}</label>
            <textarea
                id={field.name()}
                name={field.name()}
                value={component.form.value(field).to_string()}
                placeholder="e.g., Affordable mental health support without the stigma"
                rows="4"
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::SetField(field, input.value())
                })}
                required=true
            />
            <small>{"The core promise or hook for your campaign"}</small>
        </div>
    }
}
