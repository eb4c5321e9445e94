//! Preview of the selected copy and image as they would appear on the target
//! platform, with the save action and the compliance notices for the industry.

use common::compliance::PreviewCompliance;
use common::model::content::{CopyVariation, ImagePrompt};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::results::{Msg, ResultsDashboard};

const REVIEW_WARNING: &str =
    "Compliance review required before publishing. This content has been flagged for review by your legal or compliance team.";

pub fn platform_preview(component: &ResultsDashboard, link: &Scope<ResultsDashboard>) -> Html {
    let session = &component.session;
    let platform = &session.bundle().brief.platform;

    html! {
        <div class="platform-preview-section">
            <div class="preview-header">
                <h3>{ format!("{} Preview", platform) }</h3>
                <button class="save-button" onclick={link.callback(|_| Msg::Save)}>
                    {"Save Campaign"}
                </button>
            </div>

            <div class="preview-container">
                <div class="preview-card">
                    {
                        match session.selected_image() {
                            Some(image) => preview_image(component, link, image),
                            None => html! {},
                        }
                    }
                    {
                        match session.selected_copy() {
                            Some(copy) => preview_copy(copy),
                            None => html! {},
                        }
                    }
                </div>

                {
                    match session.compliance() {
                        Some(compliance) if !compliance.is_empty() => compliance_notices(compliance),
                        _ => html! {},
                    }
                }
            </div>
        </div>
    }
}

fn preview_image(component: &ResultsDashboard, link: &Scope<ResultsDashboard>, image: &ImagePrompt) -> Html {
    let generating = component
        .session
        .selection()
        .image()
        .is_some_and(|key| component.session.is_generating(key));

    if let Some(url) = image.rendered_url() {
        return html! {
            <div class="preview-image">
                <img src={url.to_string()} alt={image.prompt.clone()} />
            </div>
        };
    }

    html! {
        <div class="preview-image placeholder">
            if generating {
                <div class="image-generating">
                    <span class="spinner"></span>
                    <p>{"Generating image..."}</p>
                </div>
            } else {
                <div class="image-placeholder">
                    <p class="placeholder-ratio">{ format!("Image {}", image.ratio) }</p>
                    <p class="placeholder-style">{ &image.style }</p>
                    <p class="placeholder-mood">{ &image.mood }</p>
                    if component.can_retry_selected() {
                        <button class="retry-button" onclick={link.callback(|_| Msg::RetryImage)}>
                            {"Retry Image Generation"}
                        </button>
                    }
                </div>
            }
        </div>
    }
}

fn preview_copy(copy: &CopyVariation) -> Html {
    html! {
        <div class="preview-content">
            <h4 class="preview-headline">{ &copy.headline }</h4>
            <p class="preview-body">{ &copy.primary_text }</p>
            <button class="preview-cta">{ &copy.cta }</button>
            {
                match &copy.performance_analysis {
                    Some(analysis) => html! {
                        <div class="preview-insights">
                            <strong>{"Performance Insights: "}</strong>
                            <span>{ &analysis.label }</span>
                            if !analysis.details.is_empty() {
                                <p>{ &analysis.details }</p>
                            }
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

fn compliance_notices(compliance: PreviewCompliance) -> Html {
    html! {
        <div class="compliance-section">
            {
                match compliance.disclaimer {
                    Some(disclaimer) => html! {
                        <div class="disclaimer-box">
                            <strong>{"Disclaimer: "}</strong>
                            <p>{ disclaimer }</p>
                        </div>
                    },
                    None => html! {},
                }
            }
            if compliance.review_required {
                <div class="compliance-warning">
                    <strong>{"Warning: "}</strong>
                    { REVIEW_WARNING }
                </div>
            }
        </div>
    }
}
