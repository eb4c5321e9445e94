//! View rendering for the results dashboard.
//!
//! Layout, top to bottom: campaign meta badges with the guidelines button,
//! the guidelines sheet, the saved selection of a reopened campaign, the copy
//! and image sections side by side, and the platform preview once anything is
//! selected.

use common::studio::RestoredSelection;
use yew::prelude::*;

use crate::card_grid::CardGrid;

use super::messages::Msg;
use super::sections::{copy_variations, guidelines_sheet, image_suggestions, platform_preview};
use super::state::ResultsDashboard;

pub fn view(component: &ResultsDashboard, ctx: &Context<ResultsDashboard>) -> Html {
    let link = ctx.link();
    let brief = &component.session.bundle().brief;

    html! {
        <div class="results-dashboard">
            <div class="results-header">
                <h2>{"Generated Campaign Content"}</h2>
                <div class="campaign-meta">
                    <span class="meta-badge">{ &brief.industry }</span>
                    <span class="meta-badge">{ &brief.platform }</span>
                    <span class="meta-badge">{ &brief.objective }</span>
                    <button
                        class="guidelines-button"
                        title="View Guidelines & Disclaimers"
                        onclick={link.callback(|_| Msg::OpenGuidelines)}
                    >
                        {"Guidelines"}
                    </button>
                </div>
            </div>

            { guidelines_sheet(component, link) }

            {
                match component.session.restored() {
                    Some(restored) => restored_selection(restored),
                    None => html! {},
                }
            }

            <CardGrid class="results-grid" min_width={420}>
                <div class="results-section">{ copy_variations(component, link) }</div>
                <div class="results-section">{ image_suggestions(component, link) }</div>
            </CardGrid>

            {
                if component.session.selection().has_selection() {
                    platform_preview(component, link)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Selections stored with a reopened campaign. They are informational only;
/// the live selection starts empty.
fn restored_selection(restored: &RestoredSelection) -> Html {
    if restored.copy.is_none() && restored.image.is_none() {
        return html! {};
    }
    html! {
        <div class="restored-selection">
            <h4>{ format!("Selection saved on {}", restored.saved_at.format("%Y-%m-%d %H:%M")) }</h4>
            {
                match &restored.copy {
                    Some(copy) => html! { <p><strong>{"Copy: "}</strong>{ copy.summary() }</p> },
                    None => html! {},
                }
            }
            {
                match restored.image.as_ref().and_then(|image| image.rendered_url()) {
                    Some(url) => html! { <img class="restored-image" src={url.to_string()} alt="Saved campaign visual" /> },
                    None => html! {},
                }
            }
        </div>
    }
}
