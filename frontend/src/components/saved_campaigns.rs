//! List of saved campaigns with load and delete actions.
//!
//! Campaigns are shown in storage order; the position in the list is what the
//! callbacks report back to the parent.

use common::model::campaign::SavedCampaign;
use yew::prelude::*;

use crate::card_grid::CardGrid;

#[derive(Properties, PartialEq)]
pub struct SavedCampaignsProps {
    pub campaigns: Vec<SavedCampaign>,
    pub on_load: Callback<usize>,
    pub on_delete: Callback<usize>,
}

pub struct SavedCampaigns;

impl Component for SavedCampaigns {
    type Message = ();
    type Properties = SavedCampaignsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SavedCampaigns
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        if props.campaigns.is_empty() {
            return html! {
                <div class="saved-campaigns empty">
                    <h2>{"Saved Campaigns"}</h2>
                    <p class="empty-state">{"No saved campaigns yet. Generate a campaign and save it to see it here."}</p>
                </div>
            };
        }

        html! {
            <div class="saved-campaigns">
                <h2>{"Saved Campaigns"}</h2>
                <CardGrid class="saved-grid">
                    { for props.campaigns.iter().enumerate().map(|(index, campaign)| campaign_card(props, index, campaign)) }
                </CardGrid>
            </div>
        }
    }
}

fn campaign_card(props: &SavedCampaignsProps, index: usize, campaign: &SavedCampaign) -> Html {
    let on_load = props.on_load.reform(move |_: MouseEvent| index);
    let on_delete = props.on_delete.reform(move |_: MouseEvent| index);

    html! {
        <div class="saved-card" key={format!("{}-{}", index, campaign.saved_at.to_rfc3339())}>
            <div class="saved-card-header">
                <h3>{ campaign.title() }</h3>
                <span class="saved-date">{ campaign.saved_on() }</span>
            </div>
            <span class="meta-badge">{ &campaign.bundle.brief.objective }</span>
            {
                match &campaign.selected_copy {
                    Some(copy) => html! { <p class="saved-copy">{ copy.summary() }</p> },
                    None => html! {},
                }
            }
            {
                match campaign.selected_image.as_ref().and_then(|image| image.rendered_url()) {
                    Some(url) => html! { <img class="saved-image" src={url.to_string()} alt="Campaign visual" /> },
                    None => html! {},
                }
            }
            <div class="saved-card-actions">
                <button class="load-button" onclick={on_load}>{"Load"}</button>
                <button class="delete-button" onclick={on_delete}>{"Delete"}</button>
            </div>
        </div>
    }
}
