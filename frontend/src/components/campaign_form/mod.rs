//! Campaign brief form: collects the five brief fields and runs the
//! generation request.
//!
//! The component delegates to `update::update` and `view::view`. The request
//! itself is spawned from `update`; its completion comes back as
//! `Msg::Generated` or `Msg::Failed`. A successful bundle is handed to the
//! parent through the `on_generated` callback.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CampaignFormProps;
pub use state::CampaignFormComponent;

impl Component for CampaignFormComponent {
    type Message = Msg;
    type Properties = CampaignFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CampaignFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
