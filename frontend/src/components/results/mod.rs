//! Results dashboard: shows one result bundle, tracks the selected copy
//! variation and image prompt, runs image generation for selected prompts and
//! builds the snapshot saved by the user.
//!
//! A change of `results.epoch` in the props replaces the whole session; any
//! image job still in flight for the previous epoch is dropped on arrival.

use yew::prelude::*;

mod messages;
mod props;
mod sections;
mod state;
mod update;
mod view;

use crate::tops_sheet::open_top_sheet;

pub use messages::Msg;
pub use props::{ImageApplied, LoadedResults, ResultsProps, ResultsSource};
pub use state::ResultsDashboard;

impl Component for ResultsDashboard {
    type Message = Msg;
    type Properties = ResultsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ResultsDashboard::new(ctx.props().results.clone())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let results = &ctx.props().results;
        if results.epoch != old_props.results.epoch {
            let guidelines_ref = self.guidelines_ref.clone();
            *self = ResultsDashboard::new(results.clone());
            self.guidelines_ref = guidelines_ref;
            open_top_sheet(self.guidelines_ref.clone());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            open_top_sheet(self.guidelines_ref.clone());
        }
    }
}
