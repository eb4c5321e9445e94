//! Overlay sheet shown above the page, toggled through its `show` class.

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Delay before toggling, so the sheet's CSS transition can run.
const TOGGLE_DELAY_MS: u32 = 50;

pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(sheet_ref: NodeRef) {
    toggle(sheet_ref, true);
}

pub fn close_top_sheet(sheet_ref: NodeRef) {
    toggle(sheet_ref, false);
}

fn toggle(sheet_ref: NodeRef, show: bool) {
    Timeout::new(TOGGLE_DELAY_MS, move || {
        if let Some(sheet) = sheet_ref.cast::<web_sys::Element>() {
            let classes = sheet.class_list();
            let _ = if show {
                classes.add_1("show")
            } else {
                classes.remove_1("show")
            };
        }
    })
    .forget();
}
