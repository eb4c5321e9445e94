use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::CampaignFormComponent;

pub fn update(
    component: &mut CampaignFormComponent,
    ctx: &Context<CampaignFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetField(field, value) => {
            component.form.set_field(field, value);
            true
        }
        Msg::Submit => {
            let brief = match component.form.begin_submit() {
                Ok(brief) => brief,
                Err(_) => return false,
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::generate(&brief).await {
                    Ok(bundle) => link.send_message(Msg::Generated(bundle)),
                    Err(err) => {
                        error!(format!("Campaign generation failed: {}", err));
                        link.send_message(Msg::Failed(err.server_message()));
                    }
                }
            });
            true
        }
        Msg::Generated(bundle) => {
            component.form.submit_succeeded();
            ctx.props().on_generated.emit(bundle);
            true
        }
        Msg::Failed(message) => {
            component.form.submit_failed(message);
            true
        }
    }
}
