//! Update function for the results dashboard.
//!
//! Selections are applied synchronously. Selecting an image may yield an
//! `ImageJob`, which is spawned here; its completion comes back as
//! `Msg::ImageFinished` and is applied to the session even when the prompt has
//! been deselected in the meantime. Applied URLs are also reported to the
//! parent, which keeps them across remounts.

use chrono::Utc;
use common::studio::{ImageJob, ImageOutcome};
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::notify::{alert, copy_to_clipboard};
use crate::tops_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::props::ImageApplied;
use super::state::ResultsDashboard;

const IMAGE_FAILED_NOTICE: &str = "Failed to generate image. Please try again.";

pub fn update(component: &mut ResultsDashboard, ctx: &Context<ResultsDashboard>, msg: Msg) -> bool {
    match msg {
        Msg::SelectCopy(index) => match component.session.select_copy(index) {
            Ok(()) => true,
            Err(err) => {
                error!(err.to_string());
                false
            }
        },
        Msg::SelectImage(index) => match component.session.select_image(index) {
            Ok(job) => {
                if let Some(job) = job {
                    spawn_image_job(ctx, job);
                }
                true
            }
            Err(err) => {
                error!(err.to_string());
                false
            }
        },
        Msg::RetryImage => {
            if let Some(job) = component.session.retry_selected_image() {
                component.failed_image = None;
                spawn_image_job(ctx, job);
            }
            true
        }
        Msg::ImageFinished(job, result) => {
            match component.session.complete_image(&job, result) {
                ImageOutcome::Applied { key } => {
                    if component.failed_image == Some(key) {
                        component.failed_image = None;
                    }
                    let stored = component.session.bundle().image_prompts.get(key);
                    if let Some(url) = stored.and_then(|prompt| prompt.image_url.clone()) {
                        ctx.props().on_image_applied.emit(ImageApplied {
                            epoch: job.epoch,
                            key,
                            url,
                        });
                    }
                }
                ImageOutcome::Failed { message } => {
                    error!(format!("Image generation failed for prompt {}: {}", job.key, message));
                    component.failed_image = Some(job.key);
                    alert(IMAGE_FAILED_NOTICE);
                }
                ImageOutcome::Discarded => {
                    log!(format!("Dropped image result for an earlier bundle (epoch {})", job.epoch));
                }
            }
            true
        }
        Msg::Save => {
            if let Some(snapshot) = component.session.snapshot(Utc::now()) {
                ctx.props().on_save.emit(snapshot);
            }
            false
        }
        Msg::OpenGuidelines => {
            open_top_sheet(component.guidelines_ref.clone());
            false
        }
        Msg::CloseGuidelines => {
            close_top_sheet(component.guidelines_ref.clone());
            false
        }
        Msg::CopyText(text, confirmation) => {
            copy_to_clipboard(text, confirmation);
            false
        }
    }
}

fn spawn_image_job(ctx: &Context<ResultsDashboard>, job: ImageJob) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api::generate_image(&job.request)
            .await
            .map_err(|err| err.to_string());
        link.send_message(Msg::ImageFinished(job, result));
    });
}
