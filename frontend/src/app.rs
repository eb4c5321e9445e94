//! Application shell.
//!
//! Owns the loaded configuration, the saved campaign list and the result
//! bundle on display. Every bundle handed to the results dashboard gets a
//! fresh epoch so the dashboard can tell a new bundle from a re-render.
//!
//! Image URLs generated by the dashboard are written back into that bundle,
//! and the workspace (form or dashboard) stays mounted while the saved list
//! is open, so neither generated images nor pending requests are lost by
//! switching views.

use common::model::campaign::SavedCampaign;
use common::model::config::AppConfig;
use common::model::content::ResultBundle;
use common::storage::{CampaignStore, JsonCampaignStore};
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::api;
use crate::components::campaign_form::CampaignFormComponent;
use crate::components::results::{ImageApplied, LoadedResults, ResultsDashboard, ResultsSource};
use crate::components::saved_campaigns::SavedCampaigns;
use crate::notify::show_toast;
use crate::storage::LocalStorageBackend;
use crate::theme::Theme;

pub enum Msg {
    ConfigLoaded(AppConfig),
    Generated(ResultBundle),
    ImageApplied(ImageApplied),
    NewCampaign,
    ToggleTheme,
    ToggleSaved,
    SaveCampaign(SavedCampaign),
    DeleteCampaign(usize),
    LoadCampaign(usize),
}

pub struct App {
    config: Option<AppConfig>,
    store: JsonCampaignStore<LocalStorageBackend>,
    saved: Vec<SavedCampaign>,
    results: Option<LoadedResults>,
    next_epoch: u64,
    show_saved: bool,
    theme: Theme,
}

/// What the main area renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Panels {
    saved_list: bool,
    /// The workspace is hidden, never unmounted, while the saved list shows.
    workspace_hidden: bool,
}

impl Panels {
    fn for_view(show_saved: bool) -> Self {
        Self {
            saved_list: show_saved,
            workspace_hidden: show_saved,
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_config().await {
                Ok(config) => link.send_message(Msg::ConfigLoaded(config)),
                // The form keeps showing its loading placeholder.
                Err(err) => error!(format!("Failed to load config: {}", err)),
            }
        });

        let store = JsonCampaignStore::new(LocalStorageBackend);
        let saved = store.list();
        Self {
            config: None,
            store,
            saved,
            results: None,
            next_epoch: 0,
            show_saved: false,
            theme: Theme::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.config = Some(config);
                true
            }
            Msg::Generated(bundle) => {
                self.show_results(ResultsSource::Generated(bundle));
                true
            }
            Msg::ImageApplied(applied) => {
                if let Some(results) = &mut self.results {
                    results.record_image(applied);
                }
                // The dashboard already shows the image.
                false
            }
            Msg::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.theme.apply();
                true
            }
            Msg::NewCampaign => {
                self.results = None;
                self.show_saved = false;
                true
            }
            Msg::ToggleSaved => {
                self.show_saved = !self.show_saved;
                true
            }
            Msg::SaveCampaign(snapshot) => match self.store.append(snapshot) {
                Ok(campaigns) => {
                    self.saved = campaigns;
                    show_toast("Campaign saved successfully!");
                    true
                }
                Err(err) => {
                    error!(format!("Saving campaign failed: {}", err));
                    show_toast("Could not save the campaign. Storage may be full.");
                    false
                }
            },
            Msg::DeleteCampaign(index) => match self.store.remove_at(index) {
                Ok(campaigns) => {
                    self.saved = campaigns;
                    true
                }
                Err(err) => {
                    error!(format!("Deleting campaign {} failed: {}", index, err));
                    show_toast("Could not delete the campaign.");
                    false
                }
            },
            Msg::LoadCampaign(index) => match self.saved.get(index).cloned() {
                Some(campaign) => {
                    log!(format!("Loading saved campaign '{}'", campaign.title()));
                    self.show_results(ResultsSource::Saved(campaign));
                    true
                }
                None => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="app">
                <header class="app-header">
                    <div class="header-content">
                        <h1>{"Campaign Content Studio"}</h1>
                        <p class="header-subtitle">{"Generate compliant, platform-ready ad copy and visuals"}</p>
                    </div>
                    <div class="header-actions">
                        <button
                            class="header-button theme-toggle"
                            title={self.theme.toggle_title()}
                            onclick={link.callback(|_| Msg::ToggleTheme)}
                        >
                            { self.theme.toggle_icon() }
                        </button>
                        if self.results.is_some() {
                            <button class="header-button" onclick={link.callback(|_| Msg::NewCampaign)}>
                                {"New Campaign"}
                            </button>
                        }
                        <button class="header-button" onclick={link.callback(|_| Msg::ToggleSaved)}>
                            {
                                if self.show_saved {
                                    "Back".to_string()
                                } else {
                                    format!("Saved Campaigns ({})", self.saved.len())
                                }
                            }
                        </button>
                    </div>
                </header>

                <main class="app-main">
                    { self.main_view(ctx) }
                </main>
            </div>
        }
    }
}

impl App {
    fn show_results(&mut self, source: ResultsSource) {
        self.next_epoch += 1;
        self.results = Some(LoadedResults {
            epoch: self.next_epoch,
            source,
        });
        self.show_saved = false;
    }

    fn main_view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let panels = Panels::for_view(self.show_saved);

        let workspace = match &self.results {
            Some(results) => html! {
                <ResultsDashboard
                    results={results.clone()}
                    on_save={link.callback(Msg::SaveCampaign)}
                    on_image_applied={link.callback(Msg::ImageApplied)}
                />
            },
            None => html! {
                <CampaignFormComponent
                    config={self.config.clone()}
                    on_generated={link.callback(Msg::Generated)}
                />
            },
        };

        html! {
            <>
                if panels.saved_list {
                    <SavedCampaigns
                        campaigns={self.saved.clone()}
                        on_load={link.callback(Msg::LoadCampaign)}
                        on_delete={link.callback(Msg::DeleteCampaign)}
                    />
                }
                <div class="workspace" hidden={panels.workspace_hidden}>
                    { workspace }
                </div>
            </>
        }
    }
}
