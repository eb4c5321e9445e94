use yew::html::Scope;
use yew::prelude::*;

use crate::components::results::{Msg, ResultsDashboard};

pub fn image_suggestions(component: &ResultsDashboard, link: &Scope<ResultsDashboard>) -> Html {
    let bundle = component.session.bundle();
    let selected = component.session.selection().image();

    html! {
        <div class="image-suggestions">
            <h3>{"Image Suggestions"}</h3>
            <p class="section-description">
                { format!("{} image prompts for {}", bundle.image_prompts.len(), bundle.brief.platform) }
            </p>

            <div class="prompts-list">
                {
                    for bundle.image_prompts.iter().enumerate().map(|(index, prompt)| {
                        let prompt_text = prompt.prompt.clone();
                        html! {
                            <div
                                class={classes!("prompt-card", (selected == Some(index)).then_some("selected"))}
                                onclick={link.callback(move |_| Msg::SelectImage(index))}
                            >
                                <div class="prompt-header">
                                    <span class="prompt-number">{ format!("#{}", index + 1) }</span>
                                    <span class="ratio-badge">{ &prompt.ratio }</span>
                                    if component.session.is_generating(index) {
                                        <span class="generating-badge">{"Generating..."}</span>
                                    } else if prompt.has_image() {
                                        <span class="rendered-badge">{"Image ready"}</span>
                                    }
                                </div>

                                <div class="prompt-content">
                                    <div class="prompt-field">
                                        <label>{"Image Prompt"}</label>
                                        <p class="prompt-text">{ &prompt.prompt }</p>
                                    </div>
                                    <div class="prompt-meta">
                                        <div class="meta-item">
                                            <label>{"Style"}</label>
                                            <p>{ &prompt.style }</p>
                                        </div>
                                        <div class="meta-item">
                                            <label>{"Mood"}</label>
                                            <p>{ &prompt.mood }</p>
                                        </div>
                                    </div>
                                    if !prompt.elements.is_empty() {
                                        <div class="prompt-field">
                                            <label>{"Key Elements"}</label>
                                            <div class="elements-tags">
                                                { for prompt.elements.iter().map(|element| html! { <span class="element-tag">{ element }</span> }) }
                                            </div>
                                        </div>
                                    }
                                </div>

                                <button
                                    class="copy-button"
                                    onclick={link.callback(move |e: MouseEvent| {
                                        e.stop_propagation();
                                        Msg::CopyText(prompt_text.clone(), "Image prompt copied to clipboard!")
                                    })}
                                >
                                    {"Copy Prompt"}
                                </button>
                            </div>
                        }
                    })
                }
            </div>

            <div class="usage-note">
                <strong>{"Usage: "}</strong>
                {"Copy these prompts to use with DALL-E, Midjourney, Stable Diffusion, or share with your design team."}
            </div>
        </div>
    }
}
