//! Decides when selecting an image prompt should request a rendered image.
//!
//! The trigger is a small reducer: callers report selections and request
//! outcomes, and it answers with at most one `ImageJob` to execute. It never
//! performs I/O itself.
//!
//! Rules:
//! - a prompt with an empty `prompt` text or an existing `image_url` never fires;
//! - a prompt equal to the last successfully generated one never fires;
//! - at most one request per prompt text is outstanding at any time.

use std::collections::HashSet;

use crate::model::content::ImagePrompt;
use crate::requests::GenerateImageRequest;

/// A pending image generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageJob {
    /// Identifies the results session the request was issued for.
    pub epoch: u64,
    /// Index of the image prompt within that session's bundle.
    pub key: usize,
    pub request: GenerateImageRequest,
}

#[derive(Debug, Clone, Default)]
pub struct ImageTrigger {
    last_generated: Option<String>,
    in_flight: HashSet<String>,
}

impl ImageTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when `prompt` (at position `key`) becomes the selected image.
    pub fn on_selected(&mut self, epoch: u64, key: usize, prompt: &ImagePrompt) -> Option<ImageJob> {
        if prompt.has_image() {
            self.last_generated = Some(prompt.prompt.clone());
            return None;
        }
        if prompt.prompt.is_empty() || self.last_generated.as_deref() == Some(prompt.prompt.as_str()) {
            return None;
        }
        if !self.in_flight.insert(prompt.prompt.clone()) {
            return None;
        }
        Some(ImageJob {
            epoch,
            key,
            request: GenerateImageRequest::for_prompt(prompt),
        })
    }

    pub fn succeeded(&mut self, prompt: &str) {
        self.in_flight.remove(prompt);
        self.last_generated = Some(prompt.to_string());
    }

    /// A failed prompt is not remembered, so selecting it again refires.
    pub fn failed(&mut self, prompt: &str) {
        self.in_flight.remove(prompt);
    }

    pub fn is_pending(&self, prompt: &str) -> bool {
        self.in_flight.contains(prompt)
    }

    pub fn last_generated(&self) -> Option<&str> {
        self.last_generated.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::content::ImageSize;

    fn prompt(text: &str, ratio: &str) -> ImagePrompt {
        ImagePrompt {
            prompt: text.into(),
            ratio: ratio.into(),
            ..Default::default()
        }
    }

    #[test]
    fn prompt_without_image_fires_once() {
        let mut trigger = ImageTrigger::new();
        let sunset = prompt("Sunset over the city", "9:16");

        let job = trigger.on_selected(7, 2, &sunset).unwrap();
        assert_eq!(job.epoch, 7);
        assert_eq!(job.key, 2);
        assert_eq!(job.request.prompt, "Sunset over the city");
        assert_eq!(job.request.size, ImageSize::Tall);

        assert!(trigger.is_pending("Sunset over the city"));
        assert_eq!(trigger.on_selected(7, 2, &sunset), None);
    }

    #[test]
    fn prompt_with_image_never_fires() {
        let mut trigger = ImageTrigger::new();
        let mut rendered = prompt("Mountain lake", "1:1");
        rendered.image_url = Some("https://img/lake.png".into());

        assert_eq!(trigger.on_selected(0, 0, &rendered), None);
        assert_eq!(trigger.last_generated(), Some("Mountain lake"));
    }

    #[test]
    fn empty_prompt_text_never_fires() {
        let mut trigger = ImageTrigger::new();
        assert_eq!(trigger.on_selected(0, 0, &prompt("", "1:1")), None);
    }

    #[test]
    fn failure_allows_a_later_attempt() {
        let mut trigger = ImageTrigger::new();
        let city = prompt("City at night", "16:9");

        trigger.on_selected(0, 1, &city).unwrap();
        trigger.failed("City at night");
        assert!(!trigger.is_pending("City at night"));
        assert!(trigger.on_selected(0, 1, &city).is_some());
    }

    #[test]
    fn success_suppresses_requests_for_the_same_prompt_text() {
        let mut trigger = ImageTrigger::new();
        let forest = prompt("Forest trail", "4:5");

        trigger.on_selected(0, 0, &forest).unwrap();
        trigger.succeeded("Forest trail");
        assert!(!trigger.is_pending("Forest trail"));
        // A second prompt object with identical text is treated as already generated.
        assert_eq!(trigger.on_selected(0, 3, &forest), None);
    }

    #[test]
    fn distinct_prompts_may_be_in_flight_together() {
        let mut trigger = ImageTrigger::new();
        assert!(trigger.on_selected(0, 0, &prompt("A", "1:1")).is_some());
        assert!(trigger.on_selected(0, 1, &prompt("B", "1:1")).is_some());
        assert!(trigger.is_pending("A") && trigger.is_pending("B"));
    }
}
