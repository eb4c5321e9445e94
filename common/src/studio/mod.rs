//! Client-side state of a results page: which copy variation and image
//! prompt are selected, and when an image has to be generated.

pub mod image_trigger;
pub mod selection;
pub mod session;

pub use image_trigger::{ImageJob, ImageTrigger};
pub use selection::{SelectionError, SelectionState};
pub use session::{ImageOutcome, RestoredSelection, ResultsSession};
