//! Sections of the results dashboard, rendered as plain view functions over
//! the dashboard state.

mod copy_variations;
mod guidelines;
mod image_suggestions;
mod platform_preview;

pub use copy_variations::copy_variations;
pub use guidelines::guidelines_sheet;
pub use image_suggestions::image_suggestions;
pub use platform_preview::platform_preview;
