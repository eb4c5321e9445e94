pub mod brief;
pub mod campaign;
pub mod config;
pub mod content;
