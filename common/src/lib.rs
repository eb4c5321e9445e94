//! Shared model and client-side state for the campaign content studio.
//!
//! Everything in this crate is plain Rust so it can be used by the Yew
//! frontend (compiled to wasm) and by the actix backend alike.
//!
//! - `model`: wire types exchanged with the content-generation API.
//! - `requests`: request/response payloads for the HTTP endpoints.
//! - `catalog`: the industries, platforms and objectives offered by `/api/config`.
//! - `compliance`: industry disclaimers and compliance-review rules.
//! - `form`: the campaign brief form state.
//! - `studio`: selection state, the image generation trigger and the results session.
//! - `storage`: the saved-campaign store and its key-value backends.

pub mod catalog;
pub mod compliance;
pub mod form;
pub mod model;
pub mod requests;
pub mod storage;
pub mod studio;
