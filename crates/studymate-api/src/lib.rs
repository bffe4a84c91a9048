//! # studymate-api
//!
//! Client for the remote StudyMate content API.  Every screen of the
//! original application is a thin layer over these endpoints; the
//! client owns the base URL, the tunnel-bypass header sent with every
//! request, and the error convention (JSON bodies with a `message`
//! field, generic fallback otherwise).
//!
//! The crate also provides the concrete [`studymate_compose::ImageUploader`]
//! and [`studymate_feed::PostSource`] implementations, wiring the
//! composition pipeline and the feed controller to the real backend.

pub mod client;
pub mod comments;
pub mod config;
pub mod files;
pub mod posts;
pub mod users;

mod error;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
