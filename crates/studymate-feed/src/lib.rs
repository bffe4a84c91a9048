//! # studymate-feed
//!
//! The incrementally-loaded feed: paging cursor, sort mode, search
//! keyword and the exhausted flag, kept consistent across loads.  The
//! controller is trigger-agnostic; whatever stood at the bottom of the
//! browser viewport becomes an explicit [`FeedController::load_next`]
//! call here.

pub mod controller;

pub use controller::{FeedController, LoadOutcome, PostSource};
