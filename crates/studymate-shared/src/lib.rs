//! # studymate-shared
//!
//! Types and pure domain helpers shared by every StudyMate crate:
//! DTOs mirrored from the remote content API, fixed constants, sort
//! modes, hashtag extraction, and leaderboard scoring.  No I/O lives
//! here.

pub mod constants;
pub mod hashtags;
pub mod ranking;
pub mod types;

pub use types::*;
