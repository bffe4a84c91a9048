//! # studymate-store
//!
//! Local session storage for the StudyMate client, backed by SQLite.
//!
//! The browser original kept session identity and per-user flags in
//! `localStorage`; this crate gives those keys a durable home in the
//! platform data directory.  The crate exposes a synchronous
//! [`Database`] handle wrapping a `rusqlite::Connection` with typed
//! helpers for every stored key: the current user email, the liked-post
//! set, the recent-search history, and the own-post id set.

pub mod database;
pub mod migrations;
pub mod session;

mod error;

pub use database::Database;
pub use error::StoreError;
