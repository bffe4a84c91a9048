//! Typed accessors for the session keys.
//!
//! The discipline everywhere is read-before-mutate, write-whole-value
//! back: safe for one process, last-writer-wins across two (an accepted
//! risk in this domain, the browser had the same behaviour across tabs).

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;
use studymate_shared::constants::{DEFAULT_USER_EMAIL, RECENT_SEARCH_LIMIT};

use crate::database::Database;
use crate::error::Result;

const KEY_CURRENT_USER_EMAIL: &str = "currentUserEmail";

impl Database {
    // -- current user -------------------------------------------------

    /// The locally selected user identity, if any.
    pub fn current_user_email(&self) -> Result<Option<String>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT value FROM session WHERE key = ?1")?;
        let mut rows = stmt.query(params![KEY_CURRENT_USER_EMAIL])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// The locally selected user identity, falling back to the shared
    /// placeholder when none has been set.
    pub fn current_user_email_or_default(&self) -> Result<String> {
        Ok(self
            .current_user_email()?
            .unwrap_or_else(|| DEFAULT_USER_EMAIL.to_string()))
    }

    pub fn set_current_user_email(&self, email: &str) -> Result<()> {
        self.conn().execute(
            "INSERT INTO session (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![KEY_CURRENT_USER_EMAIL, email],
        )?;
        Ok(())
    }

    // -- liked posts --------------------------------------------------

    pub fn is_liked(&self, post_id: i64) -> Result<bool> {
        let count: u32 = self.conn().query_row(
            "SELECT COUNT(*) FROM liked_posts WHERE post_id = ?1",
            params![post_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Record or clear a like for a post.  Both directions are
    /// idempotent.
    pub fn set_liked(&self, post_id: i64, liked: bool) -> Result<()> {
        if liked {
            self.conn().execute(
                "INSERT OR IGNORE INTO liked_posts (post_id) VALUES (?1)",
                params![post_id],
            )?;
        } else {
            self.conn().execute(
                "DELETE FROM liked_posts WHERE post_id = ?1",
                params![post_id],
            )?;
        }
        Ok(())
    }

    pub fn liked_posts(&self) -> Result<HashSet<i64>> {
        let mut stmt = self.conn().prepare("SELECT post_id FROM liked_posts")?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut ids = HashSet::new();
        for row in rows {
            ids.insert(row?);
        }
        Ok(ids)
    }

    // -- recent searches ----------------------------------------------

    /// Record an executed search keyword: deduplicated, moved to the
    /// front, history capped at [`RECENT_SEARCH_LIMIT`] entries.
    pub fn record_search(&self, keyword: &str) -> Result<()> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(());
        }

        self.conn().execute(
            "INSERT INTO recent_searches (keyword, searched_at) VALUES (?1, ?2)
             ON CONFLICT(keyword) DO UPDATE SET searched_at = excluded.searched_at",
            params![keyword, now_millis()],
        )?;

        // Evict everything past the cap, oldest first.
        self.conn().execute(
            "DELETE FROM recent_searches WHERE keyword NOT IN (
                 SELECT keyword FROM recent_searches
                 ORDER BY searched_at DESC LIMIT ?1
             )",
            params![RECENT_SEARCH_LIMIT as i64],
        )?;
        Ok(())
    }

    /// Search history, most recent first.
    pub fn recent_searches(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn().prepare(
            "SELECT keyword FROM recent_searches ORDER BY searched_at DESC, keyword",
        )?;
        let rows = stmt.query_map([], |row| row.get(0))?;

        let mut keywords = Vec::new();
        for row in rows {
            keywords.push(row?);
        }
        Ok(keywords)
    }

    // -- own post ids (legacy) ----------------------------------------

    pub fn add_my_post(&self, post_id: i64) -> Result<()> {
        self.conn().execute(
            "INSERT OR IGNORE INTO my_posts (post_id) VALUES (?1)",
            params![post_id],
        )?;
        Ok(())
    }

    pub fn remove_my_post(&self, post_id: i64) -> Result<()> {
        self.conn()
            .execute("DELETE FROM my_posts WHERE post_id = ?1", params![post_id])?;
        Ok(())
    }

    pub fn is_my_post(&self, post_id: i64) -> Result<bool> {
        let count: u32 = self.conn().query_row(
            "SELECT COUNT(*) FROM my_posts WHERE post_id = ?1",
            params![post_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

/// Wall-clock milliseconds used to order the search history.  Ties are
/// broken by keyword, so two inserts in the same millisecond stay
/// deterministic.
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
