//! v001 -- Initial schema creation.
//!
//! Creates the four session tables: `session`, `liked_posts`,
//! `recent_searches`, and `my_posts`.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Scalar session values (currentUserEmail, ...)
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS session (
    key   TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);

-- ----------------------------------------------------------------
-- Posts the local user has liked
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS liked_posts (
    post_id INTEGER PRIMARY KEY NOT NULL
);

-- ----------------------------------------------------------------
-- Search history, most recent first by searched_at
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS recent_searches (
    keyword     TEXT PRIMARY KEY NOT NULL,
    searched_at INTEGER NOT NULL              -- unix millis
);

CREATE INDEX IF NOT EXISTS idx_recent_searches_at
    ON recent_searches(searched_at DESC);

-- ----------------------------------------------------------------
-- Posts authored locally (legacy key, kept for parity)
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS my_posts (
    post_id INTEGER PRIMARY KEY NOT NULL
);
"#;

pub fn up(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(UP_SQL)
}
