/// Application name
pub const APP_NAME: &str = "StudyMate";

/// Default remote API base URL (local backend)
pub const DEFAULT_API_URL: &str = "http://localhost:8090/api/v1";

/// Header sent with every request to bypass the tunnelling proxy's
/// browser-warning interstitial page.
pub const BYPASS_HEADER_NAME: &str = "ngrok-skip-browser-warning";
pub const BYPASS_HEADER_VALUE: &str = "true";

/// Header carrying the acting user's email on /users/me/* endpoints.
pub const USER_EMAIL_HEADER: &str = "X-User-Email";

/// Maximum size of an inline image staged in the composer (10 MiB)
pub const MAX_INLINE_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Maximum post content length in plain-text characters
pub const MAX_POST_LENGTH: usize = 500;

/// Feed page size (infinite scroll)
pub const FEED_PAGE_SIZE: u32 = 20;

/// Comment list page size
pub const COMMENT_PAGE_SIZE: u32 = 10;

/// Profile (liked / own posts) page size
pub const PROFILE_PAGE_SIZE: u32 = 10;

/// Recent-search history cap, most recent first
pub const RECENT_SEARCH_LIMIT: usize = 8;

/// Leaderboard size (podium of five)
pub const RANKING_SIZE: usize = 5;

/// Fallback identity when no user has been selected locally
pub const DEFAULT_USER_EMAIL: &str = "user@example.com";
