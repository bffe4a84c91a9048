//! Leaderboard scoring.
//!
//! The score is a fixed linear formula over the counters the user
//! listing already carries; the backend does not rank, the client does.

use crate::constants::RANKING_SIZE;
use crate::types::User;

/// Activity score: posts weigh 10, followers weigh 5.
pub fn score(user: &User) -> i64 {
    user.post_count * 10 + user.follower_count * 5
}

/// Sort users by descending score and keep the podium's top five.
///
/// Ties keep the server's original order (stable sort).
pub fn podium(mut users: Vec<User>) -> Vec<User> {
    users.sort_by_key(|u| std::cmp::Reverse(score(u)));
    users.truncate(RANKING_SIZE);
    users
}
