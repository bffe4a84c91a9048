//! Leaderboard: top five users by activity score.

use anyhow::Result;
use studymate_api::ApiClient;
use studymate_shared::ranking::{podium, score};

pub async fn run(client: &ApiClient) -> Result<()> {
    let users = match client.users().await {
        Ok(users) => users,
        Err(err) => {
            println!("Could not load the ranking: {err}");
            return Ok(());
        }
    };

    let ranked = podium(users);
    if ranked.is_empty() {
        println!("No users yet.");
        return Ok(());
    }

    for (place, user) in ranked.iter().enumerate() {
        println!(
            "{}. {} <{}> {} pts ({} posts, {} followers)",
            place + 1,
            user.name,
            user.email,
            score(user),
            user.post_count,
            user.follower_count
        );
    }
    Ok(())
}
