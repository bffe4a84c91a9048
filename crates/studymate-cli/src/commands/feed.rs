//! Feed browsing: search, sort, incremental paging.

use anyhow::Result;
use studymate_api::ApiClient;
use studymate_feed::{FeedController, LoadOutcome};
use studymate_shared::types::SortMode;
use studymate_store::Database;

use super::{flag_value, print_post_line};

pub async fn run(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    let sort = match flag_value(args, "--sort") {
        Some(raw) => match SortMode::parse(raw) {
            Some(sort) => sort,
            None => {
                eprintln!("Unknown sort mode '{raw}' (latest, popular, views)");
                return Ok(());
            }
        },
        None => SortMode::Latest,
    };
    let keyword = flag_value(args, "--search");
    let pages: u32 = flag_value(args, "--pages")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1);

    // Executed searches join the local history.
    if let Some(keyword) = keyword {
        db.record_search(keyword)?;
    }

    let liked = db.liked_posts()?;

    let mut feed = FeedController::new();
    feed.reset(sort, keyword);

    for _ in 0..pages {
        match feed.load_next(client).await {
            LoadOutcome::Loaded { .. } => {}
            LoadOutcome::Skipped => break,
            LoadOutcome::Failed => {
                println!("Could not load the feed; try again.");
                break;
            }
        }
    }

    if feed.posts().is_empty() {
        match keyword {
            Some(keyword) => println!("No results for \"{keyword}\"."),
            None => println!("No posts yet."),
        }
        return Ok(());
    }

    for post in feed.posts() {
        print_post_line(post, liked.contains(&post.id));
    }
    if feed.is_exhausted() {
        println!("-- end of feed --");
    }
    Ok(())
}
