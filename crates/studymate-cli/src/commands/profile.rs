//! Profile listings: liked posts and own posts, numbered pagination.

use anyhow::Result;
use studymate_api::ApiClient;
use studymate_shared::constants::PROFILE_PAGE_SIZE;
use studymate_shared::types::{Page, Post};
use studymate_store::Database;

use super::print_post_line;

pub async fn run(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    let tab = args.first().map(String::as_str);

    if tab == Some("user") {
        return user(client, db, &args[1..]).await;
    }

    let page: u32 = args
        .get(1)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1);

    let email = db.current_user_email_or_default()?;

    let result = match tab {
        Some("liked") => client.liked_posts(&email, page, PROFILE_PAGE_SIZE).await,
        Some("mine") => client.my_posts(&email, page, PROFILE_PAGE_SIZE).await,
        _ => {
            eprintln!("Usage: studymate profile <liked|mine|user> [args]");
            return Ok(());
        }
    };

    match result {
        Ok(listing) => print_page(db, &listing)?,
        Err(err) => println!("Could not load the listing: {err}"),
    }
    Ok(())
}

/// Another user's public profile: header plus their latest posts.
async fn user(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    let Some(email) = args.first() else {
        eprintln!("Usage: studymate profile user <email> [page]");
        return Ok(());
    };
    let page: u32 = args
        .get(1)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1);

    let profile = match client.user(email).await {
        Ok(profile) => profile,
        Err(err) => {
            println!("Could not load {email}: {err}");
            return Ok(());
        }
    };
    println!(
        "{} <{}>  {} posts, {} followers, {} following",
        profile.name,
        profile.email,
        profile.post_count,
        profile.follower_count,
        profile.following_count
    );

    let viewer = db.current_user_email_or_default()?;
    match client
        .user_posts(email, Some(&viewer), page, PROFILE_PAGE_SIZE)
        .await
    {
        Ok(posts) => {
            let liked = db.liked_posts()?;
            for post in &posts.content {
                print_post_line(post, liked.contains(&post.id));
            }
            if !posts.last {
                println!("-- more on page {} --", page + 1);
            }
        }
        Err(err) => println!("Could not load posts: {err}"),
    }
    Ok(())
}

fn print_page(db: &Database, listing: &Page<Post>) -> Result<()> {
    if listing.items.is_empty() {
        println!("Nothing here yet.");
        return Ok(());
    }

    let liked = db.liked_posts()?;
    for post in &listing.items {
        print_post_line(post, liked.contains(&post.id));
    }

    println!(
        "page {} of {} ({} total)",
        listing.current, listing.total_page, listing.total_count
    );
    if listing.next {
        println!("next: page {}", listing.next_page);
    }
    Ok(())
}
