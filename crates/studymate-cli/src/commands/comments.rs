//! Comment commands: list, add, edit, delete.

use anyhow::Result;
use studymate_api::ApiClient;
use studymate_shared::constants::COMMENT_PAGE_SIZE;
use studymate_shared::types::CommentCreate;
use studymate_store::Database;

use super::confirm;

pub async fn run(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("list") => list(client, db, &args[1..]).await,
        Some("add") => add(client, db, &args[1..]).await,
        Some("edit") => edit(client, db, &args[1..]).await,
        Some("delete") => delete(client, db, &args[1..]).await,
        _ => {
            eprintln!("Usage: studymate comment <list|add|edit|delete> ...");
            Ok(())
        }
    }
}

async fn list(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    let Some(post_id) = args.first().and_then(|raw| raw.parse::<i64>().ok()) else {
        eprintln!("Usage: studymate comment list <post-id>");
        return Ok(());
    };
    let email = db.current_user_email_or_default()?;
    let page: u32 = args
        .get(1)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1);

    match client
        .comments(post_id, Some(&email), page, COMMENT_PAGE_SIZE)
        .await
    {
        Ok(comments) => {
            if comments.content.is_empty() {
                println!("No comments.");
                return Ok(());
            }
            for comment in &comments.content {
                println!(
                    "[{}] {} ({}): {}",
                    comment.id, comment.author_name, comment.created_at, comment.content
                );
            }
            if !comments.last {
                println!("-- more on page {} --", page + 1);
            }
        }
        Err(err) => println!("Could not load comments: {err}"),
    }
    Ok(())
}

async fn add(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    let (Some(post_id), Some(text)) = (
        args.first().and_then(|raw| raw.parse::<i64>().ok()),
        args.get(1),
    ) else {
        eprintln!("Usage: studymate comment add <post-id> <text>");
        return Ok(());
    };
    if text.trim().is_empty() {
        println!("Comment text is required.");
        return Ok(());
    }

    let email = db.current_user_email_or_default()?;
    let body = CommentCreate {
        content: text.trim().to_string(),
    };

    match client.create_comment(post_id, &email, &body).await {
        Ok(comment) => println!("Comment #{} added.", comment.id),
        Err(err) => println!("Comment failed: {err}"),
    }
    Ok(())
}

async fn edit(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    let (Some(comment_id), Some(text)) = (
        args.first().and_then(|raw| raw.parse::<i64>().ok()),
        args.get(1),
    ) else {
        eprintln!("Usage: studymate comment edit <comment-id> <text>");
        return Ok(());
    };
    if text.trim().is_empty() {
        println!("Comment text is required.");
        return Ok(());
    }

    let email = db.current_user_email_or_default()?;
    let body = CommentCreate {
        content: text.trim().to_string(),
    };

    match client.update_comment(comment_id, &email, &body).await {
        Ok(comment) => println!("Comment #{} updated.", comment.id),
        Err(err) => println!("Comment update failed: {err}"),
    }
    Ok(())
}

async fn delete(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    let Some(comment_id) = args.first().and_then(|raw| raw.parse::<i64>().ok()) else {
        eprintln!("Usage: studymate comment delete <comment-id>");
        return Ok(());
    };

    if !confirm(&format!("Delete comment #{comment_id}?")) {
        println!("Cancelled.");
        return Ok(());
    }

    let email = db.current_user_email_or_default()?;
    match client.delete_comment(comment_id, &email).await {
        Ok(_) => println!("Comment #{comment_id} deleted."),
        Err(err) => println!("Comment deletion failed: {err}"),
    }
    Ok(())
}
