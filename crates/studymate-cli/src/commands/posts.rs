//! Post commands: show, create, edit, delete, like/unlike.
//!
//! Create and edit run the full submit flow of the original composer:
//! validate first, stage attached images, resolve inline images to
//! permanent URLs, and only then hit the post endpoint.  On resolver
//! failure nothing is persisted remotely.

use std::path::Path;

use anyhow::Result;
use studymate_api::files::UploadFile;
use studymate_api::ApiClient;
use studymate_compose::{resolve_inline_images, Document, PendingImages};
use studymate_shared::constants::{COMMENT_PAGE_SIZE, MAX_POST_LENGTH};
use studymate_shared::hashtags::extract_hashtags;
use studymate_shared::types::{PostCreate, PostUpdate, UploadKind, Visibility};
use studymate_store::Database;

use super::{confirm, flag_value, flag_values};

pub async fn run(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("show") => show(client, db, &args[1..]).await,
        Some("create") => create(client, db, &args[1..]).await,
        Some("edit") => edit(client, db, &args[1..]).await,
        Some("delete") => delete(client, db, &args[1..]).await,
        _ => {
            eprintln!("Usage: studymate post <show|create|edit|delete> ...");
            Ok(())
        }
    }
}

async fn show(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    let Some(post_id) = args.first().and_then(|raw| raw.parse::<i64>().ok()) else {
        eprintln!("Usage: studymate post show <id>");
        return Ok(());
    };
    let email = db.current_user_email_or_default()?;

    let post = match client.post(post_id, Some(&email)).await {
        Ok(post) => post,
        Err(err) => {
            println!("Could not load post {post_id}: {err}");
            return Ok(());
        }
    };

    println!("#{} by {} <{}>", post.id, post.author_name, post.author_email);
    println!(
        "♥ {}   💬 {}   👁 {}   posted {}",
        post.like_count, post.comment_count, post.view_count, post.created_at
    );
    if let Some(tags) = &post.hashtags {
        println!("{}", tags.join(" "));
    }
    println!();
    println!("{}", Document::parse(&post.content).text());

    // Comment list failures leave the post output in place.
    match client
        .comments(post_id, Some(&email), 1, COMMENT_PAGE_SIZE)
        .await
    {
        Ok(comments) => {
            println!();
            for comment in &comments.content {
                println!(
                    "  [{}] {}: {}",
                    comment.id, comment.author_name, comment.content
                );
            }
        }
        Err(err) => tracing::warn!(post_id, error = %err, "comment list failed"),
    }
    Ok(())
}

/// Read, stage, and append each attached image to the draft markup,
/// exactly as the editor inserts a picked/pasted image at the caret.
fn stage_attachments(
    html: &mut String,
    pending: &mut PendingImages,
    paths: &[&str],
) -> Result<(), String> {
    for raw in paths {
        let path = Path::new(raw);
        let bytes = std::fs::read(path).map_err(|e| format!("Could not read '{raw}': {e}"))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        let reference = pending
            .stage(&file_name, bytes)
            .map_err(|e| e.to_string())?;
        html.push_str(&format!(r#"<img src="{reference}">"#));
    }
    Ok(())
}

/// Upload an optional cover image ahead of the post mutation.
async fn upload_cover(client: &ApiClient, path: &str) -> Result<String, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("Could not read '{path}': {e}"))?;
    let file_name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("cover")
        .to_string();
    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    let report = client
        .upload_files(
            vec![UploadFile {
                file_name,
                mime,
                bytes,
            }],
            UploadKind::Post,
        )
        .await
        .map_err(|e| e.to_string())?;

    report
        .success_file_ids
        .first()
        .cloned()
        .ok_or_else(|| "File upload failed".to_string())
}

async fn create(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    let content = flag_value(args, "--content").unwrap_or_default();
    if content.trim().is_empty() {
        println!("Content is required.");
        return Ok(());
    }

    let email = db.current_user_email_or_default()?;
    let mut html = content.to_string();
    let mut pending = PendingImages::new();

    if let Err(msg) = stage_attachments(&mut html, &mut pending, &flag_values(args, "--inline")) {
        println!("{msg}");
        return Ok(());
    }

    if Document::parse(&html).text_len() > MAX_POST_LENGTH {
        println!("Content exceeds the {MAX_POST_LENGTH}-character limit.");
        return Ok(());
    }

    let file_id = match flag_value(args, "--cover") {
        Some(path) => match upload_cover(client, path).await {
            Ok(id) => Some(id),
            Err(msg) => {
                println!("{msg}");
                return Ok(());
            }
        },
        None => None,
    };

    // Inline uploads happen before the post mutation that references
    // their result; a failure here persists nothing.
    let final_content = match resolve_inline_images(&html, &mut pending, client).await {
        Ok(content) => content,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let hashtags = flag_value(args, "--hashtags")
        .map(extract_hashtags)
        .filter(|tags| !tags.is_empty());

    let body = PostCreate {
        content: final_content.trim().to_string(),
        visibility: Some(Visibility::Public),
        file_id,
        hashtags,
    };

    match client.create_post(&email, &body).await {
        Ok(post) => {
            db.add_my_post(post.id)?;
            println!("Post #{} published.", post.id);
        }
        Err(err) => println!("Post creation failed: {err}"),
    }
    Ok(())
}

async fn edit(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    let Some(post_id) = args.first().and_then(|raw| raw.parse::<i64>().ok()) else {
        eprintln!("Usage: studymate post edit <id> --content <html> ...");
        return Ok(());
    };
    let content = flag_value(args, "--content").unwrap_or_default();
    if content.trim().is_empty() {
        println!("Content is required.");
        return Ok(());
    }

    let email = db.current_user_email_or_default()?;
    let mut html = content.to_string();
    let mut pending = PendingImages::new();

    if let Err(msg) = stage_attachments(&mut html, &mut pending, &flag_values(args, "--inline")) {
        println!("{msg}");
        return Ok(());
    }

    if Document::parse(&html).text_len() > MAX_POST_LENGTH {
        println!("Content exceeds the {MAX_POST_LENGTH}-character limit.");
        return Ok(());
    }

    let uploaded_file_id = match flag_value(args, "--cover") {
        Some(path) => match upload_cover(client, path).await {
            Ok(id) => Some(id),
            Err(msg) => {
                println!("{msg}");
                return Ok(());
            }
        },
        None => None,
    };

    let final_content = match resolve_inline_images(&html, &mut pending, client).await {
        Ok(content) => content,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    let hashtags = flag_value(args, "--hashtags")
        .map(extract_hashtags)
        .filter(|tags| !tags.is_empty());

    let body = PostUpdate {
        content: final_content.trim().to_string(),
        uploaded_file_id,
        hashtags,
    };

    match client.update_post(post_id, &email, &body).await {
        Ok(post) => println!("Post #{} updated.", post.id),
        Err(err) => println!("Post update failed: {err}"),
    }
    Ok(())
}

async fn delete(client: &ApiClient, db: &Database, args: &[String]) -> Result<()> {
    let Some(post_id) = args.first().and_then(|raw| raw.parse::<i64>().ok()) else {
        eprintln!("Usage: studymate post delete <id>");
        return Ok(());
    };

    if !confirm(&format!(
        "Delete post #{post_id}? Deleted posts cannot be recovered."
    )) {
        println!("Cancelled.");
        return Ok(());
    }

    let email = db.current_user_email_or_default()?;
    match client.delete_post(post_id, &email).await {
        Ok(_) => {
            db.remove_my_post(post_id)?;
            println!("Post #{post_id} deleted.");
        }
        Err(err) => println!("Post deletion failed: {err}"),
    }
    Ok(())
}

/// Like / unlike with the original's optimistic behaviour: the local
/// liked-set is written before the network call and deliberately not
/// reverted on failure.
pub async fn like(client: &ApiClient, db: &Database, args: &[String], liked: bool) -> Result<()> {
    let Some(post_id) = args.first().and_then(|raw| raw.parse::<i64>().ok()) else {
        eprintln!("Usage: studymate {} <id>", if liked { "like" } else { "unlike" });
        return Ok(());
    };
    let email = db.current_user_email_or_default()?;

    db.set_liked(post_id, liked)?;

    let result = if liked {
        client.like_post(post_id, &email).await
    } else {
        client.unlike_post(post_id, &email).await
    };

    match result {
        Ok(_) if liked => println!("♥ Liked post #{post_id}."),
        Ok(_) => println!("Like removed from post #{post_id}."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}
