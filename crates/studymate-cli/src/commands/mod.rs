//! Subcommand handlers, one module per concern.

pub mod comments;
pub mod feed;
pub mod posts;
pub mod profile;
pub mod ranking;
pub mod session;

use std::io::{self, BufRead, Write};

use studymate_compose::Document;
use studymate_shared::types::Post;

/// Interactive yes/no gate in front of destructive actions.
pub fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

/// Pull the value following a `--flag` out of an argument list.
pub fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Collect every value of a repeatable `--flag`.
pub fn flag_values<'a>(args: &'a [String], flag: &str) -> Vec<&'a str> {
    args.iter()
        .enumerate()
        .filter(|(_, a)| *a == flag)
        .filter_map(|(i, _)| args.get(i + 1))
        .map(String::as_str)
        .collect()
}

/// One-line feed rendering of a post.
pub fn print_post_line(post: &Post, liked: bool) {
    let text = Document::parse(&post.content).text();
    let preview: String = text.chars().take(60).collect();
    let heart = if liked { "♥" } else { " " };

    println!(
        "#{:<6} {} {:<20} ♥{:<4} 💬{:<4} 👁{:<5} {}",
        post.id, heart, post.author_name, post.like_count, post.comment_count, post.view_count,
        preview
    );
}
