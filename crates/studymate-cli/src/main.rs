//! StudyMate terminal client.
//!
//! Thin dispatch over the SDK crates: every subcommand maps to one of
//! the screens of the original application.

mod commands;

use anyhow::Result;
use studymate_api::{ApiClient, ApiConfig};
use studymate_shared::constants::APP_NAME;
use studymate_store::Database;
use tracing_subscriber::{fmt, EnvFilter};

fn print_usage() {
    println!("{APP_NAME} client");
    println!();
    println!("Usage: studymate <command> [args]");
    println!();
    println!("  feed [--sort latest|popular|views] [--search <kw>] [--pages <n>]");
    println!("  post show <id>");
    println!("  post create --content <html> [--inline <image>]... [--cover <image>]");
    println!("              [--hashtags <line>]");
    println!("  post edit <id> --content <html> [--inline <image>]... [--cover <image>]");
    println!("              [--hashtags <line>]");
    println!("  post delete <id>");
    println!("  like <id> | unlike <id>");
    println!("  comment list <post-id>");
    println!("  comment add <post-id> <text>");
    println!("  comment edit <comment-id> <text>");
    println!("  comment delete <comment-id>");
    println!("  ranking");
    println!("  profile liked [page] | profile mine [page] | profile user <email> [page]");
    println!("  login <email> | whoami | searches");
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("studymate=info,studymate_api=info,studymate_feed=info,studymate_compose=info,studymate_store=warn,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_usage();
        return Ok(());
    }

    let config = ApiConfig::from_env();
    let client = ApiClient::new(&config)?;
    let db = Database::new()?;

    tracing::debug!(base_url = %client.base_url(), "client ready");

    match args[0].as_str() {
        "feed" => commands::feed::run(&client, &db, &args[1..]).await,
        "post" => commands::posts::run(&client, &db, &args[1..]).await,
        "like" => commands::posts::like(&client, &db, &args[1..], true).await,
        "unlike" => commands::posts::like(&client, &db, &args[1..], false).await,
        "comment" => commands::comments::run(&client, &db, &args[1..]).await,
        "ranking" => commands::ranking::run(&client).await,
        "profile" => commands::profile::run(&client, &db, &args[1..]).await,
        "login" => commands::session::login(&db, &args[1..]),
        "whoami" => commands::session::whoami(&db),
        "searches" => commands::session::searches(&db),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            Ok(())
        }
    }
}
