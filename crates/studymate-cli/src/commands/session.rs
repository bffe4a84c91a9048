//! Local session identity and search history.

use anyhow::Result;
use studymate_store::Database;

pub fn login(db: &Database, args: &[String]) -> Result<()> {
    let Some(email) = args.first().filter(|e| e.contains('@')) else {
        eprintln!("Usage: studymate login <email>");
        return Ok(());
    };

    db.set_current_user_email(email)?;
    println!("Acting as {email}.");
    Ok(())
}

pub fn whoami(db: &Database) -> Result<()> {
    match db.current_user_email()? {
        Some(email) => println!("{email}"),
        None => println!(
            "{} (default; use `studymate login <email>`)",
            db.current_user_email_or_default()?
        ),
    }
    Ok(())
}

pub fn searches(db: &Database) -> Result<()> {
    let searches = db.recent_searches()?;
    if searches.is_empty() {
        println!("No recent searches.");
        return Ok(());
    }
    for (index, keyword) in searches.iter().enumerate() {
        println!("{}. {}", index + 1, keyword);
    }
    Ok(())
}
