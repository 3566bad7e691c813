//! Check command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_check(config: &Config) -> anyhow::Result<()> {
    config.validate()?;
    println!("✓ Config is valid");

    let store = Store::new(&config.general.database_path).await?;
    store.ping().await?;
    println!("✓ Database reachable, migrations applied ({})", config.general.database_path);

    let categories = store.list_categories().await?;
    let questions = store.count_questions().await?;
    println!("  {} categories, {} questions", categories.len(), questions);

    Ok(())
}
