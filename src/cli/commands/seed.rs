//! Seed command handler

use crate::config::Config;
use crate::db::Store;
use crate::db::seed::seed_demo_data;

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let report = seed_demo_data(&store).await?;

    if report.is_empty() {
        println!("Nothing to seed, tables already have data.");
        return Ok(());
    }

    println!("Seeded demo data:");
    println!("  Venues:    {}", report.venues);
    println!("  Artists:   {}", report.artists);
    println!("  Shows:     {}", report.shows);
    println!("  Questions: {}", report.questions);

    Ok(())
}
