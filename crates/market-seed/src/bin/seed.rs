//! Seed script - populates the local market database with demo data
//!
//! Run with:
//! ```
//! cargo run -p market-seed --bin seed
//! ```
//!
//! Always writes to `local.db` in the working directory.

use market_seed::config::SeedConfig;
use market_seed::db::Seeder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_current_dir()?;
    let seeder = Seeder::connect(&config).await?;

    tracing::info!(
        "Connected to local SQLite database at {}",
        config.database_path.display()
    );

    let report = seeder.run().await?;

    tracing::info!(
        "Database seeded successfully with {} products!",
        report.products_inserted
    );
    tracing::info!("  Categories: {}", report.counts.categories);
    tracing::info!("  Sellers: {}", report.counts.sellers);
    tracing::info!("  Products: {}", report.counts.products);
    tracing::debug!("Seed report: {}", serde_json::to_string(&report)?);

    seeder.close().await;

    Ok(())
}
