//! Load the demo dataset into the configured database.
//!
//! ```text
//! society-seed            # refuses if any user exists
//! society-seed --force    # truncates every table first
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use society_api::seed::{seed_demo_data, truncate_all, DEMO_PASSWORD};
use society_db::repositories::UserRepo;

#[derive(Parser)]
#[command(name = "society-seed")]
#[command(version)]
#[command(about = "Insert the demo society dataset", long_about = None)]
struct Cli {
    /// Wipe all existing data before seeding
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "society_api=info,society_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = society_db::create_pool(&database_url, 2)
        .await
        .context("Failed to connect to database")?;
    society_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let existing = UserRepo::count(&pool).await?;
    if existing > 0 {
        if !cli.force {
            bail!("Database already holds {existing} users; rerun with --force to wipe and reseed");
        }
        truncate_all(&pool).await?;
    }

    let report = seed_demo_data(&pool).await?;
    println!(
        "Data imported: {} users, {} units, {} tickets, {} bills, {} other rows. Demo password: {DEMO_PASSWORD}",
        report.users, report.units, report.tickets, report.bills, report.other
    );
    Ok(())
}
