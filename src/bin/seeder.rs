//! Populate an empty library database with sample data.
//!
//! Run from the project root: `cargo run --bin seeder`

use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};

use library_server::{config::AppConfig, logging, repository, seed};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging);

    println!("Creating database tables...");
    let repository = repository::open(&config.database)
        .await
        .context("Failed to open database")?;

    let mut rng = match config.seed.rng_seed {
        Some(seed) => {
            tracing::info!("Using fixed RNG seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let today = chrono::Local::now().date_naive();

    let mut stdout = std::io::stdout();
    seed::run(&repository, &mut rng, today, &mut stdout)
        .await
        .context("Seeding failed")?;

    Ok(())
}
