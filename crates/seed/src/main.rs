use std::io::Write;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workbridge_seed::config::SeedConfig;
use workbridge_seed::loader::Loader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workbridge_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = SeedConfig::from_env()?;

    let pool = workbridge_db::create_pool(&config.database_url, config.max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    workbridge_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    if config.run_migrations {
        workbridge_db::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
        tracing::info!("Database migrations applied");
    }

    let rng = match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "Using fixed RNG seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let stdout = std::io::stdout();
    let mut loader = Loader::new(&pool, rng, stdout.lock(), config.demo_password);
    let summary = loader.run().await?;
    loader.into_output().flush()?;

    tracing::info!(
        categories = summary.totals.categories,
        skills = summary.totals.skills,
        seekers = summary.totals.seekers,
        employers = summary.totals.employers,
        jobs = summary.totals.jobs,
        applications = summary.totals.applications,
        "Seeding finished"
    );

    pool.close().await;
    Ok(())
}
