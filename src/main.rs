use clap::Parser;
use spotify_shapes::config::Config;
use spotify_shapes::{check_file, CheckReport, ShapeError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let config = Config::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    if let Err(e) = dotenv {
        tracing::debug!("No .env loaded: {}", e);
    }

    tracing::info!("Checking {} file(s) as {}", config.files.len(), config.shape);

    let checks = config
        .files
        .iter()
        .map(|path| check_file(config.shape, path));
    let results: Vec<Result<CheckReport, ShapeError>> = futures::future::join_all(checks).await;

    let mut failed = 0;
    for (path, result) in config.files.iter().zip(results) {
        match result {
            Ok(report) if report.is_clean() => {
                tracing::info!("{}: ok", path.display());
            }
            Ok(report) => {
                tracing::warn!(
                    "{}: decoded with {} violation(s)",
                    path.display(),
                    report.violations.len()
                );
                if !config.lenient {
                    failed += 1;
                }
            }
            Err(e) => {
                tracing::error!("{}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} file(s) failed the {} check", failed, config.files.len(), config.shape);
    }

    tracing::info!("All files match {}", config.shape);
    Ok(())
}
