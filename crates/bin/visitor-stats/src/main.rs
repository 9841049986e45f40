use anyhow::Context;
use tracing_subscriber::EnvFilter;

use visitor_stats::config::Config;
use visitor_stats::pipeline;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    pipeline::run(&config).context("failed to render visitor stats")?;

    Ok(())
}
