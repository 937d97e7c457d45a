use anyhow::Result;
use clap::Parser;
use portfolio::cli::{handle_command, PortfolioCli};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("portfolio=info,rocket=warn")),
        )
        .init();

    let cli = PortfolioCli::parse();
    handle_command(cli).await
}
