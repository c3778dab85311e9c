//! fluent-user demo binary
//!
//! Prints the three builder demonstrations to stdout. Logs go to stderr and
//! are silent unless `RUST_LOG` asks for them.

use anyhow::Context;
use fluent_user::{demo, DemoConfig};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fluent_user=warn,warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = DemoConfig::default();
    tracing::debug!(?config, "running fluent builder demo");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out, &config).context("failed to write demo report to stdout")?;

    Ok(())
}
