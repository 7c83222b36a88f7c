//! sl-auth - prints request options decorated with API credentials.

mod cli;

use anyhow::{Context, bail};
use clap::Parser;
use cli::Args;
use sl_auth::{AuthConfig, RequestOptions};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting sl-auth");

    let config = match (args.config, args.mode) {
        (Some(_), Some(_)) => bail!("--config cannot be combined with a credential mode"),
        (Some(path), None) => AuthConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        (None, Some(mode)) => mode.into(),
        (None, None) => bail!("either --config or a credential mode (token|key) is required"),
    };
    let strategy = config.into_strategy();

    if args.authorization {
        match strategy.http_authorization() {
            Some(value) => println!("{}", value),
            None => bail!("{} authentication has no HTTP Authorization header", strategy.name()),
        }
        return Ok(());
    }

    let options: RequestOptions =
        serde_json::from_str(&args.options).context("--options is not a JSON object")?;
    let options = strategy.apply(options)?;

    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
