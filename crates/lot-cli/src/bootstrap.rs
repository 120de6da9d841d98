use anyhow::Context;
use lot_config::LotConfig;

use crate::cli::Cli;

pub fn load_config(cli: &Cli) -> anyhow::Result<LotConfig> {
    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "loading explicit config file");
        return LotConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }

    LotConfig::load_with_dotenv().context("failed to load configuration")
}
