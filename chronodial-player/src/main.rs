use anyhow::Context;
use chronodial_config::{Cli, ConfigLoader};
use chronodial_player::app::{self, AppConfig};
use clap::Parser;

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("chronodial_player", LevelFilter::Debug)
        .filter_module("chronodial_config", LevelFilter::Info)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();
    let loaded = ConfigLoader::from_process(cli)
        .context("failed to read environment configuration")?
        .load()
        .context("failed to load timeline")?;
    loaded.warnings.log();

    log::info!(
        "Starting with {} periods ({}ms transitions)",
        loaded.config.periods.len(),
        loaded.config.animation.duration.as_millis()
    );

    app::application(AppConfig::new(loaded.config))
        .run()
        .context("window loop exited with an error")
}
