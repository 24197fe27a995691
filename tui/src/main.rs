use std::{env, fs::File};

use anyhow::{Context, Result};
use session::SessionConfig;

mod app;
mod state;
mod ui;

/// Where logs go while the terminal is taken over by the UI.
const LOG_FILE: &str = "linear-learner.log";

fn main() -> Result<()> {
    init_logging()?;

    let config = SessionConfig::from_env().context("loading the session config")?;
    app::run::run(config)
}

fn init_logging() -> Result<()> {
    if env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
