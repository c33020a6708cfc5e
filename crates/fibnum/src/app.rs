//! Application entry point and dispatch.

use anyhow::Result;

use fibnum_engine::{Engine, EngineConfig};

use crate::config::AppConfig;
use crate::errors::ConfigError;
use crate::presenter::{hex_string, Presenter};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "fibnum", &mut std::io::stdout());
        return Ok(());
    }

    let k = config.k.ok_or(ConfigError::MissingIndex)?;
    let mode = config.algo.mode();

    let engine = Engine::new(EngineConfig { mode });
    let computation = engine.compute(k)?;

    let text = if config.raw {
        hex_string(&computation.output.to_raw_bytes())
    } else {
        computation.output.to_decimal(config.capacity)?
    };

    let presenter = Presenter::new(config.quiet, config.time);
    presenter.present(mode, k, &computation, &text);

    Ok(())
}
