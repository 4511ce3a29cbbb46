//! Application orchestrator.
//! Resolves and loads the config, initializes logging, installs the Ctrl-C handler,
//! then runs every managed directory's rules and aggregates the result.

use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use dirculese::cli::Args;
use dirculese::config::{load_or_init, resolve_config_path, sample_config, ConfigSource, LoadResult};
use dirculese::output as out;
use dirculese::{default_log_path, shutdown, DirculeseError, LogLevel};

use crate::logging::init_tracing;

fn config_help(path: &std::path::Path) -> String {
    format!(
        "Here's what a valid dirculese configuration file '{}' looks like:\n{}",
        path.display(),
        sample_config()
    )
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    out::set_silent(args.silent);

    if args.sample_config {
        out::print_user(&sample_config());
        return Ok(());
    }

    let (cfg_path, source) = resolve_config_path(args.config.as_deref())?;

    if args.print_config {
        let origin = match source {
            ConfigSource::Flag => "--config flag",
            ConfigSource::Env => dirculese::config::CONFIG_ENV,
            ConfigSource::Default => "default location",
        };
        out::print_info(&format!("Config file ({origin}):\n  {}", cfg_path.display()));
        if !cfg_path.exists() {
            out::print_info("No config file exists there yet.");
        }
        return Ok(());
    }

    let mut cfg = match load_or_init(&cfg_path, source) {
        Ok(LoadResult::Loaded(cfg)) => cfg,
        Ok(LoadResult::CreatedTemplate(path)) => {
            out::print_success(&format!(
                "A template dirculese config was written to: {}",
                path.display()
            ));
            out::print_info(
                "Edit it to list the directories you want organized and their rules, then re-run this command.",
            );
            return Ok(());
        }
        Err(e) => {
            out::print_info(&config_help(&cfg_path));
            return Err(e.context("there is a problem loading or parsing your configuration file"));
        }
    };
    args.apply_overrides(&mut cfg);

    let log_file = cfg.log_file.clone().or_else(|| default_log_path().ok());
    let guard = init_tracing(
        cfg.log_level.unwrap_or(LogLevel::Normal),
        log_file.as_deref(),
        args.json,
        args.silent,
    )
    .map_err(|e| e.context("failed to initialize logging"))?;

    // Held so the handler can flush the file appender on interrupt.
    let guard_slot = Arc::new(Mutex::new(guard));
    {
        let guard_slot = Arc::clone(&guard_slot);
        shutdown::install(move || {
            out::print_warn("Received interrupt; stopping after the current file...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .map_err(|e| anyhow!("failed to install signal handler: {e}"))?;
    }

    debug!(config = %cfg_path.display(), "Starting dirculese: {:?}", args);

    let result = (|| -> Result<()> {
        let directories = cfg.managed_directories().map_err(|e| {
            error!(code = e.code(), config = %cfg_path.display(), "{e}");
            out::print_info(&config_help(&cfg_path));
            e
        })?;

        let total = directories.len();
        let mut failed = 0usize;
        for dir in &directories {
            if shutdown::is_requested() {
                return Err(DirculeseError::Interrupted.into());
            }
            match dir.run() {
                Ok(outcomes) => {
                    info!(path = %dir.location().path().display(), actions = outcomes.len(), "Directory organized");
                }
                Err(DirculeseError::Interrupted) => return Err(DirculeseError::Interrupted.into()),
                Err(e) => {
                    failed += 1;
                    error!(
                        code = e.code(),
                        path = %dir.location().path().display(),
                        "{e}"
                    );
                }
            }
        }

        if failed > 0 {
            return Err(anyhow!("{failed} of {total} managed directories failed; see the log for details"));
        }
        Ok(())
    })();

    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}
