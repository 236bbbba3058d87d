use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

use numera::cli::{self, Args};
use numera::core::config::{self, NumeraConfig};
use numera::tui;

fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to numera.log in current directory.
    // Everything is accepted until the configured level is known.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("numera.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = match &args.config {
        Some(path) => match config::load_config_from(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("numera: cannot use {}: {}", path.display(), e);
                return Ok(ExitCode::FAILURE);
            }
        },
        None => config::load_config().unwrap_or_else(|e| {
            log::warn!("Ignoring config file: {}", e);
            NumeraConfig::default()
        }),
    };
    let resolved = config::resolve(&file_config, args.topic);
    log::set_max_level(resolved.log_level);

    log::info!(
        "Numera starting up (start topic: {:?}, limits: {:?})",
        resolved.start_topic,
        resolved.limits
    );

    match &args.command {
        None => {
            tui::run(resolved)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(command) => {
            let mut stdout = std::io::stdout().lock();
            match cli::execute(command, args.json, &resolved.limits, &mut stdout) {
                Ok(()) => Ok(ExitCode::SUCCESS),
                Err(e) => {
                    log::info!("One-shot failed: {}", e);
                    eprintln!("numera: {}", e);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
