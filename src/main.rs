//! hyperwire - a tesseract wireframe turning through four planes
//!
//! Animates in the terminal or writes SVG frames, depending on `display.mode`.

use std::process::ExitCode;

use hyperwire::config::{AppConfig, DisplayMode};
use hyperwire::error::AppError;
use hyperwire::systems::{Animator, SvgExportSystem, TerminalSystem};
use hyperwire_core::GeometryEngine;

fn run(config: &AppConfig) -> Result<(), AppError> {
    let params = config.geometry.to_engine_params(&config.style)?;
    let engine = GeometryEngine::new(params)?;
    let animator = Animator::from_config(&config.animation)?;
    let style = config.style.to_stroke_style();

    log::info!(
        "Rotation period {:.3} rad, {} planes",
        engine.rotation().period(),
        engine.rotation().spins().len()
    );

    match config.display.mode {
        DisplayMode::Terminal => {
            let terminal = TerminalSystem::new(&config.terminal, style);
            let shown = terminal.run_interactive(&engine, animator, config.display.frames)?;
            log::info!("Presented {} frames", shown);
        }
        DisplayMode::Svg => {
            let exporter = SvgExportSystem::new(&config.svg, style);
            let written = exporter.run(&engine, animator, config.display.frames)?;
            log::info!("Wrote {} SVG files", written.len());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG takes precedence over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("hyperwire: {}", e);
            ExitCode::FAILURE
        }
    }
}
