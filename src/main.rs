mod app;
mod canvas;
mod food;
mod game;
mod geometry;
mod input;
mod render;
mod snake;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

pub type TermInt = u16;
pub type Coords = (u16, u16);

const LOG_FILE: &str = "snake.log";

fn main() -> Result<()> {
    // The screen belongs to the game, so logs go to a file
    let log_path = std::env::temp_dir().join(LOG_FILE);
    let log_file = File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    WriteLogger::init(LevelFilter::Info, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    info!("Starting snake");

    let mut app = app::App::new()?;
    app.run()?;

    info!("Bye");
    Ok(())
}
