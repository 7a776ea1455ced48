mod app;
mod users;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    let log_file = File::create("vitrine-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = app::Showcase::new().run() {
        log::error!("fatal: {e}");
        eprintln!("Error: {e}");
    }
}
