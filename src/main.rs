//! Sandbox file manager - Entry Point
//!
//! An interactive command-line file manager confined to a sandboxed
//! working directory.

use log::{error, info};
use std::io;

use sandbox_fm::config::ManagerConfig;
use sandbox_fm::{Session, shell};

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match ManagerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut session = match Session::new(&config.working_root_path()) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to initialize working root: {}", e);
            eprintln!("Failed to initialize working root: {}", e);
            std::process::exit(1);
        }
    };

    info!("Working root: {}", session.root().display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = shell::run(
        &mut session,
        &config.prompt,
        &mut stdin.lock(),
        &mut stdout.lock(),
    ) {
        error!("Session ended with I/O error: {}", e);
        std::process::exit(1);
    }
}
