use std::io::{self, IsTerminal};
use std::process::ExitCode;

use tracing::{error, info};

use noticeboard::{Application, Config, NoticeError};

fn main() -> ExitCode {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(NoticeError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = noticeboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        noticeboard::logging::init_console_only(&config.logging.level);
    }

    info!(
        announcements = %config.storage.announcements_path,
        users = %config.storage.users_path,
        "Starting {}",
        config.board.name
    );

    let app = match Application::new(config) {
        Ok(app) => app,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mask_passwords = app.config().terminal.mask_passwords && stdin.is_terminal();

    match app.run(stdin.lock(), io::stdout().lock(), mask_passwords) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Session failed: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
