//! Application module.
//!
//! Provides the main application logic and session handling.

mod menu;
pub mod screens;
mod session_handler;

pub use menu::MenuAction;
pub use session_handler::SessionHandler;

use std::io::{BufRead, Write};

use chrono_tz::Tz;

use crate::auth::UserStore;
use crate::board::AnnouncementStore;
use crate::config::Config;
use crate::error::Result;
use screens::ScreenContext;

/// Main application wiring configuration and stores together.
#[derive(Debug)]
pub struct Application {
    config: Config,
    timezone: Tz,
    announcements: AnnouncementStore,
    users: UserStore,
}

impl Application {
    /// Create a new application instance.
    ///
    /// Fails if the configuration does not validate.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let timezone = config.timezone()?;
        let announcements = AnnouncementStore::new(&config.storage.announcements_path);
        let users = UserStore::new(&config.storage.users_path);

        Ok(Self {
            config,
            timezone,
            announcements,
            users,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the announcement store.
    pub fn announcements(&self) -> &AnnouncementStore {
        &self.announcements
    }

    /// Get the user store.
    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// Run one interactive session over the given terminal streams.
    ///
    /// Returns the output stream once the session ends.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
        mask_passwords: bool,
    ) -> Result<W> {
        let ctx = ScreenContext::new(input, output).with_masked_passwords(mask_passwords);
        let mut handler = SessionHandler::new(
            ctx,
            &self.config,
            self.timezone,
            &self.announcements,
            &self.users,
        );
        handler.run()?;
        Ok(handler.into_output())
    }
}
