//! Interactive session loop.
//!
//! Runs the welcome menu until the session logs in, then the board menu
//! until the user quits or input ends.

use std::io::{BufRead, Write};

use chrono::Utc;
use chrono_tz::Tz;
use tracing::{error, info};

use super::menu::MenuAction;
use super::screens::{BoardScreen, ScreenContext};
use crate::auth::{AuthError, AuthGate, AuthState, Session, UserStore};
use crate::board::AnnouncementStore;
use crate::config::Config;
use crate::datetime::today_in;
use crate::error::{NoticeError, Result};

/// Handles one interactive session from start to quit.
pub struct SessionHandler<'a, R, W> {
    ctx: ScreenContext<R, W>,
    config: &'a Config,
    timezone: Tz,
    announcements: &'a AnnouncementStore,
    users: &'a UserStore,
    session: Session,
}

impl<'a, R: BufRead, W: Write> SessionHandler<'a, R, W> {
    /// Create a handler with a fresh, logged-out session.
    pub fn new(
        ctx: ScreenContext<R, W>,
        config: &'a Config,
        timezone: Tz,
        announcements: &'a AnnouncementStore,
        users: &'a UserStore,
    ) -> Self {
        Self {
            ctx,
            config,
            timezone,
            announcements,
            users,
            session: Session::new(),
        }
    }

    /// The session context.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the handler and return the terminal output.
    pub fn into_output(self) -> W {
        self.ctx.into_output()
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");

        loop {
            let step = if self.session.is_logged_in() {
                self.handle_main_menu()
            } else {
                self.handle_welcome()
            };

            match step {
                Ok(MenuResult::Continue) => {}
                Ok(MenuResult::Quit) => break,
                Err(NoticeError::InputClosed) => {
                    info!("Input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.ctx.send_line("")?;
        self.ctx.send_line("Goodbye!")?;
        match self.session.state() {
            AuthState::LoggedIn { username, since } => {
                let minutes = (Utc::now() - *since).num_minutes();
                info!(username = %username, minutes, "Session ended");
            }
            AuthState::LoggedOut => info!("Session ended"),
        }
        Ok(())
    }

    /// Welcome menu shown while logged out.
    fn handle_welcome(&mut self) -> Result<MenuResult> {
        self.ctx.send_line("")?;
        self.ctx.send_line(&format!("=== {} ===", self.config.board.name))?;
        self.show_menu()?;

        let input = self.ctx.prompt("Select")?;
        match MenuAction::parse(&input, false) {
            MenuAction::Login => self.handle_login()?,
            MenuAction::Register => self.handle_registration()?,
            MenuAction::Quit => return Ok(MenuResult::Quit),
            _ => self.ctx.send_line("Invalid selection.")?,
        }
        Ok(MenuResult::Continue)
    }

    /// Board menu shown once logged in.
    fn handle_main_menu(&mut self) -> Result<MenuResult> {
        self.ctx.send_line("")?;
        self.ctx.send_line(&format!("=== {} ===", self.config.board.name))?;
        if let Some(username) = self.session.username() {
            self.ctx.send_line(&format!("Logged in as {username}"))?;
        }
        self.show_menu()?;

        let input = self.ctx.prompt("Select")?;
        match MenuAction::parse(&input, true) {
            MenuAction::Post => {
                let today = today_in(&self.timezone);
                BoardScreen::post(&mut self.ctx, self.announcements, today)?;
            }
            MenuAction::View => {
                BoardScreen::view(&mut self.ctx, self.announcements, &self.config.board.name)?;
            }
            MenuAction::Update => BoardScreen::update(&mut self.ctx, self.announcements)?,
            MenuAction::Quit => return Ok(MenuResult::Quit),
            _ => self.ctx.send_line("Invalid selection.")?,
        }
        Ok(MenuResult::Continue)
    }

    fn show_menu(&mut self) -> Result<()> {
        for action in MenuAction::available(self.session.is_logged_in()) {
            self.ctx
                .send_line(&format!("  [{}] {}", action.key(), action.label()))?;
        }
        Ok(())
    }

    /// Login form. Both fields are required.
    fn handle_login(&mut self) -> Result<()> {
        self.ctx.send_line("")?;
        self.ctx.send_line("=== Login ===")?;
        let username = self.ctx.prompt("Username")?;
        let password = self.ctx.prompt_password("Password")?;

        if username.is_empty() || password.is_empty() {
            self.ctx
                .send_line("Please enter both username and password.")?;
            return Ok(());
        }

        let gate = AuthGate::new(self.users);
        match gate.login(&mut self.session, &username, &password) {
            Ok(user) => self
                .ctx
                .send_line(&format!("Welcome back, {}!", user.username)),
            Err(AuthError::InvalidCredentials) => self
                .ctx
                .send_line("Invalid username or password. Please try again."),
            Err(e) => self.report_auth_error(e),
        }
    }

    /// Registration form.
    fn handle_registration(&mut self) -> Result<()> {
        self.ctx.send_line("")?;
        self.ctx.send_line("=== Register ===")?;
        let username = self.ctx.prompt("Username")?;
        let password = self.ctx.prompt_password("Password")?;

        let gate = AuthGate::new(self.users);
        match gate.register(&mut self.session, &username, &password) {
            Ok(user) => self.ctx.send_line(&format!(
                "Registration successful! Welcome, {}!",
                user.username
            )),
            Err(AuthError::UsernameTaken) => self
                .ctx
                .send_line("Username already exists. Please choose a different username."),
            Err(e) => self.report_auth_error(e),
        }
    }

    fn report_auth_error(&mut self, e: AuthError) -> Result<()> {
        error!(path = %self.users.path().display(), "Authentication error: {}", e);
        self.ctx
            .send_line("Could not access user data. Please try again.")
    }
}

/// Menu handling result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuResult {
    Continue,
    Quit,
}
