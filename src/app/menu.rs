//! Menu handling module.
//!
//! Provides menu actions and parsing for the welcome and main menus.

const MEMBER_ACTIONS: &[MenuAction] = &[
    MenuAction::Post,
    MenuAction::View,
    MenuAction::Update,
    MenuAction::Quit,
];

const GUEST_ACTIONS: &[MenuAction] = &[MenuAction::Login, MenuAction::Register, MenuAction::Quit];

/// Menu action representing the user's choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Post a new announcement.
    Post,
    /// View all announcements.
    View,
    /// Update an existing announcement.
    Update,
    /// Log in with an existing account.
    Login,
    /// Register a new account.
    Register,
    /// Quit (end the process).
    Quit,
    /// Invalid or unknown action.
    Invalid(String),
}

impl MenuAction {
    /// Parse a menu action from user input.
    ///
    /// # Arguments
    ///
    /// * `input` - User input string (case-insensitive).
    /// * `is_logged_in` - Whether the session is logged in.
    pub fn parse(input: &str, is_logged_in: bool) -> Self {
        let input = input.trim().to_uppercase();

        match input.as_str() {
            "P" | "1" if is_logged_in => MenuAction::Post,
            "V" | "2" if is_logged_in => MenuAction::View,
            "U" | "3" if is_logged_in => MenuAction::Update,
            "L" | "1" if !is_logged_in => MenuAction::Login,
            "R" | "2" if !is_logged_in => MenuAction::Register,
            "Q" => MenuAction::Quit,
            other => MenuAction::Invalid(other.to_string()),
        }
    }

    /// Get the menu key for this action.
    pub fn key(&self) -> &'static str {
        match self {
            MenuAction::Post => "P",
            MenuAction::View => "V",
            MenuAction::Update => "U",
            MenuAction::Login => "L",
            MenuAction::Register => "R",
            MenuAction::Quit => "Q",
            MenuAction::Invalid(_) => "",
        }
    }

    /// Menu label for this action.
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Post => "Post Announcement",
            MenuAction::View => "View All Announcements",
            MenuAction::Update => "Update Announcement",
            MenuAction::Login => "Login",
            MenuAction::Register => "Register",
            MenuAction::Quit => "Quit",
            MenuAction::Invalid(_) => "",
        }
    }

    /// Actions offered in the given state, in display order.
    pub fn available(is_logged_in: bool) -> &'static [MenuAction] {
        if is_logged_in {
            MEMBER_ACTIONS
        } else {
            GUEST_ACTIONS
        }
    }
}
