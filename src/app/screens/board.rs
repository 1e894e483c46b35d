//! Board screen handler.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::error;

use super::common::{ScreenContext, MULTILINE_TERMINATOR};
use crate::board::{Announcement, AnnouncementStore};
use crate::datetime::{format_date, parse_date_input};
use crate::error::{NoticeError, Result};

/// Answer that empties a field on update.
const CLEAR_MARKER: &str = "-";

/// Shown when a store call fails.
const STORAGE_ERROR_MESSAGE: &str = "Could not access the announcement board. Please try again.";

/// Board screen handler.
pub struct BoardScreen;

impl BoardScreen {
    /// Show every announcement under the board title.
    pub fn view<R: BufRead, W: Write>(
        ctx: &mut ScreenContext<R, W>,
        store: &AnnouncementStore,
        board_name: &str,
    ) -> Result<()> {
        ctx.send_line("")?;
        ctx.send_line(&format!("=== {board_name} ==="))?;
        ctx.send_line("")?;
        ctx.send_line("All Announcements:")?;

        let Some(announcements) = Self::load(ctx, store)? else {
            return Ok(());
        };
        Self::show_table(ctx, &announcements, true)
    }

    /// Collect a new announcement and append it.
    pub fn post<R: BufRead, W: Write>(
        ctx: &mut ScreenContext<R, W>,
        store: &AnnouncementStore,
        today: NaiveDate,
    ) -> Result<()> {
        ctx.send_line("")?;
        ctx.send_line("=== Post Announcement ===")?;

        let date = loop {
            let input = ctx.prompt(&format!("Date [{}]", format_date(&today)))?;
            match parse_date_input(&input, today) {
                Ok(date) => break date,
                Err(NoticeError::Validation(_)) => {
                    ctx.send_line("Invalid date. Use YYYY-MM-DD or leave blank for today.")?
                }
                Err(e) => return Err(e),
            }
        };
        let title = ctx.prompt("Title")?;
        ctx.send_line(&format!(
            "Content (end with a line containing only '{MULTILINE_TERMINATOR}'):"
        ))?;
        let content = ctx.read_multiline()?;

        if !ctx.confirm("Post this announcement?")? {
            ctx.send_line("Announcement discarded.")?;
            return Ok(());
        }

        match store.append(Announcement::new(date, title, content)) {
            Ok(_) => ctx.send_line("Announcement posted successfully!"),
            Err(e) => {
                error!("Failed to post announcement: {}", e);
                ctx.send_line(STORAGE_ERROR_MESSAGE)
            }
        }
    }

    /// Pick an announcement by index and replace its title and content.
    ///
    /// The index is clamped to the current rows. Blank answers keep the
    /// current title or content.
    pub fn update<R: BufRead, W: Write>(
        ctx: &mut ScreenContext<R, W>,
        store: &AnnouncementStore,
    ) -> Result<()> {
        ctx.send_line("")?;
        ctx.send_line("=== Update Announcement ===")?;

        let Some(announcements) = Self::load(ctx, store)? else {
            return Ok(());
        };
        if announcements.is_empty() {
            ctx.send_line("No announcements to update.")?;
            return Ok(());
        }
        Self::show_table(ctx, &announcements, false)?;

        let max_index = announcements.len() - 1;
        let index = loop {
            let input = ctx.prompt(&format!("Index to update [0-{max_index}]"))?;
            match parse_index(&input, max_index) {
                Some(index) => break index,
                None => ctx.send_line("Please enter a number.")?,
            }
        };
        let current = &announcements[index];
        ctx.send_line(&format!("Selected #{index}: {}", current.title))?;

        let title = ctx.prompt(&format!(
            "Updated Title [{}] ('{CLEAR_MARKER}' clears)",
            current.title
        ))?;
        let title = edited_field(title, &current.title);

        ctx.send_line("Current content:")?;
        for line in current.content.lines() {
            ctx.send_line(&format!("  {line}"))?;
        }
        ctx.send_line(&format!(
            "Updated Content (end with '{MULTILINE_TERMINATOR}'; leave empty to keep, \
             '{CLEAR_MARKER}' clears):"
        ))?;
        let content = edited_field(ctx.read_multiline()?, &current.content);

        if !ctx.confirm("Update this announcement?")? {
            ctx.send_line("Update cancelled.")?;
            return Ok(());
        }

        match store.update(index, &title, &content) {
            Ok(_) => ctx.send_line("Announcement updated successfully!"),
            Err(e) => {
                error!(index, "Failed to update announcement: {}", e);
                ctx.send_line(STORAGE_ERROR_MESSAGE)
            }
        }
    }

    /// Load the table, reporting a storage failure on screen.
    fn load<R: BufRead, W: Write>(
        ctx: &mut ScreenContext<R, W>,
        store: &AnnouncementStore,
    ) -> Result<Option<Vec<Announcement>>> {
        match store.load() {
            Ok(announcements) => Ok(Some(announcements)),
            Err(e) => {
                error!(path = %store.path().display(), "Failed to load announcements: {}", e);
                ctx.send_line(STORAGE_ERROR_MESSAGE)?;
                Ok(None)
            }
        }
    }

    /// Print the table. With `full_content` every content line is shown,
    /// otherwise only the first.
    fn show_table<R: BufRead, W: Write>(
        ctx: &mut ScreenContext<R, W>,
        announcements: &[Announcement],
        full_content: bool,
    ) -> Result<()> {
        if announcements.is_empty() {
            ctx.send_line("No announcements yet.")?;
            return Ok(());
        }

        ctx.send_line(&format!("  {:<4} {:<10}  {}", "#", "Date", "Title"))?;
        ctx.send_line(&format!("  {}", "-".repeat(44)))?;
        for (i, announcement) in announcements.iter().enumerate() {
            ctx.send_line(&format!(
                "  {:<4} {:<10}  {}",
                i,
                format_date(&announcement.date),
                announcement.title
            ))?;
            if full_content {
                for line in announcement.content.lines() {
                    ctx.send_line(&format!("  {:<4} {:<10}  {}", "", "", line))?;
                }
            } else if !announcement.summary().is_empty() {
                ctx.send_line(&format!(
                    "  {:<4} {:<10}  {}",
                    "",
                    "",
                    announcement.summary()
                ))?;
            }
        }
        ctx.send_line("")?;
        Ok(())
    }
}

/// Resolve an update answer: blank keeps `current`, the clear marker
/// empties the field, anything else replaces it.
fn edited_field(answer: String, current: &str) -> String {
    if answer.is_empty() {
        current.to_string()
    } else if answer.trim() == CLEAR_MARKER {
        String::new()
    } else {
        answer
    }
}

/// Parse an index answer, clamping it to `0..=max_index`.
///
/// Blank input selects 0. Returns None if the input is not a number.
fn parse_index(input: &str, max_index: usize) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Some(0);
    }
    let value: i64 = input.parse().ok()?;
    let max = i64::try_from(max_index).unwrap_or(i64::MAX);
    usize::try_from(value.clamp(0, max)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestContext = ScreenContext<Cursor<Vec<u8>>, Vec<u8>>;

    fn ctx(input: &str) -> TestContext {
        ScreenContext::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(ctx: TestContext) -> String {
        String::from_utf8(ctx.into_output()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn setup() -> (TempDir, AnnouncementStore) {
        let dir = TempDir::new().unwrap();
        let store = AnnouncementStore::new(dir.path().join("announcements.csv"));
        (dir, store)
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("", 4), Some(0));
        assert_eq!(parse_index(" 2 ", 4), Some(2));
        assert_eq!(parse_index("9", 4), Some(4));
        assert_eq!(parse_index("-3", 4), Some(0));
        assert_eq!(parse_index("two", 4), None);
    }

    #[test]
    fn test_view_empty() {
        let (_dir, store) = setup();
        let mut ctx = ctx("");
        BoardScreen::view(&mut ctx, &store, "Board").unwrap();

        let out = output(ctx);
        assert!(out.contains("=== Board ==="));
        assert!(out.contains("No announcements yet."));
    }

    #[test]
    fn test_view_lists_rows_with_index() {
        let (_dir, store) = setup();
        store
            .append(Announcement::new(date(2024, 1, 1), "Welcome", "Hello\nWorld"))
            .unwrap();
        store
            .append(Announcement::new(date(2024, 1, 2), "Second", "Body"))
            .unwrap();

        let mut ctx = ctx("");
        BoardScreen::view(&mut ctx, &store, "Board").unwrap();

        let out = output(ctx);
        assert!(out.contains("0    2024-01-01  Welcome"));
        assert!(out.contains("1    2024-01-02  Second"));
        assert!(out.contains("World"));
    }

    #[test]
    fn test_post_with_explicit_date() {
        let (_dir, store) = setup();
        let mut ctx = ctx("2024-01-01\nWelcome\nHello\n.\ny\n");
        BoardScreen::post(&mut ctx, &store, date(2030, 1, 1)).unwrap();

        assert!(output(ctx).contains("Announcement posted successfully!"));
        let rows = store.load().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, date(2024, 1, 1));
        assert_eq!(rows[0].title, "Welcome");
        assert_eq!(rows[0].content, "Hello");
    }

    #[test]
    fn test_post_blank_date_uses_today_and_blank_fields() {
        let (_dir, store) = setup();
        let mut ctx = ctx("\n\n.\n\n");
        BoardScreen::post(&mut ctx, &store, date(2030, 5, 6)).unwrap();

        let rows = store.load().unwrap();
        assert_eq!(rows[0].date, date(2030, 5, 6));
        assert_eq!(rows[0].title, "");
        assert_eq!(rows[0].content, "");
    }

    #[test]
    fn test_post_reprompts_bad_date() {
        let (_dir, store) = setup();
        let mut ctx = ctx("yesterday\n2024-03-04\nT\nC\n.\ny\n");
        BoardScreen::post(&mut ctx, &store, date(2030, 1, 1)).unwrap();

        assert!(output(ctx).contains("Invalid date"));
        assert_eq!(store.load().unwrap()[0].date, date(2024, 3, 4));
    }

    #[test]
    fn test_post_declined() {
        let (_dir, store) = setup();
        let mut ctx = ctx("2024-01-01\nT\nC\n.\nn\n");
        BoardScreen::post(&mut ctx, &store, date(2030, 1, 1)).unwrap();

        assert!(output(ctx).contains("Announcement discarded."));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_update_empty_board() {
        let (_dir, store) = setup();
        let mut ctx = ctx("");
        BoardScreen::update(&mut ctx, &store).unwrap();
        assert!(output(ctx).contains("No announcements to update."));
    }

    #[test]
    fn test_update_replaces_title_and_content() {
        let (_dir, store) = setup();
        store
            .append(Announcement::new(date(2024, 1, 1), "Welcome", "Hello"))
            .unwrap();

        let mut ctx = ctx("0\nWelcome!\nHi\n.\ny\n");
        BoardScreen::update(&mut ctx, &store).unwrap();

        assert!(output(ctx).contains("Announcement updated successfully!"));
        let rows = store.load().unwrap();
        assert_eq!(rows[0].date, date(2024, 1, 1));
        assert_eq!(rows[0].title, "Welcome!");
        assert_eq!(rows[0].content, "Hi");
    }

    #[test]
    fn test_update_blank_keeps_current_values() {
        let (_dir, store) = setup();
        store
            .append(Announcement::new(date(2024, 1, 1), "Keep", "Same body"))
            .unwrap();

        let mut ctx = ctx("0\n\n.\ny\n");
        BoardScreen::update(&mut ctx, &store).unwrap();

        let rows = store.load().unwrap();
        assert_eq!(rows[0].title, "Keep");
        assert_eq!(rows[0].content, "Same body");
    }

    #[test]
    fn test_update_clear_marker_empties_fields() {
        let (_dir, store) = setup();
        store
            .append(Announcement::new(date(2024, 1, 1), "Old title", "Old body"))
            .unwrap();

        let mut ctx = ctx("0\n-\n-\n.\ny\n");
        BoardScreen::update(&mut ctx, &store).unwrap();

        let rows = store.load().unwrap();
        assert_eq!(rows[0].title, "");
        assert_eq!(rows[0].content, "");
        assert_eq!(rows[0].date, date(2024, 1, 1));
    }

    #[test]
    fn test_edited_field() {
        assert_eq!(edited_field(String::new(), "cur"), "cur");
        assert_eq!(edited_field(" - ".to_string(), "cur"), "");
        assert_eq!(edited_field("new".to_string(), "cur"), "new");
        assert_eq!(edited_field("-1".to_string(), "cur"), "-1");
    }

    #[test]
    fn test_update_clamps_index() {
        let (_dir, store) = setup();
        store
            .append(Announcement::new(date(2024, 1, 1), "First", "1"))
            .unwrap();
        store
            .append(Announcement::new(date(2024, 1, 2), "Last", "2"))
            .unwrap();

        let mut ctx = ctx("abc\n42\nChanged\n.\ny\n");
        BoardScreen::update(&mut ctx, &store).unwrap();

        let out = output(ctx);
        assert!(out.contains("Please enter a number."));
        assert!(out.contains("Selected #1: Last"));
        let rows = store.load().unwrap();
        assert_eq!(rows[0].title, "First");
        assert_eq!(rows[1].title, "Changed");
        assert_eq!(rows[1].content, "2");
    }

    #[test]
    fn test_storage_error_is_reported() {
        let (dir, _store) = setup();
        // A directory cannot be read as a table file
        let store = AnnouncementStore::new(dir.path());
        let mut ctx = ctx("");
        BoardScreen::view(&mut ctx, &store, "Board").unwrap();
        assert!(output(ctx).contains(STORAGE_ERROR_MESSAGE));
    }
}
