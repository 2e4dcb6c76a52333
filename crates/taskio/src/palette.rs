//! Light/dark terminal palettes and the text painter built on them.

use crossterm::style::{Color, Stylize};
use taskio_app::Theme;
use taskio_core::status::TaskStatus;

/// Paints text fragments with the active palette, or passes them through
/// verbatim when color output is disabled.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    palette: Option<Palette>,
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    heading: Color,
    todo: Color,
    in_progress: Color,
    done: Color,
    muted: Color,
}

impl Painter {
    /// Painter that emits no escape codes (pipes, tests, `--no-color`).
    pub const fn plain() -> Self {
        Self { palette: None }
    }

    /// Painter for the given color scheme.
    pub const fn themed(theme: Theme) -> Self {
        Self {
            palette: Some(Palette::for_theme(theme)),
        }
    }

    /// Status marker, colored by workflow status.
    pub fn status(&self, status: TaskStatus) -> String {
        let marker = match status {
            TaskStatus::Todo => "[ ]",
            TaskStatus::InProgress => "[~]",
            TaskStatus::Done => "[x]",
        };
        match self.palette {
            Some(palette) => marker.with(palette.status_color(status)).to_string(),
            None => marker.to_owned(),
        }
    }

    /// Section heading (listing header, group labels, detail field names).
    pub fn heading(&self, text: &str) -> String {
        match self.palette {
            Some(palette) => text.with(palette.heading).bold().to_string(),
            None => text.to_owned(),
        }
    }

    /// De-emphasized text (empty states).
    pub fn muted(&self, text: &str) -> String {
        match self.palette {
            Some(palette) => text.with(palette.muted).to_string(),
            None => text.to_owned(),
        }
    }
}

impl Palette {
    const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                heading: Color::DarkMagenta,
                todo: Color::DarkBlue,
                in_progress: Color::DarkYellow,
                done: Color::DarkGreen,
                muted: Color::Grey,
            },
            Theme::Dark => Self {
                heading: Color::Magenta,
                todo: Color::Blue,
                in_progress: Color::Yellow,
                done: Color::Green,
                muted: Color::DarkGrey,
            },
        }
    }

    const fn status_color(self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_painter_emits_no_escape_codes() {
        let painter = Painter::plain();
        assert_eq!(painter.status(TaskStatus::Todo), "[ ]");
        assert_eq!(painter.heading("Tasks"), "Tasks");
        assert_eq!(painter.muted("empty"), "empty");
    }

    #[test]
    fn themed_painter_wraps_text_in_escape_codes() {
        let painter = Painter::themed(Theme::Dark);
        let styled = painter.status(TaskStatus::Done);
        assert!(styled.contains("[x]"));
        assert!(styled.contains('\u{1b}'));
    }

    #[test]
    fn light_and_dark_use_different_colors() {
        let light = Painter::themed(Theme::Light).status(TaskStatus::Todo);
        let dark = Painter::themed(Theme::Dark).status(TaskStatus::Todo);
        assert_ne!(light, dark);
    }

    #[test]
    fn each_status_gets_its_own_marker() {
        let painter = Painter::plain();
        assert_ne!(painter.status(TaskStatus::Todo), painter.status(TaskStatus::InProgress));
        assert_ne!(painter.status(TaskStatus::InProgress), painter.status(TaskStatus::Done));
    }
}
