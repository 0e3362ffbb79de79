//! Terminal styles for record output.
//!
//! Styles follow the record's fields so a record reads the same in the detail
//! view and in log-style status lines. Colors are dropped when stdout is not a
//! terminal.

use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    pub label: Style,
    pub identifier: Style,
    pub kind: Style,
    pub flags: Style,
}

impl Theme {
    pub fn for_terminal(is_term: bool) -> Self {
        if !is_term {
            return Self {
                header: Style::new(),
                success: Style::new(),
                error: Style::new(),
                warn: Style::new(),
                label: Style::new(),
                identifier: Style::new(),
                kind: Style::new(),
                flags: Style::new(),
            };
        }

        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow().bold(),
            label: Style::new().white().dimmed(),
            identifier: Style::new().bold(),
            kind: Style::new().magenta(),
            flags: Style::new().blue(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(|| Theme::for_terminal(console::Term::stdout().is_term()))
}
