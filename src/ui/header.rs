use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::router::{Route, BOOKS_PATH, QUOTES_PATH};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};

/// The static two-link navigation bar.
pub const NAV_LINKS: [(&str, &str); 2] = [("Books", BOOKS_PATH), ("Quotes", QUOTES_PATH)];

pub struct NavBar<'a> {
    route: Option<&'a Route>,
    location: &'a str,
}

impl<'a> NavBar<'a> {
    pub fn new(route: Option<&'a Route>, location: &'a str) -> Self {
        Self { route, location }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled("  ", text_style)];
        for (index, (label, path)) in NAV_LINKS.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            let active = self.route.map(|route| route.path()).as_deref() == Some(*path);
            spans.push(Span::styled(
                format!("{} {}", index + 1, label),
                if active { active_style } else { text_style },
            ));
        }
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(
            self.location.to_string(),
            Style::default().fg(MUTED_TEXT),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
