//! `/book/:id` - one book, or the reason it could not be shown.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::api::BookDetail;
use crate::ui::fetch::FetchState;
use crate::ui::layout::wrapped_height;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

pub const LOADING_TEXT: &str = "Loading book details...";
pub const EMPTY_TEXT: &str = "No book details available.";

pub fn lines(state: &FetchState<BookDetail>) -> Vec<Line<'static>> {
    match state {
        FetchState::Loading { .. } => vec![Line::from(LOADING_TEXT)],
        FetchState::Failed { message, .. } => vec![Line::from(Span::styled(
            format!("Error: {}", message),
            Style::default().fg(STATUS_ERROR),
        ))],
        FetchState::Idle => vec![Line::from(EMPTY_TEXT)],
        FetchState::Loaded { data, .. } => vec![
            Line::from(Span::styled(
                data.title.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("img: {}", data.image),
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                data.description.clone(),
                Style::default().fg(HEADER_TEXT),
            )),
        ],
    }
}

/// Rows the view occupies once wrapped to `width` columns.
pub fn line_count(state: &FetchState<BookDetail>, width: u16) -> u16 {
    lines(state)
        .iter()
        .map(|line| wrapped_height(&line.to_string(), width))
        .fold(0u16, u16::saturating_add)
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &FetchState<BookDetail>, scroll: u16) {
    let widget = Paragraph::new(lines(state))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(widget, area);
}
