//! `/` - grid of linked book cards.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::api::BookSummary;
use crate::router::book_href;
use crate::ui::fetch::FetchState;
use crate::ui::layout::grid_cells;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, CARD_BORDER, HEADER_TEXT, LINK_TEXT, MUTED_TEXT};

pub const HEADING: &str = "Seuss Treasury";

/// Minimum width of one card, borders included.
pub const CARD_WIDTH: u16 = 30;
/// Border, title, image, border.
pub const CARD_HEIGHT: u16 = 4;

/// Heading line plus one blank line.
const HEADING_HEIGHT: u16 = 2;

/// Everything a card needs to draw: where it links and what it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    pub href: String,
    pub title: String,
    pub image: String,
}

pub fn book_cards(books: &[BookSummary]) -> Vec<BookCard> {
    books
        .iter()
        .map(|book| BookCard {
            href: book_href(&book.id),
            title: book.title.clone(),
            image: book.image.clone(),
        })
        .collect()
}

/// Books shown right now: loaded data, otherwise nothing.
pub fn loaded(state: &FetchState<Vec<BookSummary>>) -> &[BookSummary] {
    state.data().map(Vec::as_slice).unwrap_or_default()
}

/// Cards per row for a body of `width` columns.
pub fn columns(width: u16) -> u16 {
    (width / CARD_WIDTH).max(1)
}

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &FetchState<Vec<BookSummary>>,
    selected: usize,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let heading = Paragraph::new(Line::from(Span::styled(
        HEADING,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, Rect { height: 1, ..area });

    let grid = Rect {
        x: area.x,
        y: area.y + HEADING_HEIGHT.min(area.height),
        width: area.width,
        height: area.height.saturating_sub(HEADING_HEIGHT),
    };
    let cards = book_cards(loaded(state));
    if cards.is_empty() || grid.height < CARD_HEIGHT {
        return;
    }

    let cols = columns(grid.width) as usize;
    let visible_rows = (grid.height / CARD_HEIGHT).max(1) as usize;
    let selected = selected.min(cards.len() - 1);
    let first_row = (selected / cols).saturating_sub(visible_rows - 1);
    let skip = first_row * cols;

    let visible = &cards[skip..];
    let cells = grid_cells(grid, cols as u16, CARD_HEIGHT, visible.len());
    for (offset, (card, cell)) in visible.iter().zip(cells).enumerate() {
        render_card(frame, cell, card, skip + offset == selected);
    }
}

fn render_card(frame: &mut Frame<'_>, area: Rect, card: &BookCard, selected: bool) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if selected { ACCENT } else { CARD_BORDER }))
        .title(Span::styled(
            format!(" {} ", card.href),
            Style::default().fg(LINK_TEXT),
        ));
    if selected {
        block = block.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }

    let lines = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("img: {}", card.image),
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
