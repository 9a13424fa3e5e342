//! `/quotes` - grid of quote cards.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::Quote;
use crate::ui::fetch::FetchState;
use crate::ui::layout::wrapped_height;
use crate::ui::theme::{ACCENT, CARD_BORDER, HEADER_TEXT, MUTED_TEXT};

pub const HEADING: &str = "Seuss Quotes";

pub const CARD_WIDTH: u16 = 40;
/// Smallest card: border, one line of text, attribution, border.
pub const MIN_CARD_HEIGHT: u16 = 4;

const HEADING_HEIGHT: u16 = 2;

/// `"text"` and `— author` as shown on a card.
pub fn card_text(quote: &Quote) -> (String, String) {
    (
        format!("\"{}\"", quote.text),
        format!("— {}", quote.attribution()),
    )
}

pub fn columns(width: u16) -> u16 {
    (width / CARD_WIDTH).max(1)
}

/// Height of a card row: tall enough for the longest wrapped quote in it.
pub fn row_height(row: &[Quote], card_width: u16) -> u16 {
    let inner_width = card_width.saturating_sub(2);
    row.iter()
        .map(|quote| wrapped_height(&card_text(quote).0, inner_width).saturating_add(3))
        .max()
        .unwrap_or(MIN_CARD_HEIGHT)
        .max(MIN_CARD_HEIGHT)
}

/// Render starting at card row `scroll`.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &FetchState<Vec<Quote>>, scroll: u16) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let heading = Paragraph::new(Line::from(Span::styled(
        HEADING,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, Rect { height: 1, ..area });

    let quotes = state.data().map(Vec::as_slice).unwrap_or_default();
    let grid = Rect {
        x: area.x,
        y: area.y + HEADING_HEIGHT.min(area.height),
        width: area.width,
        height: area.height.saturating_sub(HEADING_HEIGHT),
    };
    if quotes.is_empty() {
        return;
    }

    let cols = columns(grid.width) as usize;
    let card_width = grid.width / cols as u16;
    let rows: Vec<&[Quote]> = quotes.chunks(cols).collect();
    let first = (scroll as usize).min(rows.len() - 1);

    // Rows stack downwards; the last one may be cut off by the screen edge.
    let bottom = grid.y + grid.height;
    let mut y = grid.y;
    for row in &rows[first..] {
        if y >= bottom {
            break;
        }
        let height = row_height(row, card_width).min(bottom - y);
        for (col, quote) in row.iter().enumerate() {
            let cell = Rect {
                x: grid.x + col as u16 * card_width,
                y,
                width: card_width,
                height,
            };
            render_card(frame, cell, quote);
        }
        y += height;
    }
}

fn render_card(frame: &mut Frame<'_>, area: Rect, quote: &Quote) {
    let (text, attribution) = card_text(quote);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(CARD_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let text_area = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(HEADER_TEXT)))
            .wrap(Wrap { trim: true }),
        text_area,
    );

    let author_area = Rect {
        y: inner.y + inner.height - 1,
        height: 1,
        ..inner
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            attribution,
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )),
        author_area,
    );
}
