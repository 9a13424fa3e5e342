use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};

use super::state::AddressBarState;

/// Draw the address bar over `area` (normally the footer row).
pub fn render_address_bar(frame: &mut Frame<'_>, state: &AddressBarState, area: Rect) {
    let Some(buffer) = state.buffer() else {
        return;
    };

    frame.render_widget(Clear, area);
    let line = Line::from(vec![
        Span::styled(" Go to: ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(buffer.to_string(), Style::default().fg(HEADER_TEXT)),
        Span::styled("█", Style::default().fg(HEADER_TEXT)),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(" Enter: Go │ Esc: Cancel "),
    );
    frame.render_widget(widget, area);
}
