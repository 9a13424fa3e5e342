use ratatui::layout::Rect;

/// Height of the navigation bar (borders included).
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the footer / address bar (borders included).
pub const FOOTER_HEIGHT: u16 = 3;

/// Split the screen into navigation bar, route outlet and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Split `area` into equal-width cells of `cell_height` rows, `columns` per row.
///
/// Rows that do not fit are not returned.
pub fn grid_cells(area: Rect, columns: u16, cell_height: u16, count: usize) -> Vec<Rect> {
    let columns = columns.max(1);
    let cell_width = area.width / columns;
    if cell_width == 0 || cell_height == 0 {
        return Vec::new();
    }

    let mut cells = Vec::with_capacity(count);
    for index in 0..count {
        let col = (index % columns as usize) as u16;
        let row = (index / columns as usize) as u16;
        let y_offset = match row.checked_mul(cell_height) {
            Some(offset) if offset.saturating_add(cell_height) <= area.height => offset,
            _ => break,
        };
        cells.push(Rect {
            x: area.x + col * cell_width,
            y: area.y + y_offset,
            width: cell_width,
            height: cell_height,
        });
    }
    cells
}

/// Rows `text` takes when word-wrapped to `width` columns.
///
/// Greedy, like `Wrap { trim: true }`: words move to the next row whole and
/// only words wider than a row are split. Empty text still takes one row.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut rows = 1usize;
    let mut line = 0usize;
    for word in text.split_whitespace() {
        let mut len = word.chars().count();
        if line > 0 && line + 1 + len <= width {
            line += 1 + len;
            continue;
        }
        if line > 0 {
            rows += 1;
        }
        while len > width {
            len -= width;
            rows += 1;
        }
        line = len;
    }
    rows.min(u16::MAX as usize) as u16
}
