use crate::router::{Route, BOOKS_PATH, QUOTES_PATH};
use crate::ui::address::AddressIntent;
use crate::ui::app::{App, PAGE_SCROLL};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.address_bar().is_visible() {
        match key.code {
            KeyCode::Esc => app.dispatch_address(AddressIntent::Close),
            KeyCode::Enter => app.submit_address_bar(),
            KeyCode::Backspace => app.dispatch_address(AddressIntent::Backspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch_address(AddressIntent::Insert(ch))
            }
            _ => {}
        }
        return;
    }

    let on_books = app.current_route() == Some(Route::Books);
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('g') | KeyCode::Char(':') => app.open_address_bar(),
        KeyCode::Char('1') => app.navigate(BOOKS_PATH),
        KeyCode::Char('2') => app.navigate(QUOTES_PATH),
        KeyCode::Esc | KeyCode::Backspace => {
            app.back();
        }
        KeyCode::Enter if on_books => {
            app.open_selected();
        }
        KeyCode::Left if on_books => app.move_selection(-1, 0),
        KeyCode::Right if on_books => app.move_selection(1, 0),
        KeyCode::Up if on_books => app.move_selection(0, -1),
        KeyCode::Down if on_books => app.move_selection(0, 1),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => app.scroll_down(PAGE_SCROLL),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
