use crate::router::Route;
use crate::ui::address::render_address_bar;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::NavBar;
use crate::ui::layout::layout_regions;
use crate::ui::views::{books, detail, quotes};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let route = app.current_route();
    frame.render_widget(NavBar::new(route.as_ref(), app.location()).widget(), header);

    frame.render_widget(Clear, body);
    // Unmatched locations leave the outlet empty.
    match route {
        Some(Route::Books) => books::render(frame, body, app.books(), app.selection()),
        Some(Route::BookDetail { .. }) => detail::render(frame, body, app.detail(), app.scroll()),
        Some(Route::Quotes) => quotes::render(frame, body, app.quotes(), app.scroll()),
        None => {}
    }

    if app.address_bar().is_visible() {
        render_address_bar(frame, app.address_bar(), footer);
    } else {
        frame.render_widget(Footer::new().widget(footer), footer);
    }
}
