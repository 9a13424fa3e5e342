use crate::api::{BookDetail, BookSummary, Quote, RANDOM_QUOTE_COUNT};
use crate::loader::{LoadOutcome, LoadPayload, LoadRequest, UiCommand, UiCommandSender, ViewSlot};
use crate::router::{Navigator, Route};
use crate::ui::address::{AddressBarState, AddressIntent, AddressReducer};
use crate::ui::fetch::{FetchIntent, FetchReducer, FetchState, Generation};
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use crate::ui::views::{self, books, detail, quotes, ErrorPolicy};
use ratatui::layout::Rect;

/// Rows moved by PageUp / PageDown.
pub const PAGE_SCROLL: u16 = 5;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Whole-application state, owned by the UI thread.
///
/// Each view keeps its own fetch state; the only thing views share is the
/// generation counter that tags their requests.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    navigator: Navigator,
    /// Route whose view is currently mounted.
    mounted: Option<Route>,
    books: FetchState<Vec<BookSummary>>,
    detail: FetchState<BookDetail>,
    quotes: FetchState<Vec<Quote>>,
    address: AddressBarState,
    selection: usize,
    scroll: u16,
    generation: Generation,
    loader: Option<UiCommandSender>,
    last_loader_error: Option<String>,
}

impl App {
    pub fn new(initial_location: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            size: None,
            navigator: Navigator::new(initial_location),
            mounted: None,
            books: FetchState::default(),
            detail: FetchState::default(),
            quotes: FetchState::default(),
            address: AddressBarState::default(),
            selection: 0,
            scroll: 0,
            generation: 0,
            loader: None,
            last_loader_error: None,
        }
    }

    pub fn set_loader(&mut self, sender: UiCommandSender) {
        self.loader = Some(sender);
    }

    /// Mount the view for the initial location.
    pub fn start(&mut self) {
        self.sync_route();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    // ========================================================================
    // Routing
    // ========================================================================

    pub fn location(&self) -> &str {
        self.navigator.location()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.navigator.current_route()
    }

    /// Follow a link or typed location. Same-location navigation is a no-op.
    pub fn navigate(&mut self, location: impl Into<String>) {
        let location = location.into();
        if self.navigator.push(location) {
            tracing::info!(location = self.navigator.location(), "Navigate");
            self.sync_route();
        }
    }

    /// Go back in history. Returns `false` when there is nowhere to go.
    pub fn back(&mut self) -> bool {
        if !self.navigator.back() {
            return false;
        }
        tracing::info!(location = self.navigator.location(), "Back");
        self.sync_route();
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    /// Unmount the old view and mount the new one if the route changed.
    fn sync_route(&mut self) {
        let route = self.navigator.current_route();
        if route == self.mounted {
            return;
        }

        // Same view with a new parameter only refetches; anything else
        // tears the old view down first.
        let same_view = matches!(
            (&self.mounted, &route),
            (Some(Route::BookDetail { .. }), Some(Route::BookDetail { .. }))
        );
        if !same_view {
            if let Some(previous) = self.mounted.take() {
                self.unmount(&previous);
            }
        }

        self.selection = 0;
        self.scroll = 0;
        self.mounted = route.clone();
        if let Some(route) = route {
            self.mount(&route);
        }
    }

    fn mount(&mut self, route: &Route) {
        let generation = self.next_generation();
        let request = match route {
            Route::Books => {
                dispatch_mvi!(self, books, FetchReducer<Vec<BookSummary>>, FetchIntent::Start { generation });
                LoadRequest::Books
            }
            Route::BookDetail { id } => {
                dispatch_mvi!(self, detail, FetchReducer<BookDetail>, FetchIntent::Start { generation });
                LoadRequest::Book { id: id.clone() }
            }
            Route::Quotes => {
                dispatch_mvi!(self, quotes, FetchReducer<Vec<Quote>>, FetchIntent::Start { generation });
                LoadRequest::Quotes {
                    count: RANDOM_QUOTE_COUNT,
                }
            }
        };
        self.send_command(UiCommand::Load {
            generation,
            request,
        });
    }

    fn unmount(&mut self, route: &Route) {
        let slot = match route {
            Route::Books => {
                dispatch_mvi!(self, books, FetchReducer<Vec<BookSummary>>, FetchIntent::Unmount);
                ViewSlot::Books
            }
            Route::BookDetail { .. } => {
                dispatch_mvi!(self, detail, FetchReducer<BookDetail>, FetchIntent::Unmount);
                ViewSlot::Detail
            }
            Route::Quotes => {
                dispatch_mvi!(self, quotes, FetchReducer<Vec<Quote>>, FetchIntent::Unmount);
                ViewSlot::Quotes
            }
        };
        self.send_command(UiCommand::Cancel { slot });
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    fn next_generation(&mut self) -> Generation {
        self.generation += 1;
        self.generation
    }

    // ========================================================================
    // Fetch lifecycle
    // ========================================================================

    /// Apply a finished request to the view that asked for it.
    ///
    /// Results for an older generation, or for a view that has since been
    /// unmounted, leave state untouched.
    pub fn on_loaded(&mut self, outcome: LoadOutcome) {
        let LoadOutcome {
            generation,
            payload,
        } = outcome;
        let slot = payload.slot();

        let applied = match payload {
            LoadPayload::Books(result) => {
                let intent = views::settle(ErrorPolicy::Swallow, "books", generation, result);
                dispatch_mvi!(self, books, FetchReducer<Vec<BookSummary>>, intent);
                self.books.generation() == Some(generation) && !self.books.is_loading()
            }
            LoadPayload::Book(result) => {
                let intent = views::settle(ErrorPolicy::Surface, "book details", generation, result);
                dispatch_mvi!(self, detail, FetchReducer<BookDetail>, intent);
                self.detail.generation() == Some(generation) && !self.detail.is_loading()
            }
            LoadPayload::Quotes(result) => {
                let intent = views::settle(ErrorPolicy::Swallow, "quotes", generation, result);
                dispatch_mvi!(self, quotes, FetchReducer<Vec<Quote>>, intent);
                self.quotes.generation() == Some(generation) && !self.quotes.is_loading()
            }
        };

        if !applied {
            tracing::debug!(?slot, generation, current = self.generation, "Dropped stale result");
        }
    }

    pub fn books(&self) -> &FetchState<Vec<BookSummary>> {
        &self.books
    }

    pub fn detail(&self) -> &FetchState<BookDetail> {
        &self.detail
    }

    pub fn quotes(&self) -> &FetchState<Vec<Quote>> {
        &self.quotes
    }

    // ========================================================================
    // Cursor: selection and scrolling
    // ========================================================================

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Move the book selection by `dx` cards and `dy` rows, clamped to the grid.
    pub fn move_selection(&mut self, dx: isize, dy: isize) {
        let count = books::loaded(&self.books).len();
        if count == 0 {
            self.selection = 0;
            return;
        }
        let cols = books::columns(self.body_width()) as isize;
        let target = self.selection as isize + dx + dy * cols;
        self.selection = target.clamp(0, count as isize - 1) as usize;
    }

    /// Follow the selected book card's link.
    pub fn open_selected(&mut self) -> bool {
        let href = books::loaded(&self.books)
            .get(self.selection)
            .map(|book| crate::router::book_href(&book.id));
        match href {
            Some(href) => {
                self.navigate(href);
                true
            }
            None => false,
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let limit = match self.mounted {
            Some(Route::Quotes) => {
                let count = self.quotes.data().map(Vec::len).unwrap_or(0);
                let cols = quotes::columns(self.body_width()) as usize;
                (count.saturating_sub(1) / cols) as u16
            }
            Some(Route::BookDetail { .. }) => {
                let body = self.body();
                detail::line_count(&self.detail, body.width).saturating_sub(body.height)
            }
            _ => 0,
        };
        self.scroll = self.scroll.saturating_add(lines).min(limit);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    fn body(&self) -> Rect {
        let (cols, rows) = self.size.unwrap_or((80, 24));
        body_rect(Rect::new(0, 0, cols, rows))
    }

    fn body_width(&self) -> u16 {
        self.body().width
    }

    // ========================================================================
    // Address bar (MVI pattern)
    // ========================================================================

    pub fn address_bar(&self) -> &AddressBarState {
        &self.address
    }

    pub fn dispatch_address(&mut self, intent: AddressIntent) {
        dispatch_mvi!(self, address, AddressReducer, intent);
    }

    pub fn open_address_bar(&mut self) {
        let location = self.navigator.location().to_string();
        self.dispatch_address(AddressIntent::Open { location });
    }

    /// Navigate to whatever was typed and close the bar.
    pub fn submit_address_bar(&mut self) {
        let typed = self.address.buffer().map(str::to_string);
        self.dispatch_address(AddressIntent::Close);
        if let Some(location) = typed {
            self.navigate(location);
        }
    }

    // ========================================================================
    // Loader plumbing
    // ========================================================================

    pub fn last_loader_error(&self) -> Option<&str> {
        self.last_loader_error.as_deref()
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.loader else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_loader_error = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Loader command dropped");
                self.last_loader_error = Some(format!("Loader send failed: {}", err));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, BookId};
    use crate::loader;

    fn summary(id: &str, title: &str) -> BookSummary {
        BookSummary {
            id: BookId::from(id),
            title: title.to_string(),
            image: format!("{}.png", id),
        }
    }

    fn app_with_loader(location: &str) -> (App, tokio::sync::mpsc::Receiver<UiCommand>) {
        let (tx, rx) = loader::channel();
        let mut app = App::new(location);
        app.set_loader(tx);
        app.start();
        (app, rx)
    }

    #[test]
    fn start_mounts_initial_route_and_requests_it() {
        let (app, mut rx) = app_with_loader("/book/5");
        assert_eq!(app.detail(), &FetchState::Loading { generation: 1 });
        match rx.try_recv().unwrap() {
            UiCommand::Load {
                generation,
                request,
            } => {
                assert_eq!(generation, 1);
                assert_eq!(request, LoadRequest::Book { id: BookId::from("5") });
            }
            other => panic!("Expected Load, got {:?}", other),
        }
    }

    #[test]
    fn unknown_location_mounts_nothing() {
        let (app, mut rx) = app_with_loader("/nowhere");
        assert_eq!(app.current_route(), None);
        assert!(app.books().is_idle());
        assert!(app.detail().is_idle());
        assert!(app.quotes().is_idle());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn navigating_away_unmounts_and_cancels() {
        let (mut app, mut rx) = app_with_loader("/");
        let _ = rx.try_recv();
        app.navigate("/quotes");

        assert!(app.books().is_idle());
        assert!(app.quotes().is_loading());
        assert!(matches!(
            rx.try_recv().unwrap(),
            UiCommand::Cancel {
                slot: ViewSlot::Books
            }
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            UiCommand::Load {
                request: LoadRequest::Quotes { count: 10 },
                ..
            }
        ));
    }

    #[test]
    fn same_location_does_not_refetch() {
        let (mut app, mut rx) = app_with_loader("/");
        let _ = rx.try_recv();
        app.navigate("/");
        assert!(rx.try_recv().is_err());
        assert_eq!(app.generation(), 1);
    }

    #[test]
    fn id_change_refetches_without_cancel() {
        let (mut app, mut rx) = app_with_loader("/book/1");
        let _ = rx.try_recv();
        app.navigate("/book/2");
        assert_eq!(app.detail(), &FetchState::Loading { generation: 2 });
        assert!(matches!(
            rx.try_recv().unwrap(),
            UiCommand::Load {
                generation: 2,
                ..
            }
        ));
    }

    #[test]
    fn books_result_is_applied() {
        let (mut app, _rx) = app_with_loader("/");
        app.on_loaded(LoadOutcome {
            generation: 1,
            payload: LoadPayload::Books(Ok(vec![summary("1", "Horton")])),
        });
        assert_eq!(books::loaded(app.books()).len(), 1);
    }

    #[test]
    fn stale_detail_result_is_ignored() {
        let (mut app, _rx) = app_with_loader("/book/1");
        app.navigate("/book/2");
        app.on_loaded(LoadOutcome {
            generation: 1,
            payload: LoadPayload::Book(Ok(BookDetail {
                title: "Old".into(),
                ..BookDetail::default()
            })),
        });
        assert_eq!(app.detail(), &FetchState::Loading { generation: 2 });
    }

    #[test]
    fn failed_books_fetch_shows_empty_grid() {
        let (mut app, _rx) = app_with_loader("/");
        app.on_loaded(LoadOutcome {
            generation: 1,
            payload: LoadPayload::Books(Err(ApiError::Status {
                what: "books",
                url: "http://localhost/api/books".into(),
                status: 500,
            })),
        });
        assert_eq!(
            app.books(),
            &FetchState::Loaded {
                generation: 1,
                data: Vec::new()
            }
        );
    }

    #[test]
    fn selection_moves_and_opens_book() {
        let (mut app, _rx) = app_with_loader("/");
        app.on_resize(80, 24);
        app.on_loaded(LoadOutcome {
            generation: 1,
            payload: LoadPayload::Books(Ok(vec![
                summary("1", "A"),
                summary("2", "B"),
                summary("3", "C"),
            ])),
        });
        app.move_selection(1, 0);
        app.move_selection(5, 0);
        assert_eq!(app.selection(), 2);
        app.move_selection(0, -1);
        assert_eq!(app.selection(), 0);

        app.move_selection(1, 0);
        assert!(app.open_selected());
        assert_eq!(app.location(), "/book/2");
        assert!(app.back());
        assert_eq!(app.location(), "/");
        assert!(app.books().is_loading());
    }

    #[test]
    fn address_bar_navigates_to_typed_location() {
        let (mut app, _rx) = app_with_loader("/");
        app.open_address_bar();
        app.dispatch_address(AddressIntent::Backspace);
        for ch in "/quotes".chars() {
            app.dispatch_address(AddressIntent::Insert(ch));
        }
        app.submit_address_bar();
        assert!(!app.address_bar().is_visible());
        assert_eq!(app.current_route(), Some(Route::Quotes));
    }

    #[test]
    fn commands_without_loader_are_dropped_quietly() {
        let mut app = App::new("/");
        app.start();
        assert!(app.books().is_loading());
        assert_eq!(app.last_loader_error(), None);
    }

    #[test]
    fn detail_scroll_stops_at_end_of_text() {
        let (mut app, _rx) = app_with_loader("/book/1");
        app.on_resize(80, 24);
        let generation = app.generation();
        app.on_loaded(LoadOutcome {
            generation,
            payload: LoadPayload::Book(Ok(BookDetail {
                title: "Oh, the Places You'll Go!".into(),
                description: "word ".repeat(400),
                image: "places.png".into(),
            })),
        });

        let body = app.body();
        let limit = detail::line_count(app.detail(), body.width) - body.height;
        assert!(limit > 0);

        app.scroll_down(u16::MAX);
        assert_eq!(app.scroll(), limit);
        app.scroll_up(1);
        assert_eq!(app.scroll(), limit - 1);
    }

    #[test]
    fn short_detail_does_not_scroll() {
        let (mut app, _rx) = app_with_loader("/book/1");
        app.on_resize(80, 24);
        let generation = app.generation();
        app.on_loaded(LoadOutcome {
            generation,
            payload: LoadPayload::Book(Ok(BookDetail {
                title: "Hop on Pop".into(),
                description: "Short.".into(),
                image: String::new(),
            })),
        });

        app.scroll_down(PAGE_SCROLL);
        assert_eq!(app.scroll(), 0);
    }
}
