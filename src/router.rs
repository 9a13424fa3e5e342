//! Path-based routing and navigation history.
//!
//! Locations are plain path strings, just like a browser address bar; a
//! location that matches no route is still a valid place to be, it simply
//! renders an empty outlet.

use crate::api::BookId;

pub const BOOKS_PATH: &str = "/";
pub const QUOTES_PATH: &str = "/quotes";
const BOOK_PREFIX: &str = "/book/";

/// A routable view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Books,
    /// `/book/:id`
    BookDetail { id: BookId },
    /// `/quotes`
    Quotes,
}

impl Route {
    /// Match a location against the route table.
    ///
    /// Query strings and fragments are ignored, and one trailing slash is
    /// tolerated. Anything else that is not an exact match yields `None`.
    pub fn parse(location: &str) -> Option<Route> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        match path {
            BOOKS_PATH => Some(Route::Books),
            QUOTES_PATH => Some(Route::Quotes),
            _ => {
                let id = path.strip_prefix(BOOK_PREFIX)?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Route::BookDetail { id: BookId::new(id) })
            }
        }
    }

    /// Canonical location for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Books => BOOKS_PATH.to_string(),
            Route::BookDetail { id } => book_href(id),
            Route::Quotes => QUOTES_PATH.to_string(),
        }
    }
}

/// Link target of a book card.
pub fn book_href(id: &BookId) -> String {
    format!("{}{}", BOOK_PREFIX, id)
}

/// Browser-style history: a current location plus a back stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    current: String,
    back_stack: Vec<String>,
}

impl Navigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: normalize(initial.into()),
            back_stack: Vec::new(),
        }
    }

    pub fn location(&self) -> &str {
        &self.current
    }

    pub fn current_route(&self) -> Option<Route> {
        Route::parse(&self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    /// Navigate to `location`. Returns `false` when already there.
    pub fn push(&mut self, location: impl Into<String>) -> bool {
        let location = normalize(location.into());
        if location == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, location);
        self.back_stack.push(previous);
        true
    }

    /// Return to the previous location. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(BOOKS_PATH)
    }
}

fn normalize(location: String) -> String {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        BOOKS_PATH.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
