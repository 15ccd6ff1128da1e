//! Application Context
//!
//! Navigation state provided via Leptos Context API.

use leptos::prelude::*;

/// Pages of the app, switched in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Tips,
    Inventory,
    Booking,
    Confirmation,
}

impl Page {
    /// Pages listed in the navigation bar, in display order
    pub const NAV: &'static [Page] = &[Page::Home, Page::Tips, Page::Inventory, Page::Booking];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Tips => "Moving Tips",
            Page::Inventory => "Inventory",
            Page::Booking => "Book a Move",
            Page::Confirmation => "Confirmation",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub page: ReadSignal<Page>,
    /// Page currently shown - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch to another page
    pub fn navigate(&self, page: Page) {
        web_sys::console::log_1(&format!("[APP] Navigate to {:?}", page).into());
        self.set_page.set(page);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
