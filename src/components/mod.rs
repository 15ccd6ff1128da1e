//! UI Components
//!
//! Leptos components for each page of the app.

mod nav_bar;
mod home_page;
mod tips_page;
mod feedback_banner;
mod inventory_table;
mod inventory_form;
mod booking_form;
mod confirmation_page;

pub use nav_bar::NavBar;
pub use home_page::HomePage;
pub use tips_page::TipsPage;
pub use feedback_banner::FeedbackBanner;
pub use inventory_table::{InventoryTable, LineItemRow};
pub use inventory_form::InventoryForm;
pub use booking_form::BookingForm;
pub use confirmation_page::ConfirmationPage;
