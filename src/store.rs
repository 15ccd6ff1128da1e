//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Holds what the original multi-page flow carried between requests:
//! the submitted inventory payload, booking details and the estimate.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::inventory::Inventory;
use crate::models::{BookingDetails, Estimate};

/// State shared across pages with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// JSON payload of the last inventory submission
    pub submitted_inventory: String,
    /// Contact details from the booking page
    pub booking: Option<BookingDetails>,
    /// Estimate computed on the booking page
    pub estimate: Option<Estimate>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record the payload carried by the inventory form's mirror field
pub fn store_submit_inventory(store: &AppStore, payload: String) {
    *store.submitted_inventory().write() = payload;
}

/// Record a completed booking together with its estimate
pub fn store_set_booking(store: &AppStore, booking: BookingDetails, estimate: Estimate) {
    *store.booking().write() = Some(booking);
    *store.estimate().write() = Some(estimate);
}

/// Inventory parsed back from the submitted payload
pub fn store_submitted_inventory(store: &AppStore) -> Inventory {
    Inventory::from_json(&store.submitted_inventory().read())
}
