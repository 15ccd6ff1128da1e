//! Moving Inventory App
//!
//! Root component: navigation bar plus the page selected in context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BookingForm, ConfirmationPage, HomePage, InventoryForm, NavBar, TipsPage};
use crate::context::{AppContext, Page};
use crate::store::{store_submit_inventory, AppState};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);
    let ctx = AppContext::new((page, set_page));
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    web_sys::console::log_1(&"[APP] Mounted".into());

    // Stands in for the server's redirect after an inventory POST
    let on_inventory_submitted = Callback::new(move |payload: String| {
        store_submit_inventory(&store, payload);
        ctx.navigate(Page::Booking);
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match page.get() {
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Tips => view! { <TipsPage /> }.into_any(),
                    Page::Inventory => view! {
                        <section class="inventory-page">
                            <h1>"Build Your Inventory"</h1>
                            <p>"Add each item you plan to move, room by room."</p>
                            <InventoryForm on_submitted=on_inventory_submitted />
                        </section>
                    }.into_any(),
                    Page::Booking => view! { <BookingForm /> }.into_any(),
                    Page::Confirmation => view! { <ConfirmationPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
