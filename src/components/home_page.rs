//! Home Page Component

use leptos::prelude::*;

use crate::config::COMPANY_NAME;
use crate::context::{use_app_context, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="home-page">
            <h1>{COMPANY_NAME}</h1>
            <p>
                "Planning a move? Browse our packing tips, build an inventory of what's coming \
                 with you, and request a booking with an instant estimate."
            </p>
            <div class="home-actions">
                <button on:click=move |_| ctx.navigate(Page::Tips)>"Read Moving Tips"</button>
                <button on:click=move |_| ctx.navigate(Page::Inventory)>"Build Your Inventory"</button>
                <button on:click=move |_| ctx.navigate(Page::Booking)>"Book a Move"</button>
            </div>
        </section>
    }
}
