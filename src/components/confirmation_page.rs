//! Confirmation Page Component
//!
//! Summary of the booking, its estimate and the submitted inventory.

use leptos::prelude::*;

use crate::components::LineItemRow;
use crate::context::{use_app_context, Page};
use crate::store::{store_submitted_inventory, use_app_store, AppStateStoreFields};

#[component]
pub fn ConfirmationPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let booking_view = move || {
        store.booking().get().map(|booking| view! {
            <dl class="booking-summary">
                <dt>"Name"</dt><dd>{booking.name}</dd>
                <dt>"Email"</dt><dd>{booking.email}</dd>
                <dt>"Phone"</dt><dd>{booking.phone}</dd>
                <dt>"Move date"</dt><dd>{booking.move_date}</dd>
                <dt>"From"</dt><dd>{booking.origin}</dd>
                <dt>"To"</dt><dd>{booking.destination}</dd>
                <dt>"Notes"</dt><dd>{booking.notes}</dd>
            </dl>
        })
    };

    let estimate_view = move || {
        store.estimate().get().map(|estimate| view! {
            <div class="estimate">
                <h2>"Your Estimate"</h2>
                <p>{format!("{} movers for about {:.1} hours", estimate.movers, estimate.hours)}</p>
                <p class="estimate-cost">{format!("Estimated cost: ${:.2}", estimate.cost)}</p>
                {estimate.peak_season.then(|| view! {
                    <p class="peak-note">"Peak season (June to August) rates apply."</p>
                })}
            </div>
        })
    };

    let inventory_rows = move || {
        let inventory = store_submitted_inventory(&store);
        if inventory.is_empty() {
            return view! {
                <tr class="empty-row"><td colspan="4">"No inventory submitted."</td></tr>
            }.into_any();
        }
        inventory
            .items()
            .iter()
            .cloned()
            .map(|line| view! { <LineItemRow line=line /> })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="confirmation-page">
            <h1>"Thank You!"</h1>
            <Show
                when=move || store.booking().get().is_some()
                fallback=move || view! {
                    <p>"No booking yet. "
                        <button on:click=move |_| ctx.navigate(Page::Booking)>"Book a move"</button>
                    </p>
                }
            >
                {booking_view}
                {estimate_view}
            </Show>

            <h2>"Inventory"</h2>
            <table class="inventory-table">
                <thead>
                    <tr><th>"Room"</th><th>"Item"</th><th>"Quantity"</th><th></th></tr>
                </thead>
                <tbody>{inventory_rows}</tbody>
            </table>
        </section>
    }
}
