//! Inventory Form Component
//!
//! Room/item/quantity inputs, the running table, and the hidden field that
//! carries the serialized list when the form is submitted.

use leptos::html;
use leptos::prelude::*;

use crate::config::{MIRROR_FIELD_NAME, ROOMS};
use crate::controller::InventoryController;
use crate::components::{FeedbackBanner, InventoryTable};

/// Inventory builder form
///
/// # Arguments
/// * `action` - When set, the browser submits the form natively to this URL
///   after the hidden field is refreshed. When unset, submission stays in-app.
/// * `on_submitted` - Receives the serialized payload on every submission
#[component]
pub fn InventoryForm(
    #[prop(optional, into)] action: Option<String>,
    #[prop(optional, into)] on_submitted: Option<Callback<String>>,
) -> impl IntoView {
    let controller = InventoryController::new();
    let mirror_ref = NodeRef::<html::Input>::new();
    let submits_natively = action.is_some();

    // Enter in an input adds a row instead of submitting the whole form
    let add_on_enter = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            controller.add_from_inputs();
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        let payload = controller.on_submit();
        web_sys::console::log_1(&format!("[INVENTORY] Submitting {} items", controller.len()).into());
        // The DOM must hold the payload before the browser collects form data
        if let Some(input) = mirror_ref.get_untracked() {
            input.set_value(&payload);
        }
        if !submits_natively {
            ev.prevent_default();
        }
        if let Some(callback) = on_submitted {
            callback.run(payload);
        }
    };

    view! {
        <form class="inventory-form" method="post" action=action on:submit=on_submit>
            <div class="inventory-input-row">
                <label>
                    "Room"
                    <select
                        prop:value=move || controller.room.get()
                        on:change=move |ev| controller.room.set(event_target_value(&ev))
                    >
                        {ROOMS.iter().map(|room| view! {
                            <option value=*room>{*room}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Item"
                    <input
                        type="text"
                        placeholder="e.g. Sofa, Blender, Bookshelf"
                        prop:value=move || controller.item_text.get()
                        on:input=move |ev| controller.item_text.set(event_target_value(&ev))
                        on:keydown=add_on_enter
                    />
                </label>
                <label>
                    "Quantity"
                    <input
                        type="number"
                        min="1"
                        step="1"
                        prop:value=move || controller.quantity_raw.get()
                        on:input=move |ev| controller.quantity_raw.set(event_target_value(&ev))
                        on:keydown=add_on_enter
                    />
                </label>
                <button
                    type="button"
                    class="add-btn"
                    on:click=move |_| {
                        controller.add_from_inputs();
                    }
                >
                    "Add Item"
                </button>
            </div>

            <FeedbackBanner message=controller.feedback() fading=controller.fading() />

            <InventoryTable controller=controller />

            <p class="item-count">
                {move || format!("{} rows, {} pieces", controller.items().len(), controller.total_quantity())}
            </p>

            <input
                type="hidden"
                name=MIRROR_FIELD_NAME
                node_ref=mirror_ref
                prop:value=move || controller.mirror().get()
            />

            <button type="submit" class="submit-btn">"Continue to Booking"</button>
        </form>
    }
}
