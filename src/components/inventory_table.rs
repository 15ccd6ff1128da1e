//! Inventory Table Component
//!
//! Rows are rebuilt from the controller's list on every change, so each
//! remove button is bound to the row's current position.

use leptos::prelude::*;

use crate::controller::InventoryController;
use crate::models::LineItem;

#[component]
pub fn InventoryTable(controller: InventoryController) -> impl IntoView {
    view! {
        <table class="inventory-table">
            <thead>
                <tr>
                    <th>"Room"</th>
                    <th>"Item"</th>
                    <th>"Quantity"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let items = controller.items();
                    if items.is_empty() {
                        return view! {
                            <tr class="empty-row"><td colspan="4">"No items added yet."</td></tr>
                        }.into_any();
                    }
                    items.into_iter().enumerate().map(|(index, line)| view! {
                        <LineItemRow
                            line=line
                            on_remove=Callback::new(move |_| controller.remove(index))
                        />
                    }).collect_view().into_any()
                }}
            </tbody>
        </table>
    }
}

/// One table row; read-only when `on_remove` is absent
#[component]
pub fn LineItemRow(
    line: LineItem,
    #[prop(optional, into)] on_remove: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <tr>
            <td>{line.room}</td>
            <td>{line.item}</td>
            <td class="quantity">{line.quantity}</td>
            <td class="actions">
                {on_remove.map(|on_remove| view! {
                    <button type="button" class="remove-btn" on:click=move |_| on_remove.run(())>
                        "Remove"
                    </button>
                })}
            </td>
        </tr>
    }
}
