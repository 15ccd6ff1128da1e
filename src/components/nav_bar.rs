//! Navigation Bar Component
//!
//! Tab bar for switching between pages.

use leptos::prelude::*;

use crate::config::COMPANY_NAME;
use crate::context::{use_app_context, Page};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav-bar">
            <span class="brand">{COMPANY_NAME}</span>
            {Page::NAV.iter().map(|page| {
                let page = *page;
                let tab_class = move || {
                    if ctx.page.get() == page { "nav-tab active" } else { "nav-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| ctx.navigate(page)>
                        {page.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
