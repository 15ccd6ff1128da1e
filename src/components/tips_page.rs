//! Tips Page Component

use leptos::prelude::*;

use crate::tips::{render_body, TIPS};

#[component]
pub fn TipsPage() -> impl IntoView {
    view! {
        <section class="tips-page">
            <h1>"Packing & Moving Tips"</h1>
            <ol class="tip-list">
                {TIPS.iter().map(|tip| view! {
                    <li class="tip">
                        <h3>{tip.title}</h3>
                        <div class="tip-body" inner_html=render_body(tip.body)></div>
                    </li>
                }).collect_view()}
            </ol>
        </section>
    }
}
