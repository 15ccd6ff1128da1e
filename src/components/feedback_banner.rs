//! Feedback Banner Component
//!
//! Shows the latest add confirmation; fades out when `fading` flips.

use leptos::prelude::*;

#[component]
pub fn FeedbackBanner(
    message: ReadSignal<Option<&'static str>>,
    fading: ReadSignal<bool>,
) -> impl IntoView {
    let banner_class = move || {
        if fading.get() {
            "feedback-message fade-out"
        } else {
            "feedback-message"
        }
    };

    view! {
        <Show when=move || message.get().is_some()>
            <div class=banner_class role="status" aria-live="polite">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
