//! Booking Form Component
//!
//! Contact details and moving parameters; computes the estimate on submit
//! and moves on to the confirmation page.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::estimate::{compute_estimate, is_peak_season, MoveParams};
use crate::models::BookingDetails;
use crate::store::{store_set_booking, use_app_store};

/// Label wrapping a text-like input bound to `value`
#[component]
fn LabeledInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type=input_type
                name=name
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn BookingForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let move_date = RwSignal::new(String::new());
    let origin = RwSignal::new(String::new());
    let destination = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let bedrooms = RwSignal::new(String::from("1"));
    let stairs_origin = RwSignal::new(String::from("0"));
    let stairs_destination = RwSignal::new(String::from("0"));
    let heavy_items = RwSignal::new(String::from("0"));
    let distance_km = RwSignal::new(String::from("0"));

    let (error, set_error) = signal::<Option<&'static str>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let params = match MoveParams::parse(
            &bedrooms.get_untracked(),
            &stairs_origin.get_untracked(),
            &stairs_destination.get_untracked(),
            &heavy_items.get_untracked(),
            &distance_km.get_untracked(),
        ) {
            Ok(params) => params,
            Err(e) => {
                web_sys::console::log_1(&format!("[BOOKING] Rejected: {}", e).into());
                set_error.set(Some(e.user_message()));
                return;
            }
        };
        set_error.set(None);

        let booking = BookingDetails {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            move_date: move_date.get_untracked(),
            origin: origin.get_untracked(),
            destination: destination.get_untracked(),
            notes: notes.get_untracked(),
        };
        let estimate = compute_estimate(params, is_peak_season(&booking.move_date));
        web_sys::console::log_1(
            &format!(
                "[BOOKING] Estimate: {} movers, {} h, ${:.2}",
                estimate.movers, estimate.hours, estimate.cost
            )
            .into(),
        );

        store_set_booking(&store, booking, estimate);
        ctx.navigate(Page::Confirmation);
    };

    view! {
        <section class="booking-page">
            <h1>"Book Your Move"</h1>

            {move || error.get().map(|msg| view! { <p class="flash-error">{msg}</p> })}

            <form class="booking-form" on:submit=on_submit>
                <fieldset>
                    <legend>"Contact"</legend>
                    <LabeledInput label="Name" name="name" value=name />
                    <LabeledInput label="Email" name="email" input_type="email" value=email />
                    <LabeledInput label="Phone" name="phone" input_type="tel" value=phone />
                </fieldset>

                <fieldset>
                    <legend>"Move"</legend>
                    <LabeledInput label="Move date" name="move_date" input_type="date" value=move_date />
                    <LabeledInput label="Origin address" name="origin" value=origin />
                    <LabeledInput label="Destination address" name="destination" value=destination />
                    <LabeledInput label="Bedrooms" name="bedrooms" input_type="number" value=bedrooms />
                    <LabeledInput label="Flights of stairs (origin)" name="stairs_origin" input_type="number" value=stairs_origin />
                    <LabeledInput label="Flights of stairs (destination)" name="stairs_destination" input_type="number" value=stairs_destination />
                    <LabeledInput label="Heavy items (piano, safe, ...)" name="heavy_items" input_type="number" value=heavy_items />
                    <LabeledInput label="Distance (km)" name="distance_km" input_type="number" value=distance_km />
                </fieldset>

                <label class="form-field">
                    <span>"Notes"</span>
                    <textarea
                        name="notes"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <button type="submit" class="submit-btn">"Get Estimate"</button>
            </form>
        </section>
    }
}
