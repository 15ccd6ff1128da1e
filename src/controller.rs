//! Inventory Form Controller
//!
//! Owns the line item list, the serialized mirror, the form inputs and the
//! feedback message. Built once when the inventory form mounts; the pending
//! fade timer is dropped when it unmounts.

use std::any::Any;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::config::{DEFAULT_QUANTITY, FEEDBACK_FADE_MS, ROOMS};
use crate::feedback;
use crate::inventory::Inventory;
use crate::models::LineItem;

/// Pending fade-out; dropping it cancels the callback
pub type FadeTimer = Box<dyn Any>;

/// Starts a fade-out countdown of `delay_ms`
pub type ScheduleFade = fn(delay_ms: u32, on_fade: Box<dyn FnOnce()>) -> FadeTimer;

fn browser_fade(delay_ms: u32, on_fade: Box<dyn FnOnce()>) -> FadeTimer {
    Box::new(Timeout::new(delay_ms, on_fade))
}

#[derive(Clone, Copy)]
pub struct InventoryController {
    /// Selected room input
    pub room: RwSignal<String>,
    /// Item description input
    pub item_text: RwSignal<String>,
    /// Quantity input, kept as typed
    pub quantity_raw: RwSignal<String>,
    inventory: RwSignal<Inventory>,
    /// JSON of `inventory`, bound to the hidden form field
    mirror: RwSignal<String>,
    feedback: RwSignal<Option<&'static str>>,
    fading: RwSignal<bool>,
    fade_timer: StoredValue<Option<FadeTimer>, LocalStorage>,
    pick_message: fn() -> &'static str,
    schedule_fade: ScheduleFade,
}

impl InventoryController {
    /// Must be called inside a component so cleanup runs on unmount
    pub fn new() -> Self {
        Self::with_hooks(feedback::random_message, browser_fade)
    }

    /// Controller with its own message picker and fade scheduler
    pub fn with_hooks(pick_message: fn() -> &'static str, schedule_fade: ScheduleFade) -> Self {
        let inventory = Inventory::new();
        let controller = Self {
            room: RwSignal::new(ROOMS.first().copied().unwrap_or_default().to_string()),
            item_text: RwSignal::new(String::new()),
            quantity_raw: RwSignal::new(DEFAULT_QUANTITY.to_string()),
            mirror: RwSignal::new(inventory.to_json()),
            inventory: RwSignal::new(inventory),
            feedback: RwSignal::new(None),
            fading: RwSignal::new(false),
            fade_timer: StoredValue::new_local(None),
            pick_message,
            schedule_fade,
        };

        // A timeout firing after unmount would write to disposed signals
        let fade_timer = controller.fade_timer;
        on_cleanup(move || {
            let _ = fade_timer.try_set_value(None);
        });

        controller
    }

    /// Current line items, tracked
    pub fn items(&self) -> Vec<LineItem> {
        self.inventory.with(|inv| inv.items().to_vec())
    }

    pub fn total_quantity(&self) -> u64 {
        self.inventory.with(Inventory::total_quantity)
    }

    pub fn mirror(&self) -> ReadSignal<String> {
        self.mirror.read_only()
    }

    pub fn feedback(&self) -> ReadSignal<Option<&'static str>> {
        self.feedback.read_only()
    }

    pub fn fading(&self) -> ReadSignal<bool> {
        self.fading.read_only()
    }

    /// Append a line item. Invalid input is ignored without any feedback.
    /// Returns whether the item was added.
    pub fn add(&self, room: &str, item: &str, quantity_raw: &str) -> bool {
        let mut added = false;
        // Only notify subscribers when a row was actually appended
        self.inventory.maybe_update(|inv| {
            added = inv.add(room, item, quantity_raw).is_ok();
            added
        });
        if !added {
            return false;
        }
        self.render();
        self.show_feedback((self.pick_message)());

        self.item_text.set(String::new());
        self.quantity_raw.set(DEFAULT_QUANTITY.to_string());
        true
    }

    /// Add handler for the form's "Add" button
    pub fn add_from_inputs(&self) -> bool {
        let room = self.room.get_untracked();
        let item = self.item_text.get_untracked();
        let quantity = self.quantity_raw.get_untracked();
        self.add(&room, &item, &quantity)
    }

    /// Remove the row at `index`; stale indices are ignored
    pub fn remove(&self, index: usize) {
        self.inventory.update(|inv| {
            inv.remove(index);
        });
        self.render();
    }

    /// Sync the mirror field with the list. Rows re-render from `items()`.
    pub fn render(&self) {
        let json = self.inventory.with_untracked(Inventory::to_json);
        self.mirror.set(json);
    }

    /// Refresh the mirror right before the form is submitted; returns the payload
    pub fn on_submit(&self) -> String {
        self.render();
        self.mirror.get_untracked()
    }

    /// Number of rows, untracked
    pub fn len(&self) -> usize {
        self.inventory.with_untracked(Inventory::len)
    }

    /// Show a message and restart the fade-out countdown.
    /// Replacing the stored timeout drops (and cancels) the previous one.
    fn show_feedback(&self, message: &'static str) {
        self.feedback.set(Some(message));
        self.fading.set(false);

        let fading = self.fading;
        let timer = (self.schedule_fade)(FEEDBACK_FADE_MS, Box::new(move || fading.set(true)));
        self.fade_timer.set_value(Some(timer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    thread_local! {
        static PENDING_FADES: RefCell<Vec<Box<dyn FnOnce()>>> = RefCell::new(Vec::new());
        static CANCELLED_FADES: Cell<usize> = Cell::new(0);
    }

    /// Dropped when the controller replaces or clears its timer
    struct FadeGuard;

    impl Drop for FadeGuard {
        fn drop(&mut self) {
            CANCELLED_FADES.with(|c| c.set(c.get() + 1));
        }
    }

    fn fixed_message() -> &'static str {
        "Great! Item added."
    }

    fn manual_fade(_delay_ms: u32, on_fade: Box<dyn FnOnce()>) -> FadeTimer {
        PENDING_FADES.with(|p| p.borrow_mut().push(on_fade));
        Box::new(FadeGuard)
    }

    fn setup() -> (Owner, InventoryController) {
        let owner = Owner::new();
        owner.set();
        (owner, InventoryController::with_hooks(fixed_message, manual_fade))
    }

    fn pending_fades() -> usize {
        PENDING_FADES.with(|p| p.borrow().len())
    }

    fn cancelled_fades() -> usize {
        CANCELLED_FADES.with(|c| c.get())
    }

    fn assert_mirror_in_sync(controller: &InventoryController) {
        let expected = serde_json::to_string(&controller.items()).unwrap();
        assert_eq!(controller.mirror().get_untracked(), expected);
    }

    #[test]
    fn test_valid_add_clears_inputs_and_sets_feedback() {
        let (_owner, controller) = setup();
        controller.room.set("Kitchen".to_string());
        controller.item_text.set("Blender".to_string());
        controller.quantity_raw.set("2".to_string());

        assert!(controller.add_from_inputs());

        assert_eq!(controller.items(), vec![LineItem::new("Kitchen", "Blender", 2)]);
        assert_eq!(controller.item_text.get_untracked(), "");
        assert_eq!(controller.quantity_raw.get_untracked(), "1");
        assert_eq!(controller.room.get_untracked(), "Kitchen");
        assert_eq!(controller.feedback().get_untracked(), Some("Great! Item added."));
        assert!(!controller.fading().get_untracked());
        assert_eq!(pending_fades(), 1);
        assert_eq!(
            controller.mirror().get_untracked(),
            r#"[{"room":"Kitchen","item":"Blender","quantity":2}]"#
        );
    }

    #[test]
    fn test_invalid_add_leaves_state_unchanged() {
        let (_owner, controller) = setup();
        controller.item_text.set("   ".to_string());
        controller.quantity_raw.set("5".to_string());
        assert!(!controller.add_from_inputs());

        controller.item_text.set("Lamp".to_string());
        controller.quantity_raw.set("0".to_string());
        assert!(!controller.add_from_inputs());

        assert!(controller.items().is_empty());
        assert_eq!(controller.mirror().get_untracked(), "[]");
        assert_eq!(controller.item_text.get_untracked(), "Lamp");
        assert_eq!(controller.quantity_raw.get_untracked(), "0");
        assert_eq!(controller.feedback().get_untracked(), None);
        assert_eq!(pending_fades(), 0);
    }

    #[test]
    fn test_new_message_replaces_pending_fade() {
        let (_owner, controller) = setup();
        assert!(controller.add("Office", "Desk", "1"));
        assert_eq!(cancelled_fades(), 0);

        assert!(controller.add("Office", "Chair", "2"));
        assert_eq!(pending_fades(), 2);
        assert_eq!(cancelled_fades(), 1);

        // The latest countdown fires and fades the banner
        let latest = PENDING_FADES.with(|p| p.borrow_mut().pop()).unwrap();
        latest();
        assert!(controller.fading().get_untracked());

        // A new add shows the banner again
        assert!(controller.add("Office", "Lamp", "1"));
        assert!(!controller.fading().get_untracked());
    }

    #[test]
    fn test_mirror_tracks_add_and_remove() {
        let (_owner, controller) = setup();
        controller.add("Kitchen", "Blender", "2");
        assert_mirror_in_sync(&controller);
        controller.add("Garage", "Bike", "1");
        assert_mirror_in_sync(&controller);

        controller.remove(0);
        assert_mirror_in_sync(&controller);
        assert_eq!(controller.items(), vec![LineItem::new("Garage", "Bike", 1)]);

        controller.remove(7);
        assert_mirror_in_sync(&controller);
        assert_eq!(controller.items().len(), 1);
    }

    #[test]
    fn test_submit_returns_current_payload() {
        let (_owner, controller) = setup();
        controller.add("Bedroom", "Bed", "1");
        assert_eq!(
            controller.on_submit(),
            r#"[{"room":"Bedroom","item":"Bed","quantity":1}]"#
        );
    }
}
