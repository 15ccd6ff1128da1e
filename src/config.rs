//! Compile-time configuration

/// Name of the hidden input carrying the serialized inventory
pub const MIRROR_FIELD_NAME: &str = "inventory_data";

/// Quantity the form starts with and resets to after each add
pub const DEFAULT_QUANTITY: u32 = 1;

/// How long a feedback message stays before fading out
pub const FEEDBACK_FADE_MS: u32 = 2_500;

/// Rooms offered by the inventory form, first one selected by default
pub const ROOMS: &[&str] = &[
    "Living Room",
    "Kitchen",
    "Dining Room",
    "Master Bedroom",
    "Bedroom",
    "Bathroom",
    "Office",
    "Garage",
    "Basement",
    "Other",
];

pub const COMPANY_NAME: &str = "Moving Forward to New Beginnings";
