//! Frontend Models
//!
//! Data structures shared between pages. Field order of `LineItem` is the
//! key order of the submitted JSON payload.

use serde::{Deserialize, Serialize};

/// One room/item/quantity entry in the inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub room: String,
    pub item: String,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(room: impl Into<String>, item: impl Into<String>, quantity: u32) -> Self {
        Self {
            room: room.into(),
            item: item.into(),
            quantity,
        }
    }
}

/// Contact details and moving parameters from the booking page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD` as typed into the date input
    pub move_date: String,
    pub origin: String,
    pub destination: String,
    pub notes: String,
}

/// Crew, duration and cost estimate for a move
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub movers: u32,
    /// Rounded to 1 decimal
    pub hours: f64,
    /// Rounded to 2 decimals
    pub cost: f64,
    pub bedrooms: u32,
    pub stairs_origin: u32,
    pub stairs_destination: u32,
    pub heavy_items: u32,
    pub distance_km: f64,
    pub peak_season: bool,
}

/// A packing/moving tip (body is Markdown)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_json_key_order() {
        let item = LineItem::new("Kitchen", "Blender", 2);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"room":"Kitchen","item":"Blender","quantity":2}"#);
    }

    #[test]
    fn test_line_item_rejects_negative_quantity() {
        let parsed = serde_json::from_str::<LineItem>(r#"{"room":"A","item":"B","quantity":-1}"#);
        assert!(parsed.is_err());
    }
}
