//! Inventory List
//!
//! Ordered list of line items plus the validation applied on add.
//! Kept free of any UI types so the controller's behavior can be tested natively.

use serde::{Deserialize, Serialize};

use crate::error::AddRejected;
use crate::models::LineItem;

/// Ordered line items, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<LineItem>,
}

/// Parse the raw quantity field as a positive whole number
pub fn parse_quantity(raw: &str) -> Result<u32, AddRejected> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| AddRejected::NotANumber(trimmed.to_string()))?;
    if value < 1 {
        return Err(AddRejected::NotPositive(value));
    }
    u32::try_from(value).map_err(|_| AddRejected::NotANumber(trimmed.to_string()))
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a line item from raw form input without touching any list
    pub fn validate(room: &str, item: &str, quantity_raw: &str) -> Result<LineItem, AddRejected> {
        let item = item.trim();
        if item.is_empty() {
            return Err(AddRejected::EmptyItem);
        }
        let quantity = parse_quantity(quantity_raw)?;
        Ok(LineItem::new(room.trim(), item, quantity))
    }

    /// Append a line item built from raw form input.
    /// On rejection the list is left untouched.
    pub fn add(&mut self, room: &str, item: &str, quantity_raw: &str) -> Result<&LineItem, AddRejected> {
        let line = Self::validate(room, item, quantity_raw)?;
        Ok(self.push(line))
    }

    /// Append an already validated line item
    pub fn push(&mut self, line: LineItem) -> &LineItem {
        self.items.push(line);
        &self.items[self.items.len() - 1]
    }

    /// Remove the entry at `index`, shifting later entries down.
    /// Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of pieces across all rows
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// JSON array of `{room, item, quantity}` objects in insertion order
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|_| String::from("[]"))
    }

    /// Parse a submitted payload; empty or malformed input yields an empty list
    pub fn from_json(payload: &str) -> Self {
        if payload.trim().is_empty() {
            return Self::new();
        }
        serde_json::from_str(payload).unwrap_or_default()
    }
}
