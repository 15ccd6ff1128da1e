//! Feedback Messages
//!
//! Short encouragements shown after each inventory add.

pub const FEEDBACK_MESSAGES: &[&str] = &[
    "Great! Item added.",
    "Nice work, your list is growing!",
    "Got it! One less thing to remember.",
    "Added. You're getting organized!",
    "Another one packed into the plan!",
    "Excellent, keep them coming!",
];

/// Map a roll in `[0, 1)` uniformly onto `0..len`.
/// Rolls outside the range are clamped so the index is always valid.
pub fn index_for_roll(roll: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let roll = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };
    ((roll * len as f64) as usize).min(len - 1)
}

/// Feedback message for the given roll
pub fn pick_message(roll: f64) -> &'static str {
    FEEDBACK_MESSAGES[index_for_roll(roll, FEEDBACK_MESSAGES.len())]
}

/// Feedback message chosen with the browser's RNG
pub fn random_message() -> &'static str {
    pick_message(js_sys::Math::random())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_covers_every_message() {
        let len = FEEDBACK_MESSAGES.len();
        let mut seen = vec![false; len];
        for step in 0..1000 {
            let roll = step as f64 / 1000.0;
            seen[index_for_roll(roll, len)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_index_bounds() {
        assert_eq!(index_for_roll(0.0, 4), 0);
        assert_eq!(index_for_roll(0.999_999, 4), 3);
        assert_eq!(index_for_roll(1.0, 4), 3);
        assert_eq!(index_for_roll(-3.0, 4), 0);
        assert_eq!(index_for_roll(f64::NAN, 4), 0);
        assert_eq!(index_for_roll(0.5, 0), 0);
    }

    #[test]
    fn test_pick_message_is_from_fixed_set() {
        for roll in [0.0, 0.25, 0.5, 0.75, 0.99] {
            assert!(FEEDBACK_MESSAGES.contains(&pick_message(roll)));
        }
    }
}
