//! Staffing count/name synchronization.
//!
//! The attendance section stores a count alongside a list of names, and the
//! two must never drift apart: whenever the count changes, the name list is
//! resized to exactly that length, keeping existing entries in order.

/// Clamps a user-entered count to a usable list length.
///
/// Negative or fractional input floors to the nearest non-negative integer.
#[must_use]
pub fn clamp_count(count: f64) -> usize {
    if !count.is_finite() || count <= 0.0 {
        return 0;
    }
    // Cast safety: count is finite and non-negative here; floor makes the
    // truncation exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        count.floor() as usize
    }
}

/// Produces a name list of exactly `count` entries from the current one.
///
/// Existing names are preserved in order; a shrinking list truncates from the
/// tail, a growing one appends empty-string placeholders. Never reorders.
#[must_use]
pub fn resync_names(names: &[String], count: usize) -> Vec<String> {
    let mut resynced: Vec<String> = names.iter().take(count).cloned().collect();
    while resynced.len() < count {
        resynced.push(String::new());
    }
    resynced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_resync_truncates_from_the_tail() {
        let current = names(&["A", "B", "C"]);
        assert_eq!(resync_names(&current, 1), names(&["A"]));
    }

    #[test]
    fn test_resync_pads_with_empty_placeholders() {
        let current = names(&["A", "B", "C"]);
        assert_eq!(resync_names(&current, 5), names(&["A", "B", "C", "", ""]));
    }

    #[test]
    fn test_resync_same_length_is_identity() {
        let current = names(&["A", "B"]);
        assert_eq!(resync_names(&current, 2), current);
    }

    #[test]
    fn test_clamp_count_floors_fractional_input() {
        assert_eq!(clamp_count(3.9), 3);
        assert_eq!(clamp_count(0.4), 0);
    }

    #[test]
    fn test_clamp_count_negative_yields_empty_list() {
        let count = clamp_count(-2.0);
        assert_eq!(count, 0);
        assert_eq!(resync_names(&names(&["A", "B"]), count), Vec::<String>::new());
    }

    #[test]
    fn test_clamp_count_non_finite_is_zero() {
        assert_eq!(clamp_count(f64::NAN), 0);
        assert_eq!(clamp_count(f64::INFINITY), 0);
    }
}
