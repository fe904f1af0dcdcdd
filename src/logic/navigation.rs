//! Selection logic
//!
//! Pure functions for list selection and dropdown cycling with wrapping behavior.

/// Next list index, wrapping to the start. Selects the first item when nothing is selected.
///
/// # Examples
/// ```
/// use resadmin::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Previous list index, wrapping to the end. Selects the last item when nothing is selected.
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Keep a selection valid after the list was replaced
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    match current {
        Some(i) => Some(i.min(list_len - 1)),
        None => Some(0),
    }
}

/// Step a dropdown through `["" (unselected), values...]` with wrap-around.
///
/// A current value that is not among `values` (for example a subject left
/// over from another semester) steps as if it were unselected.
///
/// # Examples
/// ```
/// use resadmin::logic::navigation::cycle_value;
///
/// let values = vec!["6".to_string(), "4".to_string()];
/// assert_eq!(cycle_value("", &values, true), "6");
/// assert_eq!(cycle_value("4", &values, true), "");
/// assert_eq!(cycle_value("", &values, false), "4");
/// ```
pub fn cycle_value(current: &str, values: &[String], forward: bool) -> String {
    // Slot 0 is the unselected placeholder
    let slots = values.len() + 1;
    let current_slot = values
        .iter()
        .position(|v| v == current)
        .map(|i| i + 1)
        .unwrap_or(0);

    let next_slot = if forward {
        (current_slot + 1) % slots
    } else {
        (current_slot + slots - 1) % slots
    };

    if next_slot == 0 {
        String::new()
    } else {
        values[next_slot - 1].clone()
    }
}
