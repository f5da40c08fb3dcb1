const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Renders an element count as Unicode subscript digits. A count of one is implied
/// in a formula and renders as the empty string.
pub fn subscript_count(count: usize) -> String {
    if count == 1 {
        return String::new();
    }
    count
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| SUBSCRIPT_DIGITS[d as usize])
        .collect()
}
