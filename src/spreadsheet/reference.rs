//! Conversions between Excel-style references and zero-based indexes.

/// Converts column letters to a zero-based column index.
///
/// A = 0, B = 1, ..., Z = 25, AA = 26, AB = 27, ...
/// Letters are case-insensitive. Returns `None` for an empty string or any
/// non-letter character.
pub fn col_to_index(letters: &str) -> Option<usize> {
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    letters
        .to_ascii_uppercase()
        .chars()
        .map(|letter| letter as usize - 'A' as usize + 1)
        .try_fold(0usize, |index, digit| index.checked_mul(26)?.checked_add(digit))
        .map(|column| column - 1)
}

/// Converts a zero-based column index to column letters.
pub fn index_to_col(index: usize) -> String {
    let mut column = index + 1;
    let mut letters = String::new();
    while column > 0 {
        column -= 1;
        letters.insert(0, (b'A' + (column % 26) as u8) as char);
        column /= 26;
    }
    letters
}

/// Returns the Excel-style reference of a zero-based cell position (e.g. "A1").
pub fn index_to_reference(row: usize, col: usize) -> String {
    format!("{}{}", index_to_col(col), row + 1)
}
