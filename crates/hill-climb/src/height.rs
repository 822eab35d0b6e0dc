//! Height normalization for cell labels.
//!
//! Heights run `a` (lowest) to `z` (highest). The start marker sits at the
//! bottom of that range and the end marker at the top.

/// Label of the cell the climb starts from.
pub const START_MARKER: char = 'S';

/// Label of the summit cell.
pub const END_MARKER: char = 'E';

/// Check whether a character may appear as a cell label.
pub fn is_label(label: char) -> bool {
    label.is_ascii_lowercase() || label == START_MARKER || label == END_MARKER
}

/// Map a cell label to its comparable height.
///
/// The returned ordinal shares the order of `'a'..='z'`, so heights can be
/// compared and offset directly.
pub fn normalize(label: char) -> u32 {
    debug_assert!(is_label(label), "not a height label: {label:?}");
    match label {
        START_MARKER => 'a' as u32,
        END_MARKER => 'z' as u32,
        other => other as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_map_to_extremes() {
        assert_eq!(normalize(START_MARKER), normalize('a'));
        assert_eq!(normalize(END_MARKER), normalize('z'));
    }

    #[test]
    fn test_letters_keep_their_order() {
        let heights: Vec<u32> = ('a'..='z').map(normalize).collect();
        assert!(heights.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_is_label() {
        assert!(is_label('a'));
        assert!(is_label('z'));
        assert!(is_label('S'));
        assert!(is_label('E'));
        assert!(!is_label('A'));
        assert!(!is_label('.'));
        assert!(!is_label('#'));
    }
}
