//! Row Keying
//!
//! Stable keys for newest-first lists.

/// Pair each entry with its ordinal counted from the oldest entry.
///
/// Prepending adds one new key at the front and leaves all existing keys
/// unchanged, so a keyed list inserts exactly one node.
pub fn keyed_rows<T: Clone>(entries: &[T]) -> Vec<(usize, T)> {
    let len = entries.len();
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (len - 1 - index, entry.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_rows_keep_order() {
        let rows = keyed_rows(&["B", "A"]);
        assert_eq!(rows, vec![(1, "B"), (0, "A")]);
    }

    #[test]
    fn test_prepend_adds_one_new_key() {
        let before = keyed_rows(&["B", "A"]);
        let after = keyed_rows(&["C", "B", "A"]);

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[0], (2, "C"));
        // Existing rows keep their keys
        assert_eq!(&after[1..], before.as_slice());
    }

    #[test]
    fn test_empty_list_has_no_rows() {
        let rows: Vec<(usize, String)> = keyed_rows(&[]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_duplicates_get_distinct_keys() {
        let rows = keyed_rows(&["same", "same"]);
        assert_ne!(rows[0].0, rows[1].0);
    }
}
