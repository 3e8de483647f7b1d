/// Base trait for items selectable through the picker.
pub trait PickerEntry {
    /// Stable identifier. Row selection is compared by key, never by
    /// instance, because the selected item may be a different in-memory
    /// value on every render.
    fn key(&self) -> String;

    /// Display string, also the search target.
    fn label(&self) -> String;
}

/// Case-insensitive substring filter over `label()`.
///
/// An empty query returns the full list unchanged and in order. Entries
/// with an empty label never match a non-empty query but are still listed
/// when the query is empty.
pub fn filter_entries<T: PickerEntry + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Selection equality by key.
pub fn is_selected<T: PickerEntry>(selected: Option<&T>, entry: &T) -> bool {
    selected.map(|s| s.key() == entry.key()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        id: i64,
        name: String,
    }

    impl PickerEntry for Entry {
        fn key(&self) -> String {
            self.id.to_string()
        }

        fn label(&self) -> String {
            self.name.clone()
        }
    }

    fn entry(id: i64, name: &str) -> Entry {
        Entry {
            id,
            name: name.into(),
        }
    }

    #[test]
    fn empty_query_returns_full_list_in_order() {
        let items = vec![entry(2, "Bricks"), entry(1, "Cement"), entry(3, "")];
        assert_eq!(filter_entries(&items, ""), items);
    }

    #[test]
    fn matches_substring_case_insensitively() {
        let items = vec![entry(1, "Hollow Bricks"), entry(2, "Cement"), entry(3, "brick dust")];
        let hits = filter_entries(&items, "BRICK");
        assert_eq!(hits, vec![entry(1, "Hollow Bricks"), entry(3, "brick dust")]);
        // substring, not prefix
        assert_eq!(filter_entries(&items, "ment"), vec![entry(2, "Cement")]);
    }

    #[test]
    fn empty_label_never_matches_a_query() {
        let items = vec![entry(1, ""), entry(2, "Cement")];
        assert_eq!(filter_entries(&items, "c"), vec![entry(2, "Cement")]);
    }

    #[test]
    fn selection_is_by_key_not_instance() {
        let shown = entry(5, "Bricks");
        let other_instance = entry(5, "Bricks (renamed)");
        assert!(is_selected(Some(&other_instance), &shown));
        assert!(!is_selected(Some(&entry(6, "Bricks")), &shown));
        assert!(!is_selected::<Entry>(None, &shown));
    }
}
