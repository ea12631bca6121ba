//! Name filtering over a computed child set.
//!
//! Search is scoped to the children of the current location and does
//! not recurse into descendants. Whole-tree search is a recorded
//! product decision, not an oversight here.

use drive_entity::item::DriveItem;

/// Narrow a displayed set to items whose name contains the query,
/// case-insensitively. An empty or blank query returns the input
/// unchanged.
pub fn filter_items(items: Vec<DriveItem>, query: &str) -> Vec<DriveItem> {
    let query = query.trim();
    if query.is_empty() {
        return items;
    }

    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{file, folder};

    fn items() -> Vec<DriveItem> {
        vec![
            DriveItem::from(&folder(2, "Reports", Some(1))),
            DriveItem::from(&file(10, 1, "notes.txt")),
            DriveItem::from(&file(11, 1, "Budget.xlsx")),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        assert_eq!(filter_items(items(), ""), items());
        assert_eq!(filter_items(items(), "   "), items());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_items(items(), "ot");
        let twice = filter_items(once.clone(), "ot");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let hits = filter_items(items(), "BUD");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Budget.xlsx");
    }

    #[test]
    fn test_distinguishing_names_select_only_the_file() {
        // "notes.txt" contains "notes"; "Reports" and "Budget.xlsx" do not.
        let hits = filter_items(items(), "notes");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), 10);
    }
}
