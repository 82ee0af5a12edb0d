use caseless::default_case_fold_str as fold;

use crate::catalog::{Catalog, ShortcutEntry};

pub const NO_MATCHES: &str = "No shortcuts found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRow {
    Category(&'static str),
    Item {
        combo: &'static str,
        description: &'static str,
    },
    Empty(&'static str),
}

/// Rows for one query, plus the positions of the `Item` rows in `rows`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    pub rows: Vec<DisplayRow>,
    pub selectable: Vec<usize>,
}

impl Filtered {
    pub fn item_at(&self, row: usize) -> Option<ShortcutEntry> {
        match *self.rows.get(row)? {
            DisplayRow::Item { combo, description } => Some(ShortcutEntry {
                combo,
                description,
            }),
            _ => None,
        }
    }
}

pub fn filter(catalog: &Catalog, query: &str) -> Filtered {
    let needle = fold(query);
    let mut rows = Vec::new();
    let mut selectable = Vec::new();

    for category in catalog.categories() {
        let mut matches = category
            .shortcuts
            .iter()
            .filter(|entry| needle.is_empty() || matches_entry(entry, &needle))
            .peekable();
        if matches.peek().is_none() {
            continue;
        }

        rows.push(DisplayRow::Category(category.name));
        for entry in matches {
            selectable.push(rows.len());
            rows.push(DisplayRow::Item {
                combo: entry.combo,
                description: entry.description,
            });
        }
    }

    if rows.is_empty() {
        rows.push(DisplayRow::Empty(NO_MATCHES));
    }

    Filtered { rows, selectable }
}

fn matches_entry(entry: &ShortcutEntry, needle: &str) -> bool {
    fold(entry.combo).contains(needle) || fold(entry.description).contains(needle)
}
