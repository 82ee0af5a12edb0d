use indexmap::IndexMap;

mod help_texts;
mod sections;

pub use help_texts::HELP_TEXTS;
pub use sections::SECTIONS;

pub const NO_HELP_TEXT: &str = "No extended help available for this shortcut.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutEntry {
    pub combo: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub shortcuts: &'static [ShortcutEntry],
}

/// Read-only shortcut table plus the extended help keyed by combo.
///
/// Combos are not unique across categories; help lookups only ever see the
/// combo string, so two entries sharing a combo share their help text.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: &'static [Category],
    help: IndexMap<&'static str, &'static str>,
}

impl Catalog {
    pub fn new(
        categories: &'static [Category],
        help_texts: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            categories,
            help: help_texts.iter().copied().collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(SECTIONS, HELP_TEXTS)
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn help_for(&self, combo: &str) -> &'static str {
        self.help.get(combo).copied().unwrap_or(NO_HELP_TEXT)
    }

    pub fn has_help(&self, combo: &str) -> bool {
        self.help.contains_key(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_starts_with_reload() {
        let catalog = Catalog::builtin();
        let first = catalog.categories()[0];
        assert_eq!(first.name, "Reload");
        assert_eq!(
            first.shortcuts[0],
            ShortcutEntry {
                combo: "Ctrl+Shift+F5",
                description: "Reload Kitty configuration",
            }
        );
    }

    #[test]
    fn duplicate_combos_are_kept() {
        let catalog = Catalog::builtin();
        let owners: Vec<&str> = catalog
            .categories()
            .iter()
            .filter(|c| c.shortcuts.iter().any(|s| s.combo == "Ctrl+Alt+M"))
            .map(|c| c.name)
            .collect();
        assert_eq!(owners, vec!["System Monitoring", "Utilities"]);
    }

    #[test]
    fn help_lookup_falls_back_to_placeholder() {
        let catalog = Catalog::builtin();
        assert!(catalog.help_for("Ctrl+Shift+/").starts_with("Shortcuts Palette"));
        assert!(catalog.has_help("Ctrl+Alt+X"));
        assert!(!catalog.has_help("Ctrl+Shift+T"));
        assert_eq!(catalog.help_for("Ctrl+Shift+T"), NO_HELP_TEXT);
        assert_eq!(catalog.help_for(""), NO_HELP_TEXT);
    }

    #[test]
    fn every_help_entry_names_a_listed_combo() {
        let catalog = Catalog::builtin();
        for (combo, _) in HELP_TEXTS {
            let listed = catalog
                .categories()
                .iter()
                .flat_map(|c| c.shortcuts.iter())
                .any(|s| s.combo == *combo);
            assert!(listed, "help text for unlisted combo {combo}");
        }
    }

    #[test]
    fn empty_catalog_is_representable() {
        let catalog = Catalog::new(&[], &[]);
        assert!(catalog.categories().is_empty());
        assert_eq!(catalog.help_for("Ctrl+Alt+X"), NO_HELP_TEXT);
    }
}
