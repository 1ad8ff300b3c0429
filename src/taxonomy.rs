/// One commit category offered by the type prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitTypeEntry {
    pub id: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Gitmoji `:shortcode:` equivalent of `icon`
    pub shortcode: &'static str,
}

const BUILTIN_TYPES: &[CommitTypeEntry] = &[
    CommitTypeEntry {
        id: "build",
        description: "Changes to the build system or external dependencies.",
        icon: "\u{1f4e6}",
        shortcode: ":package:",
    },
    CommitTypeEntry {
        id: "chore",
        description: "General maintenance tasks not related to features or bugs.",
        icon: "\u{1f9f9}",
        shortcode: ":broom:",
    },
    CommitTypeEntry {
        id: "ci",
        description: "Changes to continuous integration or deployment.",
        icon: "\u{1f477}",
        shortcode: ":construction_worker:",
    },
    CommitTypeEntry {
        id: "docs",
        description: "Changes to documentation only.",
        icon: "\u{1f4dd}",
        shortcode: ":memo:",
    },
    CommitTypeEntry {
        id: "feat",
        description: "Adds a new feature to the application.",
        icon: "\u{2728}",
        shortcode: ":sparkles:",
    },
    CommitTypeEntry {
        id: "fix",
        description: "Corrects a bug in the application.",
        icon: "\u{1f41b}",
        shortcode: ":bug:",
    },
    CommitTypeEntry {
        id: "perf",
        description: "Changes that improve performance.",
        icon: "\u{26a1}\u{fe0f}",
        shortcode: ":zap:",
    },
    CommitTypeEntry {
        id: "refactor",
        description: "Changes that neither add a feature nor fix a bug.",
        icon: "\u{267b}\u{fe0f}",
        shortcode: ":recycle:",
    },
    CommitTypeEntry {
        id: "style",
        description: "Changes that do not affect the meaning of the code (e.g., formatting).",
        icon: "\u{1f3a8}",
        shortcode: ":art:",
    },
    CommitTypeEntry {
        id: "test",
        description: "Adds or updates tests.",
        icon: "\u{2705}",
        shortcode: ":white_check_mark:",
    },
    CommitTypeEntry {
        id: "wip",
        description: "Marks a commit as work in progress (should not be included in final commits).",
        icon: "\u{1f6a7}",
        shortcode: ":construction:",
    },
];

/// Ordered, read-only table of commit types.
#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    entries: &'static [CommitTypeEntry],
}

impl Taxonomy {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_TYPES,
        }
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &'static CommitTypeEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&'static CommitTypeEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn first(&self) -> Option<&'static CommitTypeEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_unique_and_non_empty() {
        let taxonomy = Taxonomy::builtin();
        let mut seen = HashSet::new();
        for entry in taxonomy.iter() {
            assert!(!entry.id.is_empty());
            assert!(seen.insert(entry.id), "duplicate id {}", entry.id);
        }
        assert_eq!(seen.len(), taxonomy.len());
    }

    #[test]
    fn test_builtin_order_starts_with_build() {
        let taxonomy = Taxonomy::builtin();
        let ids: Vec<_> = taxonomy.iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec![
                "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "style",
                "test", "wip"
            ]
        );
        assert_eq!(taxonomy.first().map(|e| e.id), Some("build"));
    }

    #[test]
    fn test_get_known_and_unknown() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.get("fix").map(|e| e.icon), Some("\u{1f41b}"));
        assert!(taxonomy.get("feature").is_none());
        assert!(taxonomy.get("").is_none());
    }

    #[test]
    fn test_every_entry_has_icon_and_shortcode() {
        for entry in Taxonomy::builtin().iter() {
            assert!(!entry.icon.is_empty());
            assert!(entry.shortcode.starts_with(':') && entry.shortcode.ends_with(':'));
        }
    }
}
