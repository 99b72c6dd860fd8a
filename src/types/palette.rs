//! The shared allowed-colour registry.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Colours every default palette starts with.
pub const DEFAULT_COLOURS: [&str; 7] = [
    "red",
    "blue",
    "green",
    "yellow",
    "black",
    "white",
    "periwinkle",
];

/// A shared, growable registry of allowed colour names.
///
/// A `Palette` is a handle: cloning it yields another handle to the same
/// underlying list, so colours added through any handle are visible to
/// every holder. The list is append-only (there is no removal) and appends
/// are not de-duplicated. Reads and writes go through a lock, so handles
/// may be shared across threads.
///
/// Points already constructed against a palette are never re-checked;
/// additions only affect subsequent constructions.
#[derive(Debug, Clone)]
pub struct Palette {
    colours: Arc<RwLock<Vec<String>>>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self {
            colours: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a palette seeded with the builtin default colours.
    pub fn default_palette() -> Self {
        Self::with_colours(DEFAULT_COLOURS)
    }

    /// Create a palette from an explicit colour list.
    pub fn with_colours<I, S>(colours: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colours: Arc::new(RwLock::new(colours.into_iter().map(Into::into).collect())),
        }
    }

    /// Append a colour to the registry.
    ///
    /// Takes effect immediately for all subsequent constructions through
    /// any handle. Duplicates are kept as-is.
    pub fn add(&self, colour: impl Into<String>) {
        self.write().push(colour.into());
    }

    /// Check whether a colour is currently allowed.
    pub fn contains(&self, name: &str) -> bool {
        self.read().iter().any(|c| c == name)
    }

    /// Snapshot of the current colour list, in insertion order.
    pub fn colours(&self) -> Vec<String> {
        self.read().clone()
    }

    /// Number of entries in the registry, duplicates included.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A poisoned lock only means another thread panicked mid-append; the
    // Vec itself is still usable, so recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, Vec<String>> {
        self.colours.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<String>> {
        self.colours.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::default_palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default_palette();

        assert_eq!(palette.len(), 7);
        assert!(palette.contains("red"));
        assert!(palette.contains("periwinkle"));
        assert!(!palette.contains("ultraviolet"));
    }

    #[test]
    fn test_new_is_empty() {
        let palette = Palette::new();
        assert!(palette.is_empty());
        assert!(!palette.contains("red"));
    }

    #[test]
    fn test_add() {
        let palette = Palette::default_palette();
        palette.add("ultraviolet");

        assert!(palette.contains("ultraviolet"));
        assert_eq!(palette.len(), 8);
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let palette = Palette::default_palette();
        palette.add("red");
        palette.add("red");

        assert_eq!(palette.len(), 9);
        assert_eq!(
            palette.colours().iter().filter(|c| *c == "red").count(),
            3
        );
    }

    #[test]
    fn test_clones_share_the_registry() {
        let a = Palette::default_palette();
        let b = a.clone();

        b.add("ultraviolet");

        // Visible through the original handle, not just the clone.
        assert!(a.contains("ultraviolet"));
        assert_eq!(a.colours(), b.colours());
    }

    #[test]
    fn test_colours_preserves_insertion_order() {
        let palette = Palette::with_colours(["one", "two"]);
        palette.add("three");

        assert_eq!(palette.colours(), vec!["one", "two", "three"]);
    }
}
