//! Shortcut binding configuration.
//!
//! The mutation chords are character-based: primary-modifier plus a
//! produced character. Hosts can override the characters through
//! configuration (TOML), keeping the defaults of the editor: `;` or `+`
//! to insert a row, `-` to delete one.

use serde::{Deserialize, Serialize};

/// Characters bound to the row-mutation chords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutBindings {
    /// Characters that, with the primary modifier, insert a row.
    pub insert_keys: Vec<char>,
    /// Character that, with the primary modifier, removes the focused row.
    pub remove_key: char,
}

impl Default for ShortcutBindings {
    fn default() -> Self {
        Self {
            insert_keys: vec![';', '+'],
            remove_key: '-',
        }
    }
}

impl ShortcutBindings {
    /// Parse bindings from a TOML document.
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Whether the character triggers the insert chord.
    pub fn is_insert_key(&self, ch: char) -> bool {
        self.insert_keys.contains(&ch)
    }

    /// Whether the character triggers the remove chord.
    pub fn is_remove_key(&self, ch: char) -> bool {
        self.remove_key == ch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let bindings = ShortcutBindings::default();
        assert!(bindings.is_insert_key(';'));
        assert!(bindings.is_insert_key('+'));
        assert!(bindings.is_remove_key('-'));
        assert!(!bindings.is_insert_key('-'));
        assert!(!bindings.is_remove_key(';'));
    }

    #[test]
    fn test_from_toml_full() {
        let bindings = ShortcutBindings::from_toml_str(
            r#"
insert_keys = ["n"]
remove_key = "d"
"#,
        )
        .unwrap();
        assert!(bindings.is_insert_key('n'));
        assert!(!bindings.is_insert_key(';'));
        assert!(bindings.is_remove_key('d'));
    }

    #[test]
    fn test_from_toml_partial_falls_back_to_defaults() {
        let bindings = ShortcutBindings::from_toml_str(r#"remove_key = "x""#).unwrap();
        assert_eq!(bindings.insert_keys, vec![';', '+']);
        assert!(bindings.is_remove_key('x'));
    }

    #[test]
    fn test_from_toml_empty() {
        let bindings = ShortcutBindings::from_toml_str("").unwrap();
        assert_eq!(bindings, ShortcutBindings::default());
    }
}
