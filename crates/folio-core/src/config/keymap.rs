//! Key binding configuration.
//!
//! Key bindings map key names (e.g. `"l"`, `"Tab"`, `"BackTab"`) to
//! [`Action`] values. TOML files use string action identifiers
//! (e.g. `"gallery_next"`), resolved through [`ActionRegistry::find_by_id`]
//! at load time.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionRegistry};
use crate::error::{CoreError, CoreResult};

/// Raw TOML representation — deserialized first, then resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawKeymap {
    #[serde(default)]
    bindings: HashMap<String, String>,
}

/// Complete set of key bindings.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
    /// Reverse map: Action → list of key strings (for the help overlay).
    reverse: HashMap<Action, Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Profile tabs
        bindings.insert("1".to_string(), Action::TabAbout);
        bindings.insert("2".to_string(), Action::TabExperiences);
        bindings.insert("3".to_string(), Action::TabRecommended);
        bindings.insert("Tab".to_string(), Action::TabNext);
        bindings.insert("BackTab".to_string(), Action::TabPrev);

        // Gallery
        bindings.insert("h".to_string(), Action::GalleryPrev);
        bindings.insert("l".to_string(), Action::GalleryNext);
        bindings.insert("x".to_string(), Action::GalleryDelete);
        bindings.insert("a".to_string(), Action::ChooserToggle);

        bindings.insert("q".to_string(), Action::Quit);
        bindings.insert("?".to_string(), Action::Help);

        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }
}

fn build_reverse(bindings: &HashMap<String, Action>) -> HashMap<Action, Vec<String>> {
    let mut reverse: HashMap<Action, Vec<String>> = HashMap::new();
    for (key, action) in bindings {
        reverse.entry(*action).or_default().push(key.clone());
    }
    for keys in reverse.values_mut() {
        keys.sort();
    }
    reverse
}

impl Keymap {
    /// Loads key bindings from a TOML file at `path`.
    ///
    /// Unknown action strings are silently ignored.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        let raw: RawKeymap =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawKeymap) -> Self {
        let registry = ActionRegistry::new();
        let bindings: HashMap<String, Action> = raw
            .bindings
            .into_iter()
            .filter_map(|(key, action_id)| {
                match registry.find_by_id(&action_id) {
                    Some(action) => Some((key, action)),
                    None => {
                        tracing::warn!(%key, %action_id, "ignoring binding to unknown action");
                        None
                    }
                }
            })
            .collect();
        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }

    /// Returns the action mapped to `key`, or `None` if unbound.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Returns the key(s) bound to a given action.
    pub fn keys_for_action(&self, action: Action) -> Option<&[String]> {
        self.reverse.get(&action).map(|v| v.as_slice())
    }

    pub fn bindings(&self) -> &HashMap<String, Action> {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_keymap_has_tab_keys() {
        let keymap = Keymap::default();
        assert_eq!(keymap.action_for_key("1"), Some(Action::TabAbout));
        assert_eq!(keymap.action_for_key("2"), Some(Action::TabExperiences));
        assert_eq!(keymap.action_for_key("3"), Some(Action::TabRecommended));
        assert_eq!(keymap.action_for_key("Tab"), Some(Action::TabNext));
        assert_eq!(keymap.action_for_key("BackTab"), Some(Action::TabPrev));
    }

    #[test]
    fn default_keymap_has_gallery_keys() {
        let keymap = Keymap::default();
        assert_eq!(keymap.action_for_key("h"), Some(Action::GalleryPrev));
        assert_eq!(keymap.action_for_key("l"), Some(Action::GalleryNext));
        assert_eq!(keymap.action_for_key("x"), Some(Action::GalleryDelete));
        assert_eq!(keymap.action_for_key("a"), Some(Action::ChooserToggle));
    }

    #[test]
    fn action_for_unknown_key_returns_none() {
        let keymap = Keymap::default();
        assert_eq!(keymap.action_for_key("z"), None);
        assert_eq!(keymap.action_for_key(""), None);
    }

    #[test]
    fn load_custom_keymap() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(
            &path,
            r#"
[bindings]
n = "gallery_next"
p = "gallery_prev"
d = "gallery_delete"
"#,
        )
        .unwrap();

        let keymap = Keymap::load(&path).unwrap();

        assert_eq!(keymap.action_for_key("n"), Some(Action::GalleryNext));
        assert_eq!(keymap.action_for_key("p"), Some(Action::GalleryPrev));
        assert_eq!(keymap.action_for_key("d"), Some(Action::GalleryDelete));
        // A loaded keymap replaces the defaults entirely
        assert_eq!(keymap.action_for_key("l"), None);
    }

    #[test]
    fn load_custom_keymap_ignores_unknown_actions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(
            &path,
            r#"
[bindings]
n = "gallery_next"
z = "nonexistent_action"
"#,
        )
        .unwrap();

        let keymap = Keymap::load(&path).unwrap();
        assert_eq!(keymap.action_for_key("n"), Some(Action::GalleryNext));
        assert_eq!(keymap.action_for_key("z"), None);
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Keymap::load(&tmp.path().join("nope.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(&path, "invalid[[[toml").unwrap();

        let result = Keymap::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn keys_for_action_returns_bound_keys() {
        let keymap = Keymap::default();
        let keys = keymap.keys_for_action(Action::Quit).unwrap();
        assert!(keys.contains(&"q".to_string()));
    }

    #[test]
    fn keys_for_unbound_action_is_none() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(&path, "[bindings]\nq = \"quit\"\n").unwrap();

        let keymap = Keymap::load(&path).unwrap();
        assert!(keymap.keys_for_action(Action::Help).is_none());
        assert_eq!(keymap.bindings().len(), 1);
    }
}
