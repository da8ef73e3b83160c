//! Application configuration loaded from a TOML file.
//!
//! The default configuration matches the values shown in `config/default.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{ManifestSource, DEFAULT_MANIFEST};
use crate::error::{CoreError, CoreResult};
use crate::gallery::MAX_IMAGES;
use crate::profile::ProfileContent;

/// Top-level application configuration.
///
/// All fields have sensible defaults so Folio works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub profile: ProfileContent,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
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
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Gallery widget settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Manifest location: an `http(s)://` URL or a file path.
    #[serde(default = "default_manifest")]
    pub manifest: String,
    #[serde(default = "default_max_images")]
    pub max_images: usize,
    /// Folder the Upload browser starts in. Defaults to the working directory.
    #[serde(default)]
    pub upload_dir: Option<PathBuf>,
}

impl GalleryConfig {
    pub fn manifest_source(&self) -> ManifestSource {
        ManifestSource::parse(&self.manifest)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            max_images: default_max_images(),
            upload_dir: None,
        }
    }
}

/// Layout and display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Share of the width given to the profile card (0.0–1.0).
    #[serde(default = "default_panel_ratio")]
    pub panel_ratio: f64,
    /// Blank cells between tab labels.
    #[serde(default = "default_tab_gap")]
    pub tab_gap: u16,
    /// Render the focused uploaded image with the terminal graphics protocol.
    #[serde(default = "default_true")]
    pub image_preview: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            panel_ratio: default_panel_ratio(),
            tab_gap: default_tab_gap(),
            image_preview: true,
        }
    }
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST.to_string()
}

fn default_max_images() -> usize {
    MAX_IMAGES
}

fn default_panel_ratio() -> f64 {
    0.5
}

fn default_tab_gap() -> u16 {
    1
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_gallery() {
        let config = Config::default();
        assert_eq!(config.gallery.manifest, "gallery-manifest.json");
        assert_eq!(config.gallery.max_images, 3);
        assert!(config.gallery.upload_dir.is_none());
        assert_eq!(
            config.gallery.manifest_source(),
            ManifestSource::File(PathBuf::from("gallery-manifest.json"))
        );
    }

    #[test]
    fn default_config_ui() {
        let config = Config::default();
        assert!((config.ui.panel_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.ui.tab_gap, 1);
        assert!(config.ui.image_preview);
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[gallery]
manifest = "https://cdn.example/gallery-manifest.json"
max_images = 5
upload_dir = "/srv/pictures"

[profile]
about = "Hi, I'm Sam."
recommended = "Ask around."

[ui]
panel_ratio = 0.6
tab_gap = 2
image_preview = false
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(
            config.gallery.manifest_source(),
            ManifestSource::Http("https://cdn.example/gallery-manifest.json".to_string())
        );
        assert_eq!(config.gallery.max_images, 5);
        assert_eq!(config.gallery.upload_dir, Some(PathBuf::from("/srv/pictures")));
        assert_eq!(config.profile.about, "Hi, I'm Sam.");
        assert_eq!(config.profile.recommended, "Ask around.");
        assert_eq!(
            config.profile.experiences,
            ProfileContent::default().experiences
        );
        assert!((config.ui.panel_ratio - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.ui.tab_gap, 2);
        assert!(!config.ui.image_preview);
    }

    #[test]
    fn load_empty_toml_uses_all_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.gallery.max_images, MAX_IMAGES);
        assert_eq!(config.profile, ProfileContent::default());
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Config::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "this is not valid [[[toml").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }
}
