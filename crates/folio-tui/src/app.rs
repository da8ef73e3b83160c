use std::path::{Path, PathBuf};

use ratatui::layout::Rect;

use folio_core::action::ActionRegistry;
use folio_core::config::keymap::Keymap;
use folio_core::config::settings::{Config, UiConfig};
use folio_core::config::theme::Theme;
use folio_core::error::CoreResult;
use folio_core::event::Command;
use folio_core::fs::entry::file_name;
use folio_core::gallery::{Blob, GalleryWidget};
use folio_core::profile::{ProfileCard, ProfileContent};

use crate::layout::TabStripLayout;

/// Application mode — determines how input is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Help,
}

/// Progress of the background manifest fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Loaded(usize),
}

/// Returns the configuration directory: `./config` when present, otherwise
/// `~/.config/folio`.
pub fn config_dir() -> PathBuf {
    let local = Path::new("config");
    if local.is_dir() {
        return local.to_path_buf();
    }
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".config")
        .join("folio")
}

/// Loads `default.toml`, `keymap.toml` and `theme.toml` from `dir`, falling
/// back to defaults for anything missing or malformed.
pub fn load_settings(dir: &Path) -> (Config, Keymap, Theme) {
    let config = Config::load(&dir.join("default.toml")).unwrap_or_else(|e| {
        tracing::debug!("Using default config: {e}");
        Config::default()
    });
    let keymap = Keymap::load(&dir.join("keymap.toml")).unwrap_or_default();
    let theme = Theme::load(&dir.join("theme.toml")).unwrap_or_default();
    (config, keymap, theme)
}

/// Top-level application state.
///
/// Transitions consume `self` and return the next state.
#[derive(Debug)]
pub struct App {
    mode: AppMode,
    profile: ProfileCard,
    content: ProfileContent,
    tab_layout: TabStripLayout,
    gallery: GalleryWidget,
    catalog_status: CatalogStatus,
    keymap: Keymap,
    action_registry: ActionRegistry,
    theme: Theme,
    ui: UiConfig,
    should_quit: bool,
    status_message: Option<String>,
}

impl App {
    /// Builds the app from loaded settings. `upload_dir` is where the chooser
    /// starts browsing for local images.
    pub fn new(config: Config, keymap: Keymap, theme: Theme, upload_dir: PathBuf) -> Self {
        Self {
            mode: AppMode::Normal,
            profile: ProfileCard::new(),
            content: config.profile,
            tab_layout: TabStripLayout::default(),
            gallery: GalleryWidget::new(config.gallery.max_images, upload_dir),
            catalog_status: CatalogStatus::Loading,
            keymap,
            action_registry: ActionRegistry::new(),
            theme,
            ui: config.ui,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn profile(&self) -> &ProfileCard {
        &self.profile
    }

    pub fn content(&self) -> &ProfileContent {
        &self.content
    }

    pub fn tab_layout(&self) -> &TabStripLayout {
        &self.tab_layout
    }

    pub fn gallery(&self) -> &GalleryWidget {
        &self.gallery
    }

    pub fn catalog_status(&self) -> CatalogStatus {
        self.catalog_status
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn action_registry(&self) -> &ActionRegistry {
        &self.action_registry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// `true` while the image chooser overlay captures input.
    pub fn chooser_open(&self) -> bool {
        self.gallery.chooser().is_open()
    }

    pub fn with_mode(self, mode: AppMode) -> Self {
        Self { mode, ..self }
    }

    /// Mark the app for quitting.
    pub fn with_quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }

    /// Set a status message.
    pub fn with_status(self, msg: String) -> Self {
        Self {
            status_message: Some(msg),
            ..self
        }
    }

    /// Clear the status message.
    pub fn with_clear_status(self) -> Self {
        Self {
            status_message: None,
            ..self
        }
    }

    /// Re-measures the tab strip for a new screen size and moves the
    /// indicator under the active tab.
    pub fn with_viewport(self, area: Rect) -> Self {
        let tab_layout = TabStripLayout::for_screen(area, self.ui.panel_ratio, self.ui.tab_gap);
        let profile = self.profile.recompute_indicator(&tab_layout);
        Self {
            profile,
            tab_layout,
            ..self
        }
    }

    /// Installs the public catalog delivered by the background loader.
    pub fn with_catalog(self, urls: Vec<String>) -> Self {
        let catalog_status = CatalogStatus::Loaded(urls.len());
        Self {
            gallery: self.gallery.load_public_catalog(urls),
            catalog_status,
            ..self
        }
    }

    /// Hands over the queued upload path, if any, for an off-thread read.
    pub fn take_pending_upload(self) -> (Self, Option<PathBuf>) {
        let (gallery, pending) = self.gallery.take_pending_upload();
        let app = Self { gallery, ..self };
        match pending {
            Some(path) => {
                let status = format!("Reading {}…", file_name(&path));
                (app.with_status(status), Some(path))
            }
            None => (app, None),
        }
    }

    /// Applies a finished upload read.
    pub fn with_upload_result(self, path: &Path, loaded: CoreResult<Blob>) -> Self {
        self.map_gallery(|g| g.accept_upload(path, loaded))
            .with_clear_status()
    }

    /// Dispatches a core command.
    pub fn handle_command(self, cmd: Command) -> Self {
        match cmd {
            Command::SelectTab(tab) => {
                let profile = self.profile.select_tab(tab, &self.tab_layout);
                Self { profile, ..self }
            }
            Command::NextTab => {
                let next = self.profile.active_tab().next();
                self.handle_command(Command::SelectTab(next))
            }
            Command::PrevTab => {
                let prev = self.profile.active_tab().prev();
                self.handle_command(Command::SelectTab(prev))
            }
            Command::Navigate(direction) => self.map_gallery(|g| g.navigate(direction)),
            Command::DeleteImage(index) => self.handle_delete(Some(index)),
            Command::DeleteFocused => self.handle_delete(None),
            Command::AddLocalImage(path) => self.map_gallery(|g| g.request_local_upload(&path)),
            Command::AddPublicImage(url) => self.map_gallery(|g| g.add_public_image(&url)),
            Command::ToggleChooser => self.map_gallery(GalleryWidget::toggle_chooser),
            Command::OpenChooser => self.map_gallery(GalleryWidget::open_chooser),
            Command::CloseChooser => self.map_gallery(GalleryWidget::close_chooser),
            Command::SwitchChooserTab => self.map_gallery(GalleryWidget::switch_chooser_tab),
            Command::MoveChooserCursor(delta) => {
                self.map_gallery(|g| g.move_chooser_cursor(delta))
            }
            Command::Choose => self.map_gallery(GalleryWidget::choose),
            Command::ChooserParent => self.map_gallery(GalleryWidget::chooser_parent_dir),
        }
    }

    /// Releases every uploaded image. Returns how many handles were freed.
    pub fn dispose(self) -> usize {
        self.gallery.dispose()
    }

    fn map_gallery(self, f: impl FnOnce(GalleryWidget) -> GalleryWidget) -> Self {
        Self {
            gallery: f(self.gallery),
            ..self
        }
    }

    fn handle_delete(self, index: Option<usize>) -> Self {
        let index = index.unwrap_or_else(|| self.gallery.visible_index());
        let label = match self.gallery.images().get(index) {
            Some(image) => image.label().to_string(),
            None => return self,
        };
        self.map_gallery(|g| g.delete_image(index))
            .with_status(format!("Removed {label}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::gallery::{Direction, ImageRef};
    use folio_core::profile::{IndicatorGeometry, Tab};
    use std::fs;
    use tempfile::TempDir;

    fn test_app(dir: &Path) -> App {
        App::new(
            Config::default(),
            Keymap::default(),
            Theme::default(),
            dir.to_path_buf(),
        )
        .with_viewport(Rect::new(0, 0, 100, 30))
    }

    /// Performs the queued read inline, as the event loop does via a task.
    fn finish_upload(app: App) -> App {
        let (app, pending) = app.take_pending_upload();
        match pending {
            Some(path) => {
                let loaded = folio_core::gallery::read_upload(&path);
                app.with_upload_result(&path, loaded)
            }
            None => app,
        }
    }

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        image::RgbaImage::new(2, 2)
            .save(&path)
            .expect("failed to write png");
        path
    }

    #[test]
    fn viewport_places_indicator_under_about() {
        let tmp = TempDir::new().unwrap();
        let app = test_app(tmp.path());
        assert_eq!(app.profile().active_tab(), Tab::About);
        assert_eq!(app.profile().indicator(), IndicatorGeometry::new(0, 10));
    }

    #[test]
    fn tab_commands_move_indicator() {
        let tmp = TempDir::new().unwrap();
        let app = test_app(tmp.path()).handle_command(Command::SelectTab(Tab::Experiences));
        assert_eq!(app.profile().active_tab(), Tab::Experiences);
        assert_eq!(app.profile().indicator(), IndicatorGeometry::new(11, 13));

        let app = app.handle_command(Command::NextTab);
        assert_eq!(app.profile().active_tab(), Tab::Recommended);
        let app = app.handle_command(Command::NextTab);
        assert_eq!(app.profile().active_tab(), Tab::About);
        let app = app.handle_command(Command::PrevTab);
        assert_eq!(app.profile().active_tab(), Tab::Recommended);
    }

    #[test]
    fn narrow_viewport_keeps_last_indicator() {
        let tmp = TempDir::new().unwrap();
        let app = test_app(tmp.path())
            .handle_command(Command::SelectTab(Tab::Recommended))
            .with_viewport(Rect::new(0, 0, 40, 20));
        assert_eq!(app.profile().active_tab(), Tab::Recommended);
        assert_eq!(app.profile().indicator(), IndicatorGeometry::new(25, 13));
    }

    #[test]
    fn catalog_delivery_updates_status() {
        let tmp = TempDir::new().unwrap();
        let app = test_app(tmp.path());
        assert_eq!(app.catalog_status(), CatalogStatus::Loading);
        let app = app.with_catalog(vec!["/gallery/a.png".to_string()]);
        assert_eq!(app.catalog_status(), CatalogStatus::Loaded(1));
        assert_eq!(app.gallery().public_catalog().len(), 1);
    }

    #[test]
    fn public_add_and_delete_focused() {
        let tmp = TempDir::new().unwrap();
        let app = test_app(tmp.path())
            .with_catalog(vec!["/gallery/a.png".to_string(), "/gallery/b.png".to_string()])
            .handle_command(Command::OpenChooser)
            .handle_command(Command::AddPublicImage("/gallery/a.png".to_string()))
            .handle_command(Command::AddPublicImage("/gallery/b.png".to_string()));
        assert_eq!(app.gallery().images().len(), 2);
        assert_eq!(app.gallery().visible_index(), 1);
        assert!(!app.chooser_open());

        let app = app.handle_command(Command::DeleteFocused);
        assert_eq!(
            app.gallery().images(),
            &[ImageRef::Public("/gallery/a.png".to_string())]
        );
        assert_eq!(app.status_message(), Some("Removed a.png"));
    }

    #[test]
    fn delete_on_empty_gallery_is_noop() {
        let tmp = TempDir::new().unwrap();
        let app = test_app(tmp.path()).handle_command(Command::DeleteFocused);
        assert!(app.gallery().images().is_empty());
        assert!(app.status_message().is_none());
    }

    #[test]
    fn local_upload_through_chooser() {
        let tmp = TempDir::new().unwrap();
        write_png(tmp.path(), "photo.png");
        let app = test_app(tmp.path())
            .handle_command(Command::ToggleChooser)
            .handle_command(Command::Choose);
        assert!(app.gallery().images().is_empty());

        let (app, pending) = app.take_pending_upload();
        assert_eq!(app.status_message(), Some("Reading photo.png…"));
        let path = pending.unwrap();
        let loaded = folio_core::gallery::read_upload(&path);
        let app = app.with_upload_result(&path, loaded);
        assert!(app.status_message().is_none());
        assert_eq!(app.gallery().images().len(), 1);
        assert!(app.gallery().images()[0].is_local());
        assert_eq!(app.gallery().live_handles(), 1);

        let app = app
            .handle_command(Command::CloseChooser)
            .handle_command(Command::Navigate(Direction::Prev));
        assert_eq!(app.gallery().visible_index(), 0);
        assert_eq!(app.dispose(), 1);
    }

    #[test]
    fn add_local_image_by_path() {
        let tmp = TempDir::new().unwrap();
        let path = write_png(tmp.path(), "direct.png");
        let app = finish_upload(test_app(tmp.path()).handle_command(Command::AddLocalImage(path)));
        assert_eq!(app.gallery().images()[0].label(), "direct.png");
    }

    #[test]
    fn non_image_upload_reports_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();
        let app = test_app(tmp.path()).handle_command(Command::AddLocalImage(path));
        let (app, pending) = app.take_pending_upload();
        assert!(pending.is_none());
        assert!(app.gallery().images().is_empty());
        assert!(app.gallery().chooser().error().is_some());
    }

    #[test]
    fn failed_read_reports_error_in_chooser() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gone.png");
        let app = finish_upload(
            test_app(tmp.path())
                .handle_command(Command::OpenChooser)
                .handle_command(Command::AddLocalImage(path)),
        );
        assert!(app.gallery().images().is_empty());
        assert!(app
            .gallery()
            .chooser()
            .error()
            .unwrap()
            .starts_with("Could not load gone.png"));
    }

    #[test]
    fn load_settings_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let (config, keymap, _theme) = load_settings(tmp.path());
        assert_eq!(config.gallery.max_images, 3);
        assert!(keymap.action_for_key("q").is_some());
    }

    #[test]
    fn load_settings_reads_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("default.toml"),
            "[gallery]\nmax_images = 5\n[ui]\ntab_gap = 2\n",
        )
        .unwrap();
        let (config, _, _) = load_settings(tmp.path());
        assert_eq!(config.gallery.max_images, 5);
        assert_eq!(config.ui.tab_gap, 2);
    }
}
