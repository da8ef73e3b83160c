use ratatui::Frame;

use crate::app::{App, AppMode};
use crate::image_preview::ImagePreviewState;
use crate::layout::page_areas;
use crate::ui::chooser::render_chooser;
use crate::ui::gallery::render_gallery;
use crate::ui::popup::render_help_popup;
use crate::ui::profile_card::render_profile_card;
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Main render function — composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App, image_state: Option<&mut ImagePreviewState>) {
    let theme = app.theme();
    let page = page_areas(f.area(), app.ui().panel_ratio);

    render_profile_card(
        f,
        page.profile,
        app.profile(),
        app.content(),
        app.tab_layout(),
        theme,
    );

    // Graphics protocols draw above the cell grid, so the overlay would be
    // hidden behind the image.
    let image_state = if app.ui().image_preview && !app.chooser_open() {
        image_state
    } else {
        None
    };
    render_gallery(f, page.gallery, app.gallery(), image_state, theme);
    render_chooser(f, page.gallery, app.gallery(), theme);

    let gallery = app.gallery();
    let props = StatusBarProps {
        active_tab: app.profile().active_tab(),
        image_count: gallery.images().len(),
        visible_index: gallery.visible_index(),
        capacity: gallery.capacity(),
        catalog: app.catalog_status(),
        status_message: app.status_message(),
    };
    render_statusbar(f, page.statusbar, &props, theme);

    if *app.mode() == AppMode::Help {
        render_help_popup(f, app.action_registry(), app.keymap(), theme);
    }
}
