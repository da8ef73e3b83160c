//! Gallery widget: header controls, thumbnail strip and focused image.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use folio_core::config::theme::{parse_color, Theme};
use folio_core::gallery::{empty_call_to_action, GalleryWidget, ImageRef};

use crate::image_preview::ImagePreviewState;

const ITEM_WIDTH: u16 = 16;
const ITEM_GAP: u16 = 1;

/// Renders the gallery panel into `area`.
///
/// Uploaded images are drawn with the terminal graphics protocol when
/// `image_state` is available; everything else falls back to a text card.
pub fn render_gallery(
    f: &mut Frame,
    area: Rect,
    gallery: &GalleryWidget,
    image_state: Option<&mut ImagePreviewState>,
    theme: &Theme,
) {
    let border_fg = parse_color(&theme.gallery.border_fg);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Gallery ")
        .title_top(header_controls(gallery, theme).right_aligned())
        .border_style(Style::default().fg(border_fg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if gallery.images().is_empty() {
        render_empty(f, inner, gallery.capacity(), theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    render_strip(f, chunks[0], gallery, theme);
    render_focused(f, chunks[1], gallery, image_state, theme);
    f.render_widget(Paragraph::new(caption_line(gallery, theme)), chunks[2]);
}

/// `[a] Add Image  ◀ ▶` with disabled controls dimmed.
fn header_controls(gallery: &GalleryWidget, theme: &Theme) -> Line<'static> {
    let item_fg = parse_color(&theme.gallery.item_fg);
    let disabled_fg = parse_color(&theme.gallery.disabled_fg);
    let style_for = |enabled: bool| {
        if enabled {
            Style::default().fg(item_fg)
        } else {
            Style::default().fg(disabled_fg)
        }
    };

    let carousel = gallery.carousel();
    Line::from(vec![
        Span::styled(" [a] Add Image ", style_for(true)),
        Span::styled("◀", style_for(carousel.can_prev())),
        Span::raw(" "),
        Span::styled("▶ ", style_for(carousel.can_next())),
    ])
}

fn render_empty(f: &mut Frame, area: Rect, capacity: usize, theme: &Theme) {
    let cta_fg = parse_color(&theme.gallery.cta_fg);
    let disabled_fg = parse_color(&theme.gallery.disabled_fg);
    let top = area.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..top).map(|_| Line::from("")).collect();
    lines.push(Line::styled(
        empty_call_to_action(capacity),
        Style::default().fg(cta_fg),
    ));
    lines.push(Line::styled(
        "Press a to add an image",
        Style::default().fg(disabled_fg),
    ));
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// How many thumbnails fit side by side in `width` cells.
pub(crate) fn strip_capacity(width: u16) -> usize {
    usize::from((width + ITEM_GAP) / (ITEM_WIDTH + ITEM_GAP)).max(1)
}

fn render_strip(f: &mut Frame, area: Rect, gallery: &GalleryWidget, theme: &Theme) {
    let item_fg = parse_color(&theme.gallery.item_fg);
    let focused_fg = parse_color(&theme.gallery.focused_fg);

    let carousel = gallery.carousel();
    let (start, end) = carousel.scroll_window(strip_capacity(area.width));
    let images = carousel.images();

    for (slot, index) in (start..end).enumerate() {
        let x = area.x + slot as u16 * (ITEM_WIDTH + ITEM_GAP);
        let width = ITEM_WIDTH.min(area.right().saturating_sub(x));
        if width < 3 {
            break;
        }
        let rect = Rect::new(x, area.y, width, area.height);
        let focused = index == carousel.visible_index();
        let style = if focused {
            Style::default().fg(focused_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(item_fg)
        };
        let label = truncate(
            &format!("{} {}", index + 1, images[index].label()),
            usize::from(width.saturating_sub(2)),
        );
        let item = Paragraph::new(Line::styled(label, style)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style),
        );
        f.render_widget(item, rect);
    }
}

fn render_focused(
    f: &mut Frame,
    area: Rect,
    gallery: &GalleryWidget,
    image_state: Option<&mut ImagePreviewState>,
    theme: &Theme,
) {
    let Some(image) = gallery.carousel().focused() else {
        return;
    };

    if let (ImageRef::Local { url, .. }, Some(state)) = (image, image_state) {
        if let Some(blob) = gallery.blob(image) {
            if let Some(protocol) = state.get_or_encode(url, blob.bytes(), area.width, area.height)
            {
                let widget = ratatui_image::StatefulImage::default();
                f.render_stateful_widget(widget, area, protocol);
                return;
            }
        }
    }

    f.render_widget(
        Paragraph::new(image_card_lines(gallery, image, theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Text stand-in for an image the terminal cannot draw.
fn image_card_lines<'a>(gallery: &GalleryWidget, image: &'a ImageRef, theme: &Theme) -> Vec<Line<'a>> {
    let item_fg = parse_color(&theme.gallery.item_fg);
    let disabled_fg = parse_color(&theme.gallery.disabled_fg);
    let dim = Style::default().fg(disabled_fg);
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            image.label(),
            Style::default().fg(item_fg).add_modifier(Modifier::BOLD),
        ),
    ];
    match gallery.blob(image) {
        Some(blob) => {
            lines.push(Line::styled(
                format!("{} · {} bytes", image.src(), blob.len()),
                dim,
            ));
            lines.push(Line::styled(blob.path().display().to_string(), dim));
        }
        None => lines.push(Line::styled(image.src(), dim)),
    }
    lines
}

fn caption_line(gallery: &GalleryWidget, theme: &Theme) -> Line<'static> {
    let item_fg = parse_color(&theme.gallery.item_fg);
    let disabled_fg = parse_color(&theme.gallery.disabled_fg);
    let carousel = gallery.carousel();
    Line::from(vec![
        Span::styled(
            format!(" {} / {}", carousel.visible_index() + 1, carousel.len()),
            Style::default().fg(item_fg),
        ),
        Span::styled(
            format!("  ({} of {} slots used)", carousel.len(), gallery.capacity()),
            Style::default().fg(disabled_fg),
        ),
    ])
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('…');
    out
}
