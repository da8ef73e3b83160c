//! "Add image" overlay with Upload and Public tabs.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use folio_core::config::theme::{parse_color, Theme};
use folio_core::gallery::{capacity_notice, visible_window, ChooserTab, GalleryWidget};

const WIDTH: u16 = 46;
const HEIGHT: u16 = 16;

/// Overlay rectangle, pinned to the top-right corner of the gallery panel.
pub fn chooser_area(gallery: Rect) -> Rect {
    let width = WIDTH.min(gallery.width.saturating_sub(2));
    let height = HEIGHT.min(gallery.height.saturating_sub(2));
    let x = gallery.right().saturating_sub(width + 1).max(gallery.x);
    Rect::new(x, gallery.y + 1, width, height)
}

/// Renders the chooser over the gallery panel when it is open.
pub fn render_chooser(f: &mut Frame, gallery_area: Rect, gallery: &GalleryWidget, theme: &Theme) {
    let chooser = gallery.chooser();
    if !chooser.is_open() {
        return;
    }

    let area = chooser_area(gallery_area);
    if area.width < 4 || area.height < 4 {
        return;
    }
    let border_fg = parse_color(&theme.chooser.border_fg);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add image ")
        .border_style(Style::default().fg(border_fg));
    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let error_height = u16::from(chooser.error().is_some()) * 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(error_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(tab_row(chooser.tab(), theme)), chunks[0]);

    if let Some(error) = chooser.error() {
        let error_fg = parse_color(&theme.chooser.error_fg);
        f.render_widget(
            Paragraph::new(Line::styled(error, Style::default().fg(error_fg)))
                .wrap(Wrap { trim: true }),
            chunks[1],
        );
    }

    let height = usize::from(chunks[2].height);
    let lines = match chooser.tab() {
        ChooserTab::Upload => upload_lines(gallery, height, theme),
        ChooserTab::Public => public_lines(gallery, height, theme),
    };
    f.render_widget(Paragraph::new(lines), chunks[2]);

    let hint_fg = parse_color(&theme.gallery.disabled_fg);
    f.render_widget(
        Paragraph::new(Line::styled(
            "Tab switch · Enter add · Esc close",
            Style::default().fg(hint_fg),
        )),
        chunks[3],
    );
}

fn tab_row(active: ChooserTab, theme: &Theme) -> Line<'static> {
    let selected_fg = parse_color(&theme.chooser.selected_fg);
    let item_fg = parse_color(&theme.gallery.item_fg);
    let spans = [ChooserTab::Upload, ChooserTab::Public]
        .into_iter()
        .map(|tab| {
            let style = if tab == active {
                Style::default()
                    .fg(selected_fg)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(item_fg)
            };
            Span::styled(format!(" {} ", tab.label()), style)
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn row_style(selected: bool, base: Style, theme: &Theme) -> Style {
    if selected {
        base.fg(parse_color(&theme.chooser.selected_fg))
            .add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

fn upload_lines(gallery: &GalleryWidget, height: usize, theme: &Theme) -> Vec<Line<'static>> {
    let item_fg = parse_color(&theme.gallery.item_fg);
    let dir_fg = parse_color(&theme.chooser.dir_fg);
    let disabled_fg = parse_color(&theme.gallery.disabled_fg);

    if gallery.is_full() {
        return vec![Line::styled(
            capacity_notice(gallery.capacity()),
            Style::default().fg(disabled_fg),
        )];
    }
    let Some(picker) = gallery.chooser().picker() else {
        return vec![Line::styled(
            format!("Cannot browse {}", gallery.upload_dir().display()),
            Style::default().fg(disabled_fg),
        )];
    };

    let mut lines = vec![Line::styled(
        format!("{}/", picker.dir().display()),
        Style::default().fg(disabled_fg),
    )];
    let entries = picker.entries();
    if entries.is_empty() {
        lines.push(Line::styled(
            "No images in this folder.",
            Style::default().fg(disabled_fg),
        ));
        return lines;
    }

    let (start, end) = visible_window(
        picker.selected_index(),
        entries.len(),
        height.saturating_sub(1).max(1),
    );
    lines.extend(entries[start..end].iter().enumerate().map(|(i, entry)| {
        let selected = start + i == picker.selected_index();
        let (name, base) = if entry.is_dir() {
            (format!("{}/", entry.name()), Style::default().fg(dir_fg))
        } else {
            (entry.name().to_string(), Style::default().fg(item_fg))
        };
        Line::styled(format!(" {name}"), row_style(selected, base, theme))
    }));
    lines
}

fn public_lines(gallery: &GalleryWidget, height: usize, theme: &Theme) -> Vec<Line<'static>> {
    let item_fg = parse_color(&theme.gallery.item_fg);
    let disabled_fg = parse_color(&theme.gallery.disabled_fg);

    let catalog = gallery.public_catalog();
    if catalog.is_empty() {
        return vec![Line::styled(
            "No public images found.",
            Style::default().fg(disabled_fg),
        )];
    }

    let cursor = gallery.chooser().public_cursor();
    let (start, end) = visible_window(cursor, catalog.len(), height.max(1));
    let base = if gallery.is_full() {
        Style::default().fg(disabled_fg)
    } else {
        Style::default().fg(item_fg)
    };
    catalog[start..end]
        .iter()
        .enumerate()
        .map(|(i, url)| {
            Line::styled(format!(" {url}"), row_style(start + i == cursor, base, theme))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn public_rows_scroll_with_cursor() {
        let catalog: Vec<String> = (0..6).map(|i| format!("/g/{i}.png")).collect();
        let gallery = GalleryWidget::new(3, "/")
            .load_public_catalog(catalog)
            .open_chooser()
            .switch_chooser_tab()
            .move_chooser_cursor(5);
        let lines = public_lines(&gallery, 3, &Theme::default());
        let texts: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(texts, vec![" /g/3.png", " /g/4.png", " /g/5.png"]);
    }

    #[test]
    fn area_hugs_top_right_of_gallery() {
        let area = chooser_area(Rect::new(50, 0, 50, 29));
        assert_eq!(area, Rect::new(53, 1, 46, 16));
        let narrow = chooser_area(Rect::new(0, 0, 20, 10));
        assert_eq!(narrow.width, 18);
        assert_eq!(narrow.height, 8);
        assert_eq!(narrow.x, 1);
    }

    #[test]
    fn empty_catalog_message() {
        let gallery = GalleryWidget::new(3, "/");
        let lines = public_lines(&gallery, 10, &Theme::default());
        assert_eq!(text(&lines[0]), "No public images found.");
    }

    #[test]
    fn public_rows_list_catalog() {
        let gallery = GalleryWidget::new(3, "/")
            .load_public_catalog(vec!["/g/a.png".to_string(), "/g/b.png".to_string()]);
        let lines = public_lines(&gallery, 10, &Theme::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[1]), " /g/b.png");
        assert!(lines[0].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn full_gallery_disables_upload() {
        let gallery = GalleryWidget::new(1, "/").add_public_image("/g/a.png");
        let lines = upload_lines(&gallery, 10, &Theme::default());
        assert_eq!(text(&lines[0]), "You can only add up to 1 images.");
    }

    #[test]
    fn upload_rows_mark_folders() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("album")).unwrap();
        fs::write(tmp.path().join("a.png"), b"x").unwrap();
        let gallery = GalleryWidget::new(3, tmp.path()).open_chooser();
        let lines = upload_lines(&gallery, 10, &Theme::default());
        assert_eq!(text(&lines[1]), " album/");
        assert_eq!(text(&lines[2]), " a.png");
    }
}
