//! Folio — a profile card and image gallery for the terminal.
//!
//! This binary initialises the terminal, runs the main event loop,
//! and restores the terminal on exit or panic.

mod app;
mod background;
mod image_preview;
mod input;
mod layout;
mod render;
mod ui;

use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use folio_core::catalog::DefaultFetcher;

use crate::app::{config_dir, load_settings, App};
use crate::background::{spawn_catalog_loader, spawn_upload_reader, CatalogMessage, UploadMessage};
use crate::image_preview::ImagePreviewState;
use crate::input::{handle_key, InputAction};
use crate::render::render;

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Logs to `$TMPDIR/folio.log` so output never lands on the alternate screen.
fn init_tracing() -> anyhow::Result<()> {
    let log_path = std::env::temp_dir().join("folio.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = init_tracing() {
        eprintln!("Logging disabled: {e}");
    }

    install_panic_hook();

    let mut terminal = setup_terminal()?;

    // Picker must be created after alternate screen (raw mode) but before event loop
    let picker = match ratatui_image::picker::Picker::from_query_stdio() {
        Ok(p) => Some(p),
        Err(e) => {
            tracing::warn!("Terminal image protocol detection failed: {e}");
            None
        }
    };

    let upload_arg = std::env::args().nth(1).map(PathBuf::from);

    let result = run_app(&mut terminal, upload_arg, picker).await;

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    upload_arg: Option<PathBuf>,
    picker: Option<ratatui_image::picker::Picker>,
) -> anyhow::Result<()> {
    let (config, keymap, theme) = load_settings(&config_dir());
    let manifest = config.gallery.manifest_source();
    let upload_dir = upload_arg
        .or_else(|| config.gallery.upload_dir.clone())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    tracing::info!(%manifest, upload_dir = %upload_dir.display(), "starting folio");

    let size = terminal.size()?;
    let mut app = App::new(config, keymap, theme, upload_dir)
        .with_viewport(Rect::new(0, 0, size.width, size.height));
    let mut image_state = picker.map(ImagePreviewState::new);

    let cancel = CancellationToken::new();
    let (catalog_tx, mut catalog_rx) = mpsc::unbounded_channel::<CatalogMessage>();
    let loader = spawn_catalog_loader(
        Arc::new(DefaultFetcher::new()),
        manifest,
        catalog_tx,
        cancel.clone(),
    );
    let (upload_tx, mut upload_rx) = mpsc::unbounded_channel::<UploadMessage>();

    loop {
        // 1. Drain background catalog and upload messages
        while let Ok(msg) = catalog_rx.try_recv() {
            app = match msg {
                CatalogMessage::Loaded(urls) => app.with_catalog(urls),
            };
        }
        while let Ok(UploadMessage { path, result }) = upload_rx.try_recv() {
            app = app.with_upload_result(&path, result);
        }

        // 2. Draw
        terminal.draw(|f| render(f, &app, image_state.as_mut()))?;

        if app.should_quit() {
            break;
        }

        // 3. Input
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = handle_key(key, app.mode(), app.chooser_open(), app.keymap());
                app = apply_input(app.with_clear_status(), action, &mut image_state);
                let (next, pending) = app.take_pending_upload();
                app = next;
                if let Some(path) = pending {
                    spawn_upload_reader(path, upload_tx.clone(), cancel.clone());
                }
            }
            Event::Resize(width, height) => {
                app = app.with_viewport(Rect::new(0, 0, width, height));
            }
            _ => {}
        }
    }

    // Teardown: drop any late catalog or upload result, then release uploaded images.
    cancel.cancel();
    let _ = loader.await;
    let released = app.dispose();
    tracing::info!(released, "released uploaded images");

    Ok(())
}

fn apply_input(
    app: App,
    action: InputAction,
    image_state: &mut Option<ImagePreviewState>,
) -> App {
    match action {
        InputAction::Command(cmd) => {
            let before = app.gallery().live_handles();
            let app = app.handle_command(cmd);
            if app.gallery().live_handles() < before {
                if let Some(state) = image_state.as_mut() {
                    state.invalidate();
                }
            }
            app
        }
        InputAction::EnterMode(mode) => app.with_mode(mode),
        InputAction::Quit => app.with_quit(),
        InputAction::None => app,
    }
}
