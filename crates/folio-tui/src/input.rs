use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::action::Action;
use folio_core::config::keymap::Keymap;
use folio_core::event::Command;
use folio_core::gallery::Direction;
use folio_core::profile::Tab;

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug, PartialEq)]
pub enum InputAction {
    /// Dispatch a core Command.
    Command(Command),
    /// Enter a new AppMode.
    EnterMode(AppMode),
    /// Quit the application.
    Quit,
    /// No action for this key.
    None,
}

/// Maps a key event to an InputAction.
///
/// While the image chooser is open it captures every key. In Normal mode,
/// character keys plus Tab/BackTab are resolved through the `Keymap`;
/// arrow keys, Delete and Ctrl+C are hardcoded.
pub fn handle_key(key: KeyEvent, mode: &AppMode, chooser_open: bool, keymap: &Keymap) -> InputAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::Quit;
    }
    match mode {
        AppMode::Help => handle_help_key(key),
        AppMode::Normal if chooser_open => handle_chooser_key(key),
        AppMode::Normal => handle_normal_key(key, keymap),
    }
}

/// Converts an `Action` enum variant to the corresponding `InputAction`.
fn action_to_input_action(action: Action) -> InputAction {
    match action {
        Action::TabAbout => InputAction::Command(Command::SelectTab(Tab::About)),
        Action::TabExperiences => InputAction::Command(Command::SelectTab(Tab::Experiences)),
        Action::TabRecommended => InputAction::Command(Command::SelectTab(Tab::Recommended)),
        Action::TabNext => InputAction::Command(Command::NextTab),
        Action::TabPrev => InputAction::Command(Command::PrevTab),
        Action::GalleryPrev => InputAction::Command(Command::Navigate(Direction::Prev)),
        Action::GalleryNext => InputAction::Command(Command::Navigate(Direction::Next)),
        Action::GalleryDelete => InputAction::Command(Command::DeleteFocused),
        Action::ChooserToggle => InputAction::Command(Command::ToggleChooser),
        Action::Help => InputAction::EnterMode(AppMode::Help),
        Action::Quit => InputAction::Quit,
    }
}

fn handle_normal_key(key: KeyEvent, keymap: &Keymap) -> InputAction {
    let key_name = match key.code {
        KeyCode::Left => return InputAction::Command(Command::Navigate(Direction::Prev)),
        KeyCode::Right => return InputAction::Command(Command::Navigate(Direction::Next)),
        KeyCode::Delete => return InputAction::Command(Command::DeleteFocused),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Char(c) => c.to_string(),
        _ => return InputAction::None,
    };
    keymap
        .action_for_key(&key_name)
        .map(action_to_input_action)
        .unwrap_or(InputAction::None)
}

fn handle_chooser_key(key: KeyEvent) -> InputAction {
    let command = match key.code {
        KeyCode::Esc | KeyCode::Char('a') => Command::CloseChooser,
        KeyCode::Tab | KeyCode::BackTab => Command::SwitchChooserTab,
        KeyCode::Down | KeyCode::Char('j') => Command::MoveChooserCursor(1),
        KeyCode::Up | KeyCode::Char('k') => Command::MoveChooserCursor(-1),
        KeyCode::Enter => Command::Choose,
        KeyCode::Backspace | KeyCode::Char('h') => Command::ChooserParent,
        _ => return InputAction::None,
    };
    InputAction::Command(command)
}

fn handle_help_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            InputAction::EnterMode(AppMode::Normal)
        }
        _ => InputAction::None,
    }
}

/// Keys the chooser overlay understands, for the help popup.
pub const CHOOSER_KEYS: &[(&str, &str)] = &[
    ("Tab", "Switch Upload / Public"),
    ("j / k", "Move selection"),
    ("Enter", "Add image or open folder"),
    ("Backspace / h", "Parent folder"),
    ("Esc / a", "Close chooser"),
];
