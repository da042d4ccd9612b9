// File: ./src/tui/action.rs
// Maps terminal input onto controller signals and cursor moves
use crate::controller::Signal;
use crate::model::{KeyId, ModifierKey};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode, MouseButton,
    MouseEventKind,
};

const PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Signal(Signal),
    Next,
    Previous,
    JumpForward(usize),
    JumpBackward(usize),
    First,
    Last,
    Select(usize),
    /// Activate the row under the cursor.
    ToggleSelected,
    Quit,
}

fn key_id_of(code: ModifierKeyCode) -> Option<KeyId> {
    match code {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => Some(KeyId::SHIFT),
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => Some(KeyId::CONTROL),
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => Some(KeyId::ALT),
        _ => None,
    }
}

fn modifier_bit(modifier: ModifierKey) -> KeyModifiers {
    match modifier {
        ModifierKey::Shift => KeyModifiers::SHIFT,
        ModifierKey::Control => KeyModifiers::CONTROL,
        ModifierKey::Alt => KeyModifiers::ALT,
    }
}

/// Most terminals never report bare modifier presses, so the held state is
/// re-derived from the modifier bits carried by the activating key or click.
fn sync_modifier(modifiers: KeyModifiers, modifier: ModifierKey) -> Action {
    let key = modifier.key_id();
    if modifiers.contains(modifier_bit(modifier)) {
        Action::Signal(Signal::ModifierDown(key))
    } else {
        Action::Signal(Signal::ModifierUp(key))
    }
}

fn from_key(key: KeyEvent, modifier: ModifierKey) -> Vec<Action> {
    if let KeyCode::Modifier(code) = key.code {
        let Some(id) = key_id_of(code) else {
            return vec![];
        };
        return match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                vec![Action::Signal(Signal::ModifierDown(id))]
            }
            KeyEventKind::Release => vec![Action::Signal(Signal::ModifierUp(id))],
        };
    }

    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => vec![Action::Quit],
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => {
            vec![sync_modifier(key.modifiers, modifier), Action::ToggleSelected]
        }
        // Legacy terminals drop Shift on Space but always report it on letters
        KeyCode::Char('X') => vec![
            sync_modifier(key.modifiers | KeyModifiers::SHIFT, modifier),
            Action::ToggleSelected,
        ],
        KeyCode::Down | KeyCode::Char('J') => {
            vec![sync_modifier(key.modifiers, modifier), Action::Next]
        }
        KeyCode::Up | KeyCode::Char('K') => {
            vec![sync_modifier(key.modifiers, modifier), Action::Previous]
        }
        KeyCode::Char('j') => vec![Action::Next],
        KeyCode::Char('k') => vec![Action::Previous],
        KeyCode::PageDown => vec![Action::JumpForward(PAGE)],
        KeyCode::PageUp => vec![Action::JumpBackward(PAGE)],
        KeyCode::Home | KeyCode::Char('g') => vec![Action::First],
        KeyCode::End | KeyCode::Char('G') => vec![Action::Last],
        _ => vec![],
    }
}

/// Translates one terminal event. `row_at` resolves a screen cell to an item index.
pub fn from_event<F>(event: &Event, modifier: ModifierKey, row_at: F) -> Vec<Action>
where
    F: Fn(u16, u16) -> Option<usize>,
{
    match event {
        Event::Key(key) => from_key(*key, modifier),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => vec![Action::Next],
            MouseEventKind::ScrollUp => vec![Action::Previous],
            MouseEventKind::Down(MouseButton::Left) => match row_at(mouse.column, mouse.row) {
                Some(index) => vec![
                    sync_modifier(mouse.modifiers, modifier),
                    Action::Select(index),
                    Action::Signal(Signal::Activated(index)),
                ],
                None => vec![],
            },
            _ => vec![],
        },
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn no_rows(_: u16, _: u16) -> Option<usize> {
        None
    }

    #[test]
    fn test_shift_space_holds_modifier_before_toggle() {
        let ev = key(KeyCode::Char(' '), KeyModifiers::SHIFT, KeyEventKind::Press);
        assert_eq!(
            from_event(&ev, ModifierKey::Shift, no_rows),
            vec![
                Action::Signal(Signal::ModifierDown(KeyId::SHIFT)),
                Action::ToggleSelected
            ]
        );
    }

    #[test]
    fn test_plain_enter_releases_modifier() {
        let ev = key(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(
            from_event(&ev, ModifierKey::Shift, no_rows)[0],
            Action::Signal(Signal::ModifierUp(KeyId::SHIFT))
        );
    }

    #[test]
    fn test_configured_modifier_bit_is_used() {
        let ev = key(KeyCode::Char(' '), KeyModifiers::ALT, KeyEventKind::Press);
        assert_eq!(
            from_event(&ev, ModifierKey::Alt, no_rows)[0],
            Action::Signal(Signal::ModifierDown(KeyId::ALT))
        );
        assert_eq!(
            from_event(&ev, ModifierKey::Shift, no_rows)[0],
            Action::Signal(Signal::ModifierUp(KeyId::SHIFT))
        );
    }

    #[test]
    fn test_bare_modifier_press_and_release() {
        let down = key(
            KeyCode::Modifier(ModifierKeyCode::RightShift),
            KeyModifiers::SHIFT,
            KeyEventKind::Press,
        );
        let up = key(
            KeyCode::Modifier(ModifierKeyCode::LeftShift),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(
            from_event(&down, ModifierKey::Shift, no_rows),
            vec![Action::Signal(Signal::ModifierDown(KeyId::SHIFT))]
        );
        assert_eq!(
            from_event(&up, ModifierKey::Shift, no_rows),
            vec![Action::Signal(Signal::ModifierUp(KeyId::SHIFT))]
        );
    }

    #[test]
    fn test_key_release_of_other_keys_is_dropped() {
        let ev = key(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(from_event(&ev, ModifierKey::Shift, no_rows).is_empty());
    }

    #[test]
    fn test_shift_click_on_row() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 4,
            modifiers: KeyModifiers::SHIFT,
        });
        let actions = from_event(&ev, ModifierKey::Shift, |_, row| Some(row as usize - 1));
        assert_eq!(
            actions,
            vec![
                Action::Signal(Signal::ModifierDown(KeyId::SHIFT)),
                Action::Select(3),
                Action::Signal(Signal::Activated(3)),
            ]
        );
    }

    #[test]
    fn test_click_outside_list_does_nothing() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert!(from_event(&ev, ModifierKey::Shift, no_rows).is_empty());
    }

    #[test]
    fn test_quit_keys() {
        for ev in [
            key(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Press),
            key(KeyCode::Esc, KeyModifiers::NONE, KeyEventKind::Press),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press),
        ] {
            assert_eq!(from_event(&ev, ModifierKey::Shift, no_rows), vec![Action::Quit]);
        }
    }

    #[test]
    fn test_legacy_shift_x_holds_modifier() {
        // Legacy encodings report an uppercase letter with SHIFT, Space without it
        for mods in [KeyModifiers::SHIFT, KeyModifiers::NONE] {
            let ev = key(KeyCode::Char('X'), mods, KeyEventKind::Press);
            assert_eq!(
                from_event(&ev, ModifierKey::Shift, no_rows),
                vec![
                    Action::Signal(Signal::ModifierDown(KeyId::SHIFT)),
                    Action::ToggleSelected
                ]
            );
        }
        let ev = key(KeyCode::Char('x'), KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(
            from_event(&ev, ModifierKey::Shift, no_rows)[0],
            Action::Signal(Signal::ModifierUp(KeyId::SHIFT))
        );
    }

    #[test]
    fn test_ctrl_x_with_control_modifier() {
        let ev = key(KeyCode::Char('x'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(
            from_event(&ev, ModifierKey::Control, no_rows)[0],
            Action::Signal(Signal::ModifierDown(KeyId::CONTROL))
        );
    }

    #[test]
    fn test_shift_arrow_moves_sync_modifier() {
        let down = key(KeyCode::Down, KeyModifiers::SHIFT, KeyEventKind::Press);
        assert_eq!(
            from_event(&down, ModifierKey::Shift, no_rows),
            vec![Action::Signal(Signal::ModifierDown(KeyId::SHIFT)), Action::Next]
        );
        let up = key(KeyCode::Char('K'), KeyModifiers::SHIFT, KeyEventKind::Press);
        assert_eq!(
            from_event(&up, ModifierKey::Shift, no_rows),
            vec![Action::Signal(Signal::ModifierDown(KeyId::SHIFT)), Action::Previous]
        );
        let plain = key(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(
            from_event(&plain, ModifierKey::Shift, no_rows),
            vec![Action::Signal(Signal::ModifierUp(KeyId::SHIFT)), Action::Previous]
        );
    }
}
