// File: ./src/tui/state.rs
use crate::controller::{RangeToggleController, Signal};
use crate::model::{ModifierKey, SelectionMode};
use crate::tui::action::Action;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

pub struct AppState {
    pub controller: RangeToggleController,
    pub modifier: ModifierKey,
    pub list_state: ListState,
    /// Where the list was last drawn, for mouse hit-testing.
    pub list_area: Rect,
    pub message: String,
}

impl AppState {
    pub fn new(controller: RangeToggleController, modifier: ModifierKey) -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        Self {
            controller,
            modifier,
            list_state: l_state,
            list_area: Rect::default(),
            message: format!("Space/x: toggle | {}+x/Click: range", modifier),
        }
    }

    fn len(&self) -> usize {
        self.controller.items().len()
    }

    /// Returns false once the user asked to quit.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::JumpForward(step) => self.jump_forward(step),
            Action::JumpBackward(step) => self.jump_backward(step),
            Action::First => self.select(0),
            Action::Last => self.select(self.len().saturating_sub(1)),
            Action::Select(idx) => self.select(idx),
            Action::ToggleSelected => {
                if let Some(idx) = self.list_state.selected() {
                    self.activate(idx);
                }
            }
            Action::Signal(Signal::Activated(idx)) => self.activate(idx),
            Action::Signal(signal) => self.controller.handle(signal),
        }
        true
    }

    fn activate(&mut self, idx: usize) {
        if idx >= self.len() {
            return;
        }
        let before = self.controller.completed_count();
        self.controller.handle(Signal::Activated(idx));
        let after = self.controller.completed_count();

        let item = &self.controller.items()[idx];
        let verb = if item.completed { "Done" } else { "Reopened" };
        let changed = before.abs_diff(after);
        self.message = if changed > 1 {
            format!("{}: {} items up to '{}'", verb, changed, item.label)
        } else {
            format!("{}: {}", verb, item.label)
        };
    }

    pub fn select(&mut self, idx: usize) {
        if idx < self.len() {
            self.list_state.select(Some(idx));
        }
    }

    pub fn next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if self.len() == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = (current + step).min(self.len() - 1);
        self.list_state.select(Some(new_index));
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.len() == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = current.saturating_sub(step);
        self.list_state.select(Some(new_index));
    }

    /// Item index under a screen cell inside the bordered list, if any.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area;
        let inner_left = area.x + 1;
        let inner_top = area.y + 1;
        let inner_right = (area.x + area.width).saturating_sub(1);
        let inner_bottom = (area.y + area.height).saturating_sub(1);
        if column < inner_left || column >= inner_right || row < inner_top || row >= inner_bottom
        {
            return None;
        }
        let idx = self.list_state.offset() + (row - inner_top) as usize;
        (idx < self.len()).then_some(idx)
    }

    pub fn range_mode(&self) -> bool {
        self.controller.mode() == SelectionMode::Multiple
    }
}
