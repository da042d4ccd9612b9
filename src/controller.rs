// File: ./src/controller.rs
// Single/range completion logic for one checklist
use crate::model::{Item, KeyId, SelectionMode};
use std::ops::RangeInclusive;

/// Notifications the host delivers to the controller, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    ModifierDown(KeyId),
    ModifierUp(KeyId),
    /// The item at this index had its checkbox flipped by the host.
    Activated(usize),
}

/// Owns a fixed item sequence and the current selection mode.
///
/// While the modifier key is held, activating an item extends the completed (or uncompleted)
/// block from the nearest existing anchor to that item.
#[derive(Debug, Clone)]
pub struct RangeToggleController {
    items: Vec<Item>,
    mode: SelectionMode,
    modifier: KeyId,
}

impl RangeToggleController {
    pub fn new(items: Vec<Item>, modifier: KeyId) -> Self {
        // Positions are the source of truth for `index`
        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Item { index, ..item })
            .collect();
        Self {
            items,
            mode: SelectionMode::Single,
            modifier,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn modifier(&self) -> KeyId {
        self.modifier
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    pub fn completed_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .filter(|i| i.completed)
            .map(|i| i.index)
            .collect()
    }

    pub fn handle(&mut self, signal: Signal) {
        match signal {
            Signal::ModifierDown(key) => self.on_modifier_key_down(key),
            Signal::ModifierUp(key) => self.on_modifier_key_up(key),
            Signal::Activated(index) => self.on_item_activated(index),
        }
    }

    pub fn on_modifier_key_down(&mut self, key: KeyId) {
        if key == self.modifier && self.mode != SelectionMode::Multiple {
            log::debug!("Modifier {:?} down, range mode on", key);
            self.mode = SelectionMode::Multiple;
        }
    }

    pub fn on_modifier_key_up(&mut self, key: KeyId) {
        if key == self.modifier {
            if self.mode == SelectionMode::Multiple {
                log::debug!("Modifier {:?} up, range mode off", key);
            }
            self.mode = SelectionMode::Single;
        }
    }

    pub fn on_item_activated(&mut self, index: usize) {
        let Some(item) = self.items.get_mut(index) else {
            log::warn!(
                "Ignoring activation of item {} (only {} items)",
                index,
                self.items.len()
            );
            return;
        };
        item.completed = !item.completed;
        let completed = item.completed;

        if self.mode == SelectionMode::Multiple {
            if completed {
                self.complete_range(index);
            } else {
                self.uncomplete_range(index);
            }
        }
    }

    /// Completes the gap between the already-completed items and `target`.
    pub fn complete_range(&mut self, target: usize) {
        self.fill_towards(target, true);
    }

    /// Clears the gap between the already-uncompleted items and `target`.
    pub fn uncomplete_range(&mut self, target: usize) {
        self.fill_towards(target, false);
    }

    fn fill_towards(&mut self, target: usize, state: bool) {
        if target >= self.items.len() {
            return;
        }
        let Some(span) = self.fill_span(target, state) else {
            return;
        };
        log::debug!(
            "Range fill {:?} -> {}",
            span,
            if state { "completed" } else { "uncompleted" }
        );
        for item in &mut self.items[span] {
            item.completed = state;
        }
    }

    /// The indices that must change to join `target` to the anchor block, if any.
    fn fill_span(&self, target: usize, state: bool) -> Option<RangeInclusive<usize>> {
        let (min, max) = self
            .items
            .iter()
            .filter(|i| i.index != target && i.completed == state)
            .map(|i| i.index)
            .fold(None, |acc, idx| match acc {
                None => Some((idx, idx)),
                Some((lo, hi)) => Some((lo.min(idx), hi.max(idx))),
            })?;

        if target < min {
            Some(target..=min - 1)
        } else if target > max {
            Some(max + 1..=target)
        } else {
            None
        }
    }
}
