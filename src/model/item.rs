// File: ./src/model/item.rs
use serde::Deserialize;
use std::fmt;

/// One checklist row. `index` is its position in the fixed item sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub index: usize,
    pub label: String,
    pub completed: bool,
}

impl Item {
    pub fn new(index: usize, label: impl Into<String>, completed: bool) -> Self {
        Self {
            index,
            label: label.into(),
            completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Single => write!(f, "SINGLE"),
            SelectionMode::Multiple => write!(f, "MULTI"),
        }
    }
}

/// Raw key identifier as delivered by the host (DOM-style key codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId(pub u16);

impl KeyId {
    pub const SHIFT: KeyId = KeyId(16);
    pub const CONTROL: KeyId = KeyId(17);
    pub const ALT: KeyId = KeyId(18);
}

/// The modifier that switches the checklist into range mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    #[default]
    Shift,
    Control,
    Alt,
}

impl ModifierKey {
    pub fn key_id(self) -> KeyId {
        match self {
            ModifierKey::Shift => KeyId::SHIFT,
            ModifierKey::Control => KeyId::CONTROL,
            ModifierKey::Alt => KeyId::ALT,
        }
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierKey::Shift => write!(f, "Shift"),
            ModifierKey::Control => write!(f, "Ctrl"),
            ModifierKey::Alt => write!(f, "Alt"),
        }
    }
}
