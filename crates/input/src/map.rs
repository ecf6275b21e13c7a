//! Key mapping from terminal events to game actions.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps keys to a game's own action values.
///
/// Keys without a binding are simply not found; looking them up is never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMap<A> {
    bindings: HashMap<KeyCode, A>,
}

impl<A> Default for InputMap<A> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<A: Copy> InputMap<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`InputMap::insert`].
    pub fn bind(mut self, key: KeyCode, action: A) -> Self {
        self.insert(key, action);
        self
    }

    /// Bind several keys to the same action.
    pub fn bind_all(mut self, keys: impl IntoIterator<Item = KeyCode>, action: A) -> Self {
        for key in keys {
            self.insert(key, action);
        }
        self
    }

    /// Bind `key`, replacing any previous binding. Returns the replaced action.
    pub fn insert(&mut self, key: KeyCode, action: A) -> Option<A> {
        self.bindings.insert(key, action)
    }

    pub fn get(&self, key: KeyCode) -> Option<A> {
        self.bindings.get(&key).copied()
    }

    /// Action for a key event, ignoring modifiers other than what the key
    /// code itself carries (`Char('A')` for shifted letters).
    pub fn lookup(&self, key: &KeyEvent) -> Option<A> {
        self.get(key.code)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Check if a key is the in-terminal stop request.
///
/// Raw mode swallows the interrupt signal, so `Ctrl+C` arrives as a key.
pub fn is_stop_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
