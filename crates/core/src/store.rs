//! Progress persistence: one integer per module.
//!
//! The only thing a module persists is its cursor (see
//! `ModuleProgress::cursor`): written on every stage change, read once at
//! module load to resume. The store is a trait so hosts can back it with
//! whatever key-value storage they have; the in-memory implementation
//! covers tests and embedded use.

use std::collections::HashMap;

/// Key-value storage for module cursors.
pub trait ProgressStore {
    /// Persist a module's cursor, overwriting any previous value.
    fn save(&mut self, module: &str, cursor: i32);

    /// Read a module's cursor, if one was ever saved.
    fn load(&self, module: &str) -> Option<i32>;
}

/// An in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, i32>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn save(&mut self, module: &str, cursor: i32) {
        self.entries.insert(module.to_string(), cursor);
    }

    fn load(&self, module: &str) -> Option<i32> {
        self.entries.get(module).copied()
    }
}
