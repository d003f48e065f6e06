//! The in-memory store holding all four panel collections.

use crate::model::{Brand, MessageRequest, PanelConfigEntry, Representative};
use crate::repository::MemoryCollection;

/// One collection per logical record type. Shared across handlers behind
/// an `Arc`; interior locking lives in each collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub brands: MemoryCollection<Brand>,
    pub representatives: MemoryCollection<Representative>,
    pub requests: MemoryCollection<MessageRequest>,
    pub config_entries: MemoryCollection<PanelConfigEntry>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
