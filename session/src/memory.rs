use std::sync::{Arc, Mutex};

use crate::TokenStore;

/// In-memory token slot for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.slot.lock().unwrap().clone()
    }

    fn write(&self, token: &str) {
        *self.slot.lock().unwrap() = Some(token.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_slot_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn test_write_then_read() {
        let store = MemoryStore::new();
        store.write("abc.def.ghi");
        assert_eq!(store.read(), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_second_write_overwrites() {
        let store = MemoryStore::new();
        store.write("first");
        store.write("second");
        assert_eq!(store.read(), Some("second".to_string()));
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.write("shared");
        assert_eq!(other.read(), Some("shared".to_string()));
    }
}
