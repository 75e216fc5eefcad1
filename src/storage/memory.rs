//! In-memory key-value gateway.
//!
//! Backs ephemeral sessions and tests; contents live for the lifetime of
//! the gateway value.

use super::{StorageGateway, StorageResult};
use std::collections::HashMap;

/// HashMap-backed gateway with no durability beyond the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorageGateway {
    entries: HashMap<String, String>,
}

impl MemoryStorageGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageGateway for MemoryStorageGateway {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStorageGateway, StorageGateway};

    #[test]
    fn get_of_absent_key_is_none() {
        let gateway = MemoryStorageGateway::new();
        assert_eq!(gateway.get("TASKS").unwrap(), None);
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut gateway = MemoryStorageGateway::new();
        gateway.set("TASKS", "[]").unwrap();
        gateway.set("TASKS", "[1]").unwrap();
        assert_eq!(gateway.get("TASKS").unwrap().as_deref(), Some("[1]"));
    }
}
