use std::collections::HashMap;
use std::sync::Mutex;

/// Durable client-side key-value string store, namespaced per view kind
/// (browser local storage in the web client).
///
/// The machine serializes state to JSON itself, so a store implementation
/// only moves opaque strings; malformed entries are the machine's problem
/// and are discarded on restore.
pub trait ViewStateStore {
    fn load(&self, namespace: &str) -> Option<String>;
    fn save(&self, namespace: &str, value: &str);
}

/// In-memory store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryViewStateStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryViewStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewStateStore for MemoryViewStateStore {
    fn load(&self, namespace: &str) -> Option<String> {
        self.entries.lock().unwrap().get(namespace).cloned()
    }

    fn save(&self, namespace: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(namespace.to_string(), value.to_string());
    }
}
