use std::collections::HashMap;
use std::sync::Mutex;

use super::HostBridge;

/// `HostBridge` backed by plain maps: a substitution table for `resolve`
/// and a mutex-guarded variable table for `store`.
///
/// Suitable for tests and embedded hosts that have no interpolation
/// engine of their own.
#[derive(Debug, Default)]
pub struct MemoryBridge {
    substitutions: HashMap<String, String>,
    variables: Mutex<HashMap<String, String>>,
}

impl MemoryBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a `{name}` placeholder replacement applied by `resolve`.
    #[must_use]
    pub fn substitute(mut self, name: &str, value: &str) -> Self {
        self.substitutions
            .insert(format!("{{{name}}}"), value.to_string());
        self
    }

    /// Returns the value stored under `slot`, if any.
    #[must_use]
    pub fn stored(&self, slot: &str) -> Option<String> {
        self.variables.lock().unwrap().get(slot).cloned()
    }

    /// Number of variables written so far.
    #[must_use]
    pub fn stored_count(&self) -> usize {
        self.variables.lock().unwrap().len()
    }
}

impl HostBridge for MemoryBridge {
    fn resolve(&self, raw: &str) -> String {
        let mut resolved = raw.to_string();
        for (placeholder, value) in &self.substitutions {
            resolved = resolved.replace(placeholder, value);
        }
        resolved
    }

    fn store(&self, slot: &str, value: String) {
        self.variables.lock().unwrap().insert(slot.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_applies_substitutions() {
        let bridge = MemoryBridge::new()
            .substitute("user", "alice")
            .substitute("topic", "rust");

        assert_eq!(
            bridge.resolve("{user} asks about {topic}"),
            "alice asks about rust"
        );
    }

    #[test]
    fn test_resolve_leaves_unknown_placeholders() {
        let bridge = MemoryBridge::new();
        assert_eq!(bridge.resolve("{missing}"), "{missing}");
    }

    #[test]
    fn test_store_and_read_back() {
        let bridge = MemoryBridge::new();
        bridge.store("answer", "42".to_string());

        assert_eq!(bridge.stored("answer").as_deref(), Some("42"));
        assert_eq!(bridge.stored("other"), None);
        assert_eq!(bridge.stored_count(), 1);
    }
}
