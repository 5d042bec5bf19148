use serde::Serialize;

/// Capture semantics of a single configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Plain text input; host placeholders are allowed and resolved at run time.
    Text,
    /// Credential input; hosts should mask the captured value.
    Secret,
    /// Selector for an automation-scoped storage destination.
    Storage,
}

/// One named field an action asks the host to collect before invoking it.
#[derive(Debug, Clone, Serialize)]
pub struct ActionField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

/// Declarative description of an action: a display name plus the ordered
/// list of fields the host renders and captures.
#[derive(Debug, Clone, Serialize)]
pub struct ActionDefinition {
    pub name: &'static str,
    pub fields: &'static [ActionField],
}

impl ActionDefinition {
    /// Looks up a field descriptor by its capture key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&ActionField> {
        self.fields.iter().find(|f| f.key == key)
    }
}
