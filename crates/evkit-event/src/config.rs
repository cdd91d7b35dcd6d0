use serde::{Deserialize, Serialize};

/// Configuration for an [`InMemoryEventRegistry`](crate::InMemoryEventRegistry).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Reject names that fail [`validate_event_name`](crate::validate_event_name).
    pub validate_names: bool,
    /// Re-adding a name replaces the stored event. When `false`, the second
    /// add fails with `DuplicateEvent`.
    pub replace_existing: bool,
    /// Upper bound on the number of stored events.
    pub max_events: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            validate_names: true,
            replace_existing: true,
            max_events: None,
        }
    }
}

impl RegistryConfig {
    /// Validated names, no silent replacement.
    pub fn strict() -> Self {
        Self {
            replace_existing: false,
            ..Default::default()
        }
    }

    /// Accept any name and let later adds win.
    pub fn permissive() -> Self {
        Self {
            validate_names: false,
            ..Default::default()
        }
    }
}
