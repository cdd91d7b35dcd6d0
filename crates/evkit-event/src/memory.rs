//! In-memory event registry.
//!
//! [`InMemoryEventRegistry`] keeps event prototypes in a `HashMap` behind a
//! `RwLock`. Names are trimmed before they are used as keys, and the stored
//! event is renamed to the trimmed form.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::config::RegistryConfig;
use crate::error::{EventError, Result};
use crate::event::Event;
use crate::names::{normalize_event_name, validate_event_name};
use crate::registry::EventRegistry;

/// An in-memory implementation of [`EventRegistry`].
#[derive(Debug)]
pub struct InMemoryEventRegistry {
    events: RwLock<HashMap<String, Box<dyn Event>>>,
    config: RegistryConfig,
}

impl InMemoryEventRegistry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with an explicit configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            events: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Number of registered events.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Drop every registered event.
    pub fn clear(&self) -> Result<()> {
        let mut events = self.write()?;
        debug!(count = events.len(), "event registry cleared");
        events.clear();
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, Box<dyn Event>>>> {
        self.events
            .read()
            .map_err(|e| EventError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, Box<dyn Event>>>> {
        self.events
            .write()
            .map_err(|e| EventError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryEventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRegistry for InMemoryEventRegistry {
    fn add_event(&self, mut event: Box<dyn Event>) -> Result<()> {
        if self.config.validate_names {
            if let Err(e) = validate_event_name(event.name()) {
                warn!(name = event.name(), error = %e, "event registration rejected");
                return Err(e);
            }
        }
        let name = normalize_event_name(event.name());
        if name != event.name() {
            event.rename(&name);
        }

        let mut events = self.write()?;
        let exists = events.contains_key(&name);

        if exists && !self.config.replace_existing {
            warn!(name = %name, "duplicate event registration rejected");
            return Err(EventError::DuplicateEvent { name });
        }
        if let Some(limit) = self.config.max_events {
            if !exists && events.len() >= limit {
                warn!(name = %name, limit, "event registry full");
                return Err(EventError::CapacityExceeded { limit });
            }
        }

        debug!(name = %name, replaced = exists, "event registered");
        events.insert(name, event);
        Ok(())
    }

    fn get_event(&self, name: &str) -> Result<Option<Box<dyn Event>>> {
        let events = self.read()?;
        Ok(events.get(name.trim()).cloned())
    }

    fn has_event(&self, name: &str) -> Result<bool> {
        Ok(self.read()?.contains_key(name.trim()))
    }

    fn remove_event(&self, name: &str) -> Result<bool> {
        let removed = self.write()?.remove(name.trim()).is_some();
        if removed {
            debug!(name = name.trim(), "event removed");
        }
        Ok(removed)
    }

    fn event_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.read()?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::BasicEvent;
    use serde_json::json;

    fn boxed(name: &str) -> Box<dyn Event> {
        Box::new(BasicEvent::new(name, None))
    }

    #[test]
    fn add_and_get() {
        let registry = InMemoryEventRegistry::new();
        registry.add_event(boxed("order.created")).unwrap();

        let ev = registry.get_event("order.created").unwrap().unwrap();
        assert_eq!(ev.name(), "order.created");
        assert!(registry.has_event("order.created").unwrap());
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn get_missing_returns_none() {
        let registry = InMemoryEventRegistry::new();
        assert!(registry.get_event("nope").unwrap().is_none());
        assert!(!registry.has_event("nope").unwrap());
        assert!(registry.is_empty().unwrap());
    }

    #[test]
    fn lookups_hand_out_independent_clones() {
        let registry = InMemoryEventRegistry::new();
        let mut proto = BasicEvent::new("order.created", None);
        proto.set("source", json!("web"));
        registry.add_event(Box::new(proto)).unwrap();

        let mut first = registry.get_event("order.created").unwrap().unwrap();
        first.set("source", json!("mutated"));
        first.abort(true);

        let second = registry.get_event("order.created").unwrap().unwrap();
        assert_eq!(second.get("source"), Some(&json!("web")));
        assert!(!second.is_aborted());
    }

    #[test]
    fn names_are_trimmed() {
        let registry = InMemoryEventRegistry::new();
        registry.add_event(boxed("  app.init ")).unwrap();
        assert_eq!(registry.event_names().unwrap(), vec!["app.init".to_string()]);
        assert!(registry.has_event(" app.init").unwrap());
    }

    #[test]
    fn stored_event_carries_trimmed_name() {
        for config in [RegistryConfig::default(), RegistryConfig::permissive()] {
            let registry = InMemoryEventRegistry::with_config(config);
            registry.add_event(boxed("  app.init ")).unwrap();

            let ev = registry.get_event("app.init").unwrap().unwrap();
            assert_eq!(ev.name(), "app.init");
            assert!(ev.is("app.init"));

            let matched = registry.matching("app.*").unwrap();
            assert_eq!(matched, vec!["app.init".to_string()]);
            let ev = registry.get_event(&matched[0]).unwrap().unwrap();
            assert!(ev.is("app.*"));
        }
    }

    #[test]
    fn invalid_name_rejected_when_validating() {
        let registry = InMemoryEventRegistry::new();
        let err = registry.add_event(boxed("1bad")).unwrap_err();
        assert!(matches!(err, EventError::InvalidName { .. }));
        assert!(registry.is_empty().unwrap());
    }

    #[test]
    fn invalid_name_accepted_when_permissive() {
        let registry = InMemoryEventRegistry::with_config(RegistryConfig::permissive());
        registry.add_event(boxed("1 odd/name")).unwrap();
        assert!(registry.has_event("1 odd/name").unwrap());
    }

    #[test]
    fn replace_existing_by_default() {
        let registry = InMemoryEventRegistry::new();
        let mut first = BasicEvent::new("a.b", None);
        first.set("v", json!(1));
        let mut second = BasicEvent::new("a.b", None);
        second.set("v", json!(2));

        registry.add_event(Box::new(first)).unwrap();
        registry.add_event(Box::new(second)).unwrap();

        let ev = registry.get_event("a.b").unwrap().unwrap();
        assert_eq!(ev.get("v"), Some(&json!(2)));
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn strict_rejects_duplicates() {
        let registry = InMemoryEventRegistry::with_config(RegistryConfig::strict());
        registry.add_event(boxed("a.b")).unwrap();
        let err = registry.add_event(boxed("a.b")).unwrap_err();
        assert!(matches!(err, EventError::DuplicateEvent { ref name } if name == "a.b"));
    }

    #[test]
    fn capacity_limit_applies_to_new_names_only() {
        let config = RegistryConfig {
            max_events: Some(1),
            ..Default::default()
        };
        let registry = InMemoryEventRegistry::with_config(config);
        registry.add_event(boxed("a")).unwrap();
        registry.add_event(boxed("a")).unwrap();

        let err = registry.add_event(boxed("b")).unwrap_err();
        assert!(matches!(err, EventError::CapacityExceeded { limit: 1 }));
    }

    #[test]
    fn remove_and_clear() {
        let registry = InMemoryEventRegistry::new();
        registry.add_event(boxed("a")).unwrap();
        registry.add_event(boxed("b")).unwrap();

        assert!(registry.remove_event("a").unwrap());
        assert!(!registry.remove_event("a").unwrap());
        assert_eq!(registry.event_names().unwrap(), vec!["b".to_string()]);

        registry.clear().unwrap();
        assert!(registry.is_empty().unwrap());
    }

    #[test]
    fn matching_uses_wildcards() {
        let registry = InMemoryEventRegistry::new();
        for name in ["order.created", "order.paid", "user.login", "order"] {
            registry.add_event(boxed(name)).unwrap();
        }

        assert_eq!(
            registry.matching("order.*").unwrap(),
            vec!["order.created".to_string(), "order.paid".to_string()]
        );
        assert_eq!(registry.matching("*").unwrap().len(), 4);
        assert_eq!(registry.matching("user.?ogin").unwrap(), vec!["user.login".to_string()]);
        assert!(registry.matching("").unwrap().is_empty());
    }
}
