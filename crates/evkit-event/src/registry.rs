//! The [`EventRegistry`] trait: the collaborator events attach themselves to.
//!
//! A dispatcher keeps named event prototypes in a registry and clones them
//! out when firing. Listener storage and the dispatch loop live outside this
//! crate.

use evkit_wildcard::Pattern;

use crate::error::Result;
use crate::event::Event;

/// Storage for named event prototypes.
///
/// Implementations must be thread-safe (`Send + Sync`). Lookups return
/// clones so a caller can mutate its copy freely.
pub trait EventRegistry: Send + Sync {
    /// Store `event` under its name.
    fn add_event(&self, event: Box<dyn Event>) -> Result<()>;

    /// A clone of the event registered under `name`.
    ///
    /// Returns `Ok(None)` if nothing is registered under that name.
    fn get_event(&self, name: &str) -> Result<Option<Box<dyn Event>>>;

    /// Remove the event registered under `name`.
    ///
    /// Returns `Ok(true)` if it existed.
    fn remove_event(&self, name: &str) -> Result<bool>;

    /// All registered names, sorted.
    fn event_names(&self) -> Result<Vec<String>>;

    /// Returns `true` if an event is registered under `name`.
    fn has_event(&self, name: &str) -> Result<bool> {
        Ok(self.get_event(name)?.is_some())
    }

    /// Registered names matched by the wildcard `pattern`, sorted.
    fn matching(&self, pattern: &str) -> Result<Vec<String>> {
        let pattern = Pattern::new(pattern);
        let mut names = self.event_names()?;
        names.retain(|name| pattern.matches(name));
        Ok(names)
    }
}
