use std::fmt;

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use evkit_wildcard::wild_match;

use crate::error::Result;
use crate::registry::EventRegistry;
use crate::target::Target;
use crate::value::{decode_value, Data, Value};

// ---------------------------------------------------------------------------
// Event trait
// ---------------------------------------------------------------------------

/// The contract every event must satisfy to travel through a dispatcher.
///
/// A dispatcher uses [`Event::is`] to pick the listeners whose subscription
/// pattern matches, lets listeners read and write the payload, and polls
/// [`Event::is_aborted`] between listener calls to decide whether to stop.
///
/// Every method is total. Events carry no synchronization of their own; a
/// caller sharing one instance between workers must serialize access.
///
/// The trait is object-safe so registries can hold `Box<dyn Event>`.
pub trait Event: Send + Sync + fmt::Debug {
    /// The event's name.
    fn name(&self) -> &str;

    /// Replace the event's name.
    fn rename(&mut self, name: &str);

    /// Returns `true` if the name is matched in full by the wildcard
    /// `pattern` (`*` for any run, `?` for one character).
    fn is(&self, pattern: &str) -> bool {
        wild_match(pattern, self.name())
    }

    /// The value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: Value);

    /// Store `value` under `key` only if the key is not present yet.
    fn add(&mut self, key: &str, value: Value);

    /// The whole payload mapping.
    fn data(&self) -> &Data;

    /// Mutable access to the payload mapping. Changes are seen by the event.
    fn data_mut(&mut self) -> &mut Data;

    /// Replace the whole payload. `None` keeps the current payload.
    fn set_data(&mut self, data: Option<Data>);

    /// Set the stop flag. Shares its storage with [`Event::complete`].
    fn abort(&mut self, flag: bool);

    /// Current stop flag.
    fn is_aborted(&self) -> bool;

    /// Set the stop flag. Shares its storage with [`Event::abort`].
    fn complete(&mut self, flag: bool);

    /// Current stop flag; always equal to [`Event::is_aborted`].
    fn is_completed(&self) -> bool;

    /// Clone this event behind a fresh box.
    fn clone_event(&self) -> Box<dyn Event>;
}

impl Clone for Box<dyn Event> {
    fn clone(&self) -> Self {
        self.clone_event()
    }
}

// ---------------------------------------------------------------------------
// BasicEvent
// ---------------------------------------------------------------------------

/// The default [`Event`] implementation.
///
/// Holds a name, a keyed payload, an optional [`Target`] and a single stop
/// flag. Abort and completion are two views of that one flag: setting
/// either is visible through both getters, and the later call wins.
#[derive(Clone, Debug, Default)]
pub struct BasicEvent {
    name: String,
    data: Data,
    target: Option<Target>,
    halted: bool,
}

impl BasicEvent {
    /// Create an event. A `None` payload becomes an empty mapping.
    pub fn new(name: impl Into<String>, data: Option<Data>) -> Self {
        Self {
            name: name.into(),
            data: data.unwrap_or_default(),
            target: None,
            halted: false,
        }
    }

    /// Rehydrate a reused event: the target is always replaced, the payload
    /// only when `data` is `Some`.
    pub fn fill(&mut self, target: Option<Target>, data: Option<Data>) -> &mut Self {
        if let Some(data) = data {
            trace!(name = %self.name, keys = data.len(), "event payload replaced on fill");
            self.data = data;
        }
        self.target = target;
        self
    }

    /// Rename the event.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Replace the target.
    pub fn set_target(&mut self, target: Option<Target>) -> &mut Self {
        self.target = target;
        self
    }

    /// The current target, if any.
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// Register a copy of this event with `registry`.
    ///
    /// Registries keep events as prototypes and hand out clones, so later
    /// changes to `self` are not seen by the registry.
    pub fn attach_to<R>(&self, registry: &R) -> Result<()>
    where
        R: EventRegistry + ?Sized,
    {
        debug!(name = %self.name, "attaching event to registry");
        registry.add_event(Box::new(self.clone()))
    }

    /// Read the value under `key` as `T`.
    ///
    /// Fails with `MissingKey` if absent and `TypeMismatch` if the stored
    /// value has a different shape.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        decode_value(key, self.data.get(key))
    }

    /// Read the value under `key` as `T`, falling back to `default` when the
    /// key is absent or holds something else.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get_as(key).unwrap_or(default)
    }
}

impl Event for BasicEvent {
    fn name(&self) -> &str {
        &self.name
    }

    fn rename(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        // An empty HashMap has no backing allocation until this first insert.
        self.data.insert(key.to_string(), value);
    }

    fn add(&mut self, key: &str, value: Value) {
        if !self.data.contains_key(key) {
            self.data.insert(key.to_string(), value);
        }
    }

    fn data(&self) -> &Data {
        &self.data
    }

    fn data_mut(&mut self) -> &mut Data {
        &mut self.data
    }

    fn set_data(&mut self, data: Option<Data>) {
        if let Some(data) = data {
            trace!(name = %self.name, keys = data.len(), "event payload replaced");
            self.data = data;
        }
    }

    fn abort(&mut self, flag: bool) {
        trace!(name = %self.name, flag, "event abort flag set");
        self.halted = flag;
    }

    fn is_aborted(&self) -> bool {
        self.halted
    }

    fn complete(&mut self, flag: bool) {
        trace!(name = %self.name, flag, "event complete flag set");
        self.halted = flag;
    }

    fn is_completed(&self) -> bool {
        self.halted
    }

    fn clone_event(&self) -> Box<dyn Event> {
        Box::new(self.clone())
    }
}
