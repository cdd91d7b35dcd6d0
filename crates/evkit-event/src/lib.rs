//! Event values for evkit.
//!
//! An event is a named, mutable value that a dispatcher carries past its
//! listeners. Listeners read and write the event's keyed payload and may set
//! its stop flag to end the dispatch early. Subscription patterns are matched
//! against event names with `*`/`?` wildcards.
//!
//! # Modules
//!
//! - [`error`] — Error types for typed access and registries
//! - [`event`] — The [`Event`] trait and the default [`BasicEvent`]
//! - [`value`] — Payload values ([`Value`], [`Data`])
//! - [`target`] — The opaque [`Target`] handle
//! - [`registry`] — The [`EventRegistry`] collaborator trait
//! - [`memory`] — In-memory [`InMemoryEventRegistry`]
//! - [`names`] — Event name validation
//! - [`config`] — [`RegistryConfig`]
//!
//! # Example
//!
//! ```
//! use evkit_event::{BasicEvent, Event};
//! use serde_json::json;
//!
//! let mut ev = BasicEvent::new("order.created", None);
//! assert!(ev.is("order.*"));
//!
//! ev.set("id", json!(42));
//! ev.add("id", json!(7));
//! assert_eq!(ev.get_as::<u64>("id").unwrap(), 42);
//!
//! ev.abort(true);
//! assert!(ev.is_completed());
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod memory;
pub mod names;
pub mod registry;
pub mod target;
pub mod value;

pub use config::RegistryConfig;
pub use error::{EventError, Result};
pub use event::{BasicEvent, Event};
pub use evkit_wildcard::{wild_match, Pattern};
pub use memory::InMemoryEventRegistry;
pub use names::{normalize_event_name, validate_event_name};
pub use registry::EventRegistry;
pub use target::Target;
pub use value::{data_from, Data, Value};
