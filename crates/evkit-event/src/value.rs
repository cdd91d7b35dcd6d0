//! Payload values carried by events.
//!
//! Payload entries are heterogeneous, so each value is a [`serde_json::Value`]
//! and the mapping is keyed by string. Typed reads go through
//! [`decode_value`], which deserializes into any `T: DeserializeOwned`.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::error::{EventError, Result};

pub use serde_json::Value;

/// The keyed payload of an event. Key order carries no meaning.
pub type Data = HashMap<String, Value>;

/// Build a [`Data`] mapping from key/value pairs.
///
/// ```
/// use evkit_event::value::data_from;
///
/// let data = data_from([("id", 7.into()), ("sku", "A-1".into())]);
/// assert_eq!(data.len(), 2);
/// ```
pub fn data_from<K, I>(pairs: I) -> Data
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Deserialize the value stored under `key` into `T`.
///
/// `None` means the key was absent.
pub fn decode_value<T: DeserializeOwned>(key: &str, value: Option<&Value>) -> Result<T> {
    let value = value.ok_or_else(|| EventError::MissingKey {
        key: key.to_string(),
    })?;
    serde_json::from_value(value.clone()).map_err(|e| EventError::TypeMismatch {
        key: key.to_string(),
        expected: std::any::type_name::<T>(),
        reason: e.to_string(),
    })
}
