//! Strategy registry mapping keys to service constructors.

use std::collections::BTreeMap;

use super::error::DispatchError;

type ServiceFactory<S> = Box<dyn Fn() -> Box<S> + Send + Sync>;

/// Startup-time mapping from a strategy key to a zero-argument service
/// constructor.
///
/// Keys are a closed set, compared case-insensitively after trimming.
/// Resolution constructs a fresh service per call; nothing is cached or
/// shared between dispatches.
pub struct Registry<S: ?Sized> {
    entries: BTreeMap<String, ServiceFactory<S>>,
}

impl<S: ?Sized> Registry<S> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Associate `key` with a service constructor.
    ///
    /// Registering a duplicate key overwrites the prior mapping (last
    /// write wins).
    pub fn register<F>(&mut self, key: &str, factory: F)
    where
        F: Fn() -> Box<S> + Send + Sync + 'static,
    {
        self.entries
            .insert(Self::normalize(key), Box::new(factory));
    }

    /// Construct a new service instance for `key`.
    pub fn resolve(&self, key: &str) -> Result<Box<S>, DispatchError> {
        let normalized = Self::normalize(key);
        match self.entries.get(&normalized) {
            Some(factory) => Ok(factory()),
            None => Err(DispatchError::UnknownKey(normalized)),
        }
    }

    /// Whether `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(&Self::normalize(key))
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn normalize(key: &str) -> String {
        key.trim().to_ascii_lowercase()
    }
}

impl<S: ?Sized> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}
