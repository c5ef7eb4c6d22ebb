//! Path parameter buffer with reusable storage
//!
//! [`Params`] is owned by the caller, not by the router. A server keeps one
//! per worker slot (or per pooled request context), clears it before every
//! lookup and passes it to [`Router::find`](crate::Router::find) by mutable
//! reference.
//!
//! Clearing only resets the logical length. Each slot keeps its key handle
//! and the capacity of its value `String`, so once a buffer has seen a
//! request with `n` parameters, later requests with at most `n` parameters
//! do not touch the heap.

use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Number of parameters stored inline before spilling to the heap.
/// Most routes have 1-4 parameters.
pub const STACK_PARAMS_CAPACITY: usize = 4;

/// A single URL parameter, consisting of a key and a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    key: Arc<str>,
    value: String,
}

impl Param {
    /// The parameter name as written in the pattern, without `:` or `*`.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The captured path text.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Ordered path parameters, first URL parameter first.
#[derive(Clone, Default)]
pub struct Params {
    slots: SmallVec<[Param; STACK_PARAMS_CAPACITY]>,
    len: usize,
}

impl Params {
    /// Create a new empty buffer.
    #[inline]
    pub fn new() -> Self {
        Self {
            slots: SmallVec::new(),
            len: 0,
        }
    }

    /// Create a buffer with room for `capacity` parameters.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SmallVec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Append a captured parameter, reusing a previously used slot when one
    /// is available.
    pub(crate) fn push(&mut self, key: &Arc<str>, value: &str) {
        match self.slots.get_mut(self.len) {
            Some(slot) => {
                if !Arc::ptr_eq(&slot.key, key) {
                    slot.key = Arc::clone(key);
                }
                slot.value.clear();
                slot.value.push_str(value);
            }
            None => self.slots.push(Param {
                key: Arc::clone(key),
                value: value.to_owned(),
            }),
        }
        self.len += 1;
    }

    /// Shorten the buffer to `len` parameters, keeping slot storage.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /// Reset the buffer for the next request.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Get the value of the first parameter named `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Like [`get`](Self::get), returning an empty string when absent.
    #[inline]
    pub fn by_name(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Check if a key exists.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.iter().any(|(k, _)| k == key)
    }

    /// Check if the buffer holds no parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of parameters the buffer can hold without allocating a slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The live parameters as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Param] {
        &self.slots[..self.len]
    }

    /// Iterate over key-value pairs in URL order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.as_slice().iter().map(|p| (p.key(), p.value()))
    }

    /// Copy the parameters into a `HashMap`.
    pub fn to_hashmap(&self) -> HashMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Params {}

impl<'a> FromIterator<(&'a str, &'a str)> for Params {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.push(&Arc::from(k), v);
        }
        params
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = &'a Param;
    type IntoIter = std::slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
