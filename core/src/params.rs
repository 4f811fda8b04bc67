//! Named request parameters.
//!
//! `Params` is an order-insensitive name → value mapping built fresh for
//! every call. Values are stored as text because the wire format is a
//! form-urlencoded body; `set` accepts anything `ToString` so numeric IDs
//! read naturally at call sites.

use std::collections::BTreeMap;

/// Named parameters for one API call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert. A later `set` of the same name replaces the
    /// earlier value.
    pub fn set(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    /// Fold `other` into `self`. On duplicate names the entry from `other`
    /// wins; this is the one merge precedence the client supports.
    pub fn merge(mut self, other: Params) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(entries: [(K, V); N]) -> Self {
        entries
            .into_iter()
            .fold(Params::new(), |params, (k, v)| params.set(k, v))
    }
}
