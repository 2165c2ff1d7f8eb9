use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use super::Value;

/// A schemaless record: field name to value.
///
/// Field names are chosen by the caller; nothing requires two records in the
/// same sequence to carry the same fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Sets a field, returning its previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Copies every field of `other` into `self`; fields of `other` win on collision.
    pub fn merge(&mut self, other: &Record) {
        for (name, value) in &other.fields {
            self.fields.insert(name.clone(), value.clone());
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Shorthand for building a [`Record`] from literal pairs.
///
/// ```
/// use rankshift::record;
///
/// let r = record! { "id" => 1, "name" => "Alice" };
/// assert_eq!(r.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    () => { $crate::core::Record::new() };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::core::Record::new()$(.with($name, $value))+
    };
}
