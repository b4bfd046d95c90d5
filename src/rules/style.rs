//! Flat property maps.

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::Value;

/// A flat mapping from CSS property name to [`Value`].
///
/// Properties keep insertion order. Setting a property that already exists
/// replaces its value in place. Property names are not checked.
///
/// # Example
///
/// ```rust
/// use stylish::Style;
///
/// let button = Style::new()
///     .set("color", "white")
///     .set("padding", 8)
///     .set("borderRadius", 4);
///
/// assert_eq!(button.len(), 3);
/// assert_eq!(button.get("padding").and_then(|v| v.as_number()), Some(8.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    properties: IndexMap<String, Value>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated style for chaining.
    pub fn set<V: Into<Value>>(mut self, property: impl Into<String>, value: V) -> Self {
        self.properties.insert(property.into(), value.into());
        self
    }

    /// Returns the value of a property, if set.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.properties.get(property)
    }

    /// Returns true if the property is set.
    pub fn has(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates properties in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.properties.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Style {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl<'a> IntoIterator for &'a Style {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
