//! Recursive selector trees and their shallow merge.

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use log::trace;
use serde::{Deserialize, Serialize};

use super::style::Style;
use super::value::Value;

/// What a selector in a [`Rules`] tree maps to.
///
/// Deserialization picks the first shape that fits: a bare value, then a flat
/// [`Style`], then a nested [`Rules`] tree. An empty map is read as an empty
/// `Style`.
///
/// A [`Rule::Nested`] tree holding only declarations (or nothing) is the same
/// mapping as a [`Rule::Style`] and compares equal to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rule {
    /// A property placed directly in the tree, e.g. the `color` in
    /// `{".btn": {}, color: "red"}`.
    Declaration(Value),
    /// A flat declaration block.
    Style(Style),
    /// A nested tree, e.g. the body of a media query.
    Nested(Rules),
}

impl Rule {
    pub fn as_style(&self) -> Option<&Style> {
        match self {
            Rule::Style(style) => Some(style),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&Rules> {
        match self {
            Rule::Nested(rules) => Some(rules),
            _ => None,
        }
    }

    pub fn as_declaration(&self) -> Option<&Value> {
        match self {
            Rule::Declaration(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Style> for Rule {
    fn from(style: Style) -> Self {
        Rule::Style(style)
    }
}

/// Trees holding only declarations become a [`Rule::Style`], matching what
/// deserialization produces for the same map.
impl From<Rules> for Rule {
    fn from(rules: Rules) -> Self {
        match rules.into_style() {
            Ok(style) => Rule::Style(style),
            Err(rules) => Rule::Nested(rules),
        }
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Rule::Declaration(a), Rule::Declaration(b)) => a == b,
            (Rule::Style(a), Rule::Style(b)) => a == b,
            (Rule::Nested(a), Rule::Nested(b)) => a == b,
            (Rule::Style(style), Rule::Nested(rules))
            | (Rule::Nested(rules), Rule::Style(style)) => rules.matches_style(style),
            _ => false,
        }
    }
}

impl From<Value> for Rule {
    fn from(value: Value) -> Self {
        Rule::Declaration(value)
    }
}

/// A mapping from selector to [`Rule`].
///
/// Selectors keep insertion order and are never validated. Trees are
/// combined with [`Rules::merge`], which is shallow: a selector present in
/// both trees takes the right-hand rule wholesale, even when both sides are
/// nested trees.
///
/// # Example
///
/// ```rust
/// use stylish::{Rules, Style};
///
/// let base = Rules::new()
///     .add(".card", Style::new().set("padding", 16))
///     .add(
///         "@media (max-width: 600px)",
///         Rules::new().add(".card", Style::new().set("padding", 8)),
///     );
///
/// let themed = base.merge(&Rules::new().add(".card", Style::new().set("color", "navy")));
///
/// // `.card` was replaced, not extended
/// let card = themed.get(".card").and_then(|r| r.as_style()).unwrap();
/// assert!(!card.has("padding"));
/// assert!(card.has("color"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rules {
    entries: IndexMap<String, Rule>,
}

impl Rules {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a selector, returning the updated tree for chaining.
    ///
    /// The rule can be a [`Style`], a nested [`Rules`] tree, or a bare
    /// [`Value`]. An existing selector is replaced in place.
    pub fn add<R: Into<Rule>>(mut self, selector: impl Into<String>, rule: R) -> Self {
        self.insert(selector, rule);
        self
    }

    /// Inserts a selector, returning the rule it replaced.
    pub fn insert<R: Into<Rule>>(&mut self, selector: impl Into<String>, rule: R) -> Option<Rule> {
        self.entries.insert(selector.into(), rule.into())
    }

    pub fn get(&self, selector: &str) -> Option<&Rule> {
        self.entries.get(selector)
    }

    pub fn has(&self, selector: &str) -> bool {
        self.entries.contains_key(selector)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates selectors in insertion order.
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Rule> {
        self.entries.iter()
    }

    /// Returns the shallow merge of `self` and `other`.
    ///
    /// Every top-level selector of `other` overrides the same selector in
    /// `self`. An overridden selector keeps its position; selectors only in
    /// `other` are appended in `other`'s order. Neither input is modified.
    pub fn merge(&self, other: &Rules) -> Rules {
        let mut merged = self.clone();
        merged.extend_from(other);
        merged
    }

    /// Owning form of [`Rules::merge`].
    pub fn merged(mut self, other: Rules) -> Rules {
        trace!(
            "merging {} selector(s) into a tree of {}",
            other.len(),
            self.len()
        );
        self.entries.extend(other.entries);
        self
    }

    /// Converts a tree of bare declarations into a flat style, or gives the
    /// tree back if any entry is a block.
    fn into_style(self) -> Result<Style, Rules> {
        if !self.is_declarations_only() {
            return Err(self);
        }
        Ok(self
            .entries
            .into_iter()
            .filter_map(|(property, rule)| match rule {
                Rule::Declaration(value) => Some((property, value)),
                _ => None,
            })
            .collect())
    }

    fn is_declarations_only(&self) -> bool {
        self.entries
            .values()
            .all(|rule| matches!(rule, Rule::Declaration(_)))
    }

    fn matches_style(&self, style: &Style) -> bool {
        self.len() == style.len()
            && style.iter().all(|(property, value)| {
                matches!(self.get(property), Some(Rule::Declaration(v)) if v == value)
            })
    }

    fn extend_from(&mut self, other: &Rules) {
        trace!(
            "merging {} selector(s) into a tree of {}",
            other.len(),
            self.len()
        );
        for (selector, rule) in &other.entries {
            self.entries.insert(selector.clone(), rule.clone());
        }
    }
}

/// A flat style placed at the top level of a tree becomes one
/// [`Rule::Declaration`] per property.
impl From<Style> for Rules {
    fn from(style: Style) -> Self {
        style
            .into_iter()
            .map(|(property, value)| (property, Rule::Declaration(value)))
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Rule)> for Rules {
    fn from_iter<I: IntoIterator<Item = (K, Rule)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, r)| (k.into(), r)).collect(),
        }
    }
}

impl IntoIterator for Rules {
    type Item = (String, Rule);
    type IntoIter = IntoIter<String, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rules {
    type Item = (&'a String, &'a Rule);
    type IntoIter = Iter<'a, String, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
