//! The object returned by class minting.

use crate::rules::{Rule, Rules};
use crate::ruleset::Composable;

/// A class minted by a [`ClassRegistry`](super::ClassRegistry).
///
/// Holds the class name and a one-entry tree mapping `.name` to the styles
/// it was minted with.
///
/// [`append`](Composable::append) merges at the top level of that tree, next
/// to the `.name` entry rather than inside it. This is what allows media
/// queries or unrelated selectors to sit alongside the class:
///
/// ```rust
/// use stylish::{ClassRegistry, Composable, Rules, Style};
///
/// let mut registry = ClassRegistry::new();
/// let card = registry
///     .class_with("card", Style::new().set("padding", 16))
///     .unwrap();
///
/// let responsive = card.append(Rules::new().add(
///     "@media (max-width: 600px)",
///     Rules::new().add(".card", Style::new().set("padding", 8)),
/// ));
///
/// assert_eq!(
///     responsive.rules().selectors().collect::<Vec<_>>(),
///     vec![".card", "@media (max-width: 600px)"],
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CssClass {
    class_name: String,
    rules: Rules,
}

impl CssClass {
    pub(crate) fn new(class_name: String, styles: Rule) -> Self {
        let rules = Rules::new().add(format!(".{}", class_name), styles);
        Self { class_name, rules }
    }

    /// The class name as given, without the leading `.`.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The class selector, e.g. `.btn`.
    pub fn selector(&self) -> String {
        format!(".{}", self.class_name)
    }

    /// The styles stored under the class selector.
    pub fn styles(&self) -> Option<&Rule> {
        self.rules.get(&self.selector())
    }
}

impl Composable for CssClass {
    fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl std::fmt::Display for CssClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.class_name)
    }
}
