//! Composable rule sets.

use crate::rules::Rules;

/// Something that owns a rule tree and can layer more rules on top of it.
///
/// [`append`](Composable::append) never modifies the receiver. It returns a
/// fresh [`RuleSet`] holding the shallow merge, so calls chain:
///
/// ```rust
/// use stylish::{style, Composable, Rules, Style};
///
/// let layered = style(Rules::new().add(".a", Style::new().set("margin", 0)))
///     .append(Rules::new().add(".b", Style::new().set("margin", 4)))
///     .append(Rules::new().add(".a", Style::new().set("margin", 8)));
///
/// assert_eq!(layered.rules().selectors().collect::<Vec<_>>(), vec![".a", ".b"]);
/// ```
pub trait Composable {
    /// The current rule tree.
    fn rules(&self) -> &Rules;

    /// Merges `new_rules` over the current tree and wraps the result.
    ///
    /// Top-level selectors in `new_rules` win on conflict.
    fn append(&self, new_rules: impl Into<Rules>) -> RuleSet {
        style(self.rules().merge(&new_rules.into()))
    }
}

/// A rule tree paired with [`Composable::append`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Rules,
}

impl RuleSet {
    /// Consumes the set, returning its tree.
    pub fn into_rules(self) -> Rules {
        self.rules
    }
}

impl Composable for RuleSet {
    fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl From<Rules> for RuleSet {
    fn from(rules: Rules) -> Self {
        style(rules)
    }
}

impl From<RuleSet> for Rules {
    fn from(set: RuleSet) -> Self {
        set.rules
    }
}

/// Wraps a rule tree in a [`RuleSet`].
///
/// The tree is taken as-is; no selector or property is checked.
pub fn style(rules: Rules) -> RuleSet {
    RuleSet { rules }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Rule, Style};

    fn margin(n: i32) -> Style {
        Style::new().set("margin", n)
    }

    #[test]
    fn test_style_exposes_tree() {
        let tree = Rules::new().add(".a", margin(1));
        let set = style(tree.clone());
        assert_eq!(set.rules(), &tree);
    }

    #[test]
    fn test_append_is_shallow_merge() {
        let a = Rules::new().add(".a", margin(1)).add(".x", margin(1));
        let b = Rules::new().add(".x", margin(2));

        let set = style(a.clone()).append(b.clone());
        assert_eq!(set.rules(), &a.merge(&b));
        assert_eq!(set.rules().get(".x"), Some(&Rule::Style(margin(2))));
    }

    #[test]
    fn test_append_leaves_receiver_unchanged() {
        let original = style(Rules::new().add(".a", margin(1)));
        let _ = original.append(Rules::new().add(".a", margin(9)));
        assert_eq!(original.rules().get(".a"), Some(&Rule::Style(margin(1))));
    }

    #[test]
    fn test_append_chains_left_to_right() {
        let a = Rules::new().add(".k", margin(1));
        let b = Rules::new().add(".k", margin(2)).add(".b", margin(2));
        let c = Rules::new().add(".k", margin(3));

        let set = style(a.clone()).append(b.clone()).append(c.clone());
        assert_eq!(set.rules(), &a.merge(&b).merge(&c));
        assert_eq!(set.rules().get(".k"), Some(&Rule::Style(margin(3))));
    }

    #[test]
    fn test_append_accepts_style() {
        let set = style(Rules::new()).append(Style::new().set("color", "red"));
        assert!(matches!(set.rules().get("color"), Some(Rule::Declaration(_))));
    }

    #[test]
    fn test_into_rules_round_trip() {
        let tree = Rules::new().add(".a", margin(1));
        assert_eq!(RuleSet::from(tree.clone()).into_rules(), tree);
    }
}
