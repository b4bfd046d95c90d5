//! # Stylish - composable style-rule trees
//!
//! Stylish builds nested style rules as plain data, layers them with a
//! shallow merge, and mints class names that are unique for the life of a
//! registry. The result is a [`Rules`] tree meant to be handed to a
//! stylesheet renderer; this crate never produces CSS text itself.
//!
//! ## Building and layering rules
//!
//! ```rust
//! use stylish::{style, Composable, Rule, Rules, Style};
//!
//! let base = style(
//!     Rules::new()
//!         .add("body", Style::new().set("margin", 0))
//!         .add("a", Style::new().set("color", "teal")),
//! );
//!
//! let dark = base.append(Rules::new().add("a", Style::new().set("color", "cyan")));
//!
//! assert_eq!(dark.rules().len(), 2);
//! // the receiver is untouched
//! assert_eq!(
//!     base.rules().get("a"),
//!     Some(&Rule::Style(Style::new().set("color", "teal"))),
//! );
//! ```
//!
//! Merging is shallow. A selector present on both sides takes the
//! right-hand rule wholesale, nested trees included.
//!
//! ## Minting classes
//!
//! ```rust
//! use stylish::{ClassRegistry, Composable, Rules, Style, Value};
//!
//! let mut registry = ClassRegistry::new();
//! let btn = registry.class("btn").unwrap();
//!
//! // appended rules sit next to `.btn`, not inside it
//! let with_color = btn.append(Style::new().set("color", "red"));
//! assert_eq!(
//!     with_color.rules(),
//!     &Rules::new()
//!         .add(".btn", Style::new())
//!         .add("color", Value::from("red")),
//! );
//!
//! assert!(registry.class("btn").is_err());
//! ```
//!
//! [`css_class`] mints through a registry shared by the whole process.
//! Prefer an explicit [`ClassRegistry`] when separate builds or tests must
//! not see each other's names.
//!
//! ## Values
//!
//! ```rust
//! use stylish::css_values;
//!
//! assert_eq!(css_values!(0, 10, "auto"), "0 10px auto");
//! ```
//!
//! ## Logging
//!
//! Minting emits `debug` records and merges emit `trace` records through the
//! [`log`] facade. Nothing is logged on failure; errors are returned.

pub mod class;
pub mod rules;
mod ruleset;
mod values;

pub use class::{
    css_class, css_class_with, is_class_minted, ClassError, ClassName, ClassRegistry, CssClass,
};
pub use rules::{Rule, Rules, Style, Value};
pub use ruleset::{style, Composable, RuleSet};
pub use values::css_values;

/// Short names for the three entry points.
///
/// ```rust
/// use stylish::{css, Composable};
///
/// let card = css::class("facade-card").unwrap();
/// let set = css::style(card.rules().clone());
/// assert_eq!(set.rules().len(), 1);
/// assert_eq!(css::values([0, 2]), "0 2px");
/// ```
pub mod css {
    pub use crate::class::{css_class as class, css_class_with as class_with};
    pub use crate::ruleset::style;
    pub use crate::values::css_values as values;
}
