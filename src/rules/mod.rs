//! The rule tree model.
//!
//! - [`Value`]: text or a number
//! - [`Style`]: a flat property map
//! - [`Rule`]: what a selector maps to
//! - [`Rules`]: a selector tree, combined with a shallow [`Rules::merge`]
//!
//! These are plain data. Turning a tree into stylesheet text is left to the
//! renderer that consumes it; the types serialize as nested maps for that
//! purpose.

mod style;
mod tree;
mod value;

pub use style::Style;
pub use tree::{Rule, Rules};
pub use value::Value;
