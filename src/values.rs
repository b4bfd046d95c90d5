//! CSS value shorthand.

use crate::rules::Value;

/// Joins value tokens into a single CSS value string.
///
/// Each token is converted on its own with [`Value::to_css_token`]: zero
/// becomes `0`, other numbers get a `px` suffix, and text passes through.
/// Tokens keep their order and are separated by one space.
///
/// Numbers are always written in plain decimal form: `1e21` becomes
/// `1000000000000000000000px` and `1e-7` becomes `0.0000001px`, where a
/// script runtime would print `1e+21px` and `1e-7px`.
///
/// See [`css_values!`](crate::css_values!) for mixing numbers and text
/// without converting each token by hand.
///
/// # Example
///
/// ```rust
/// use stylish::{css_values, Value};
///
/// assert_eq!(css_values([0, 8]), "0 8px");
/// assert_eq!(
///     css_values([Value::from(1), "solid".into(), "black".into()]),
///     "1px solid black",
/// );
/// ```
pub fn css_values<I, V>(values: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    values
        .into_iter()
        .map(|value| value.into().to_css_token())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds a CSS value string from mixed number and text tokens.
///
/// ```rust
/// use stylish::css_values;
///
/// assert_eq!(css_values!(10, "solid", "red"), "10px solid red");
/// assert_eq!(css_values!(0, 4, 0, 4), "0 4px 0 4px");
/// assert_eq!(css_values!(), "");
/// ```
#[macro_export]
macro_rules! css_values {
    ($($value:expr),* $(,)?) => {
        $crate::css_values::<_, $crate::Value>([$($crate::Value::from($value)),*])
    };
}
