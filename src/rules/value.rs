//! Property values: text or a number.

use serde::{Deserialize, Serialize, Serializer};

/// Largest magnitude at which every integer is exactly representable in an `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A single style property value.
///
/// Values are passed through to the renderer unchanged; the only
/// interpretation this crate ever applies is [`Value::to_css_token`].
///
/// # Example
///
/// ```rust
/// use stylish::Value;
///
/// assert_eq!(Value::from(12).to_css_token(), "12px");
/// assert_eq!(Value::from("auto").to_css_token(), "auto");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A literal string, e.g. `"red"` or `"10%"`.
    Text(String),
    /// A bare number.
    Number(f64),
}

impl Value {
    /// Returns the text if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Number(_) => None,
        }
    }

    /// Returns the number if this is a [`Value::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Text(_) => None,
            Value::Number(n) => Some(*n),
        }
    }

    /// Converts this value into a CSS value token.
    ///
    /// Zero becomes `"0"`, any other number gets a `px` suffix, and text is
    /// returned verbatim.
    pub fn to_css_token(&self) -> String {
        match self {
            Value::Text(text) => text.clone(),
            Value::Number(n) if *n == 0.0 => "0".to_string(),
            Value::Number(n) => format!("{}px", format_number(*n)),
        }
    }
}

/// Formats a number the way a script runtime prints it in the common range.
///
/// Integral values print without a fraction and non-finite values use the
/// `NaN` / `Infinity` spellings. Exponent notation is never used, so `1e21`
/// prints all its digits and `1e-7` prints as `0.0000001`.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(text) => serializer.serialize_str(text),
            Value::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Value::Text(text.clone())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f64);

// Widening keeps the binary value (1.1f32 is 1.100000023841858), so go
// through the shortest decimal form instead.
impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n.to_string().parse().unwrap_or(n as f64))
    }
}
