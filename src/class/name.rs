//! References to class names.

use super::minted::CssClass;

/// A class name, either taken from a minted [`CssClass`] or given inline.
///
/// Both cases carry the bare name (no leading `.`) and behave the same
/// everywhere a name is looked up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassName {
    /// The name of a class minted through a registry.
    Named(String),
    /// A plain string naming a class.
    Inline(String),
}

impl ClassName {
    /// Returns the bare class name.
    pub fn as_str(&self) -> &str {
        match self {
            ClassName::Named(name) | ClassName::Inline(name) => name,
        }
    }

    /// Returns the class selector, e.g. `.btn`.
    pub fn selector(&self) -> String {
        format!(".{}", self.as_str())
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&CssClass> for ClassName {
    fn from(class: &CssClass) -> Self {
        ClassName::Named(class.class_name().to_string())
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        ClassName::Inline(name.to_string())
    }
}

impl From<String> for ClassName {
    fn from(name: String) -> Self {
        ClassName::Inline(name)
    }
}

impl From<&String> for ClassName {
    fn from(name: &String) -> Self {
        ClassName::Inline(name.clone())
    }
}
