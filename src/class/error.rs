//! Class minting errors.

use thiserror::Error;

/// Error returned when a class cannot be minted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassError {
    /// The name was already minted by this registry. Class names are unique
    /// for the lifetime of the registry.
    #[error("class name \"{name}\" has already been used")]
    DuplicateClassName { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_class_name_display() {
        let err = ClassError::DuplicateClassName {
            name: "btn".to_string(),
        };
        assert_eq!(err.to_string(), "class name \"btn\" has already been used");
    }
}
