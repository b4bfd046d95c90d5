//! Class-name uniqueness tracking.
//!
//! A [`ClassRegistry`] records every name it mints and refuses to mint the
//! same name twice. Registries only grow: there is no way to release a name.
//!
//! Two ways to use it:
//!
//! - **Caller-owned**: create a [`ClassRegistry`] and mint through it. Each
//!   instance is independent, so separate builds or tests never collide.
//! - **Process-wide**: [`css_class`] and [`css_class_with`] mint through a
//!   shared registry that lives for the whole process.

use indexmap::IndexSet;
use log::debug;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::error::ClassError;
use super::minted::CssClass;
use super::name::ClassName;
use crate::rules::{Rule, Style};

/// Tracks minted class names and mints new [`CssClass`] values.
///
/// # Thread Safety
///
/// Minting takes `&mut self`, so a registry shared across threads must be
/// wrapped by the caller. The process-wide registry behind [`css_class`] is
/// already behind a mutex.
///
/// # Example
///
/// ```rust
/// use stylish::{ClassError, ClassRegistry};
///
/// let mut registry = ClassRegistry::new();
/// let btn = registry.class("btn").unwrap();
/// assert_eq!(btn.class_name(), "btn");
///
/// let again = registry.class("btn");
/// assert!(matches!(again, Err(ClassError::DuplicateClassName { .. })));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    names: IndexSet<String>,
}

impl ClassRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints a class with an empty style.
    ///
    /// The resulting tree is `{".name": {}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassError::DuplicateClassName`] if `name` was already
    /// minted by this registry. The registry is left unchanged.
    pub fn class(&mut self, name: impl Into<String>) -> Result<CssClass, ClassError> {
        self.class_with(name, Style::new())
    }

    /// Mints a class with the given styles under its selector.
    ///
    /// `styles` may be a flat [`Style`] or a whole [`Rules`](crate::Rules)
    /// tree; either is stored under `.name` exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`ClassError::DuplicateClassName`] if `name` was already
    /// minted by this registry. The registry is left unchanged.
    pub fn class_with<S: Into<Rule>>(
        &mut self,
        name: impl Into<String>,
        styles: S,
    ) -> Result<CssClass, ClassError> {
        let name = name.into();
        // check and insert in one step
        if !self.names.insert(name.clone()) {
            return Err(ClassError::DuplicateClassName { name });
        }
        debug!("minted class name {:?} ({} total)", name, self.names.len());
        Ok(CssClass::new(name, styles.into()))
    }

    /// Returns true if the name has been minted.
    pub fn contains<N: Into<ClassName>>(&self, name: N) -> bool {
        self.names.contains(name.into().as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates minted names in the order they were minted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

static GLOBAL_REGISTRY: Lazy<Mutex<ClassRegistry>> =
    Lazy::new(|| Mutex::new(ClassRegistry::new()));

// A panic while holding the lock cannot leave the set half-updated, so a
// poisoned lock is still usable.
fn global() -> MutexGuard<'static, ClassRegistry> {
    GLOBAL_REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Mints a class with an empty style through the process-wide registry.
///
/// # Errors
///
/// Returns [`ClassError::DuplicateClassName`] if `name` was already minted
/// anywhere in this process.
///
/// # Example
///
/// ```rust
/// use stylish::{css_class, Composable, Rule, Style};
///
/// let empty = css_class("doc-empty").unwrap();
/// assert_eq!(empty.rules().get(".doc-empty"), Some(&Rule::Style(Style::new())));
/// assert!(css_class("doc-empty").is_err());
/// ```
pub fn css_class(name: impl Into<String>) -> Result<CssClass, ClassError> {
    global().class(name)
}

/// Mints a class with the given styles through the process-wide registry.
///
/// # Errors
///
/// Returns [`ClassError::DuplicateClassName`] if `name` was already minted
/// anywhere in this process.
pub fn css_class_with<S: Into<Rule>>(
    name: impl Into<String>,
    styles: S,
) -> Result<CssClass, ClassError> {
    global().class_with(name, styles)
}

/// Returns true if the process-wide registry has minted `name`.
pub fn is_class_minted<N: Into<ClassName>>(name: N) -> bool {
    global().contains(name)
}
