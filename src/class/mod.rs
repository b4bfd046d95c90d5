//! Class minting with unique names.
//!
//! - [`ClassRegistry`]: tracks minted names and mints [`CssClass`] values
//! - [`CssClass`]: a class name plus its `.name` rule tree
//! - [`ClassName`]: a name taken from a minted class or given inline
//! - [`ClassError`]: the duplicate-name failure
//!
//! The free functions mint through a process-wide registry.

mod error;
mod minted;
mod name;
mod registry;

pub use error::ClassError;
pub use minted::CssClass;
pub use name::ClassName;
pub use registry::{css_class, css_class_with, is_class_minted, ClassRegistry};
