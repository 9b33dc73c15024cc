//! Javadoc to XML Documentation Comment Library
//!
//! This library rewrites Javadoc-style block comments (`/** ... */` with
//! `@param`, `@return`, `@throws` and `@see` tags) in C# source files into
//! `///` XML documentation comments.

pub mod config;
pub mod error;
pub mod javadoc;
pub mod logging;
pub mod rewrite;

pub use error::{TranslateError, TranslateResult};
