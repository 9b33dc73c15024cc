//! Javadoc comment translation
//!
//! This module rewrites Javadoc-style block comments into C# XML documentation
//! comments. It is split along the stages of a single scan:
//! 1. `locator`: finds the next `/* ... */` block after the scan cursor
//! 2. `classifier`: sorts each continuation line into summary text or a tag
//! 3. `xml_doc`: accumulates the lines of one block and renders `///` output
//! 4. `translator`: drives the scan and splices results back into the buffer

pub mod constants;
pub mod locator;
pub mod classifier;
pub mod xml_doc;
pub mod translator;

// Re-export the main translator
pub use translator::{CommentTranslator, TranslationReport};
