//! Delimiters, tag names and XML-doc markup used by the translator
//!
//! Keeping these in one place lets the locator, the classifier and the
//! renderer agree on the exact text they look for and emit.

/// Opening delimiter of a block comment
///
/// Example: `/*` or the first two characters of `/**`
pub const BLOCK_OPEN: &str = "/*";

/// Closing delimiter of a block comment
pub const BLOCK_CLOSE: &str = "*/";

/// Prefix of every emitted XML documentation line
pub const DOC_LINE_PREFIX: &str = "/// ";

/// Default substring that exempts a block from translation (license headers)
pub const DEFAULT_SKIP_MARKER: &str = "Copyright";

/// Parameter tag
///
/// Example: `@param count the number of items`
pub const TAG_PARAM: &str = "@param";

/// Return value tag
///
/// Example: `@return the new size`
pub const TAG_RETURN: &str = "@return";

/// Alternative spelling of the return value tag
pub const TAG_RETURNS: &str = "@returns";

/// Thrown exception tag
///
/// Example: `@throws IOException when the stream is closed`
pub const TAG_THROWS: &str = "@throws";

/// Javadoc synonym of `@throws`
pub const TAG_EXCEPTION: &str = "@exception";

/// Cross-reference tag, dropped from the output
pub const TAG_SEE: &str = "@see";

pub const SUMMARY_OPEN: &str = "<summary>";
pub const SUMMARY_CLOSE: &str = "</summary>";
pub const PARA_OPEN: &str = "<para>";
pub const PARA_CLOSE: &str = "</para>";
