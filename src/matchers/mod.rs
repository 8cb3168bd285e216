/// Block-level matchers: each consumes zero or more lines at the cursor's
/// position and either produces a block or leaves the cursor untouched.
mod blockquote;
mod code;
mod heading;
mod html;
mod list;

pub use blockquote::BlockquoteMatcher;
pub use code::CodeMatcher;
pub use heading::HeadingMatcher;
pub use html::{ALLOWED_TAGS, HtmlMatcher};
pub use list::ListMatcher;

use crate::ast::Block;
use crate::cursor::Cursor;
use crate::parser::Parser;

pub trait BlockMatcher {
    /// Attempt to claim lines starting at the cursor. On success the cursor
    /// has advanced past everything the block consumed; on `None` it is
    /// exactly where it was. Container matchers use `parser` to recursively
    /// parse their dedented sub-document under the same configuration.
    fn try_match(&self, cursor: &mut Cursor<'_>, parser: &Parser) -> Option<Block>;
}

pub(crate) fn strip_line_end(line: &str) -> &str {
    line.trim_end_matches('\n')
}

pub(crate) fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}
