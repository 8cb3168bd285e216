use crate::ast::{Block, BlockKind};
use crate::cursor::Cursor;
use crate::matchers::BlockMatcher;
use crate::parser::Parser;

/// ATX-style headings: 1-6 leading `#`. A run of seven or more rejects the
/// line outright instead of clamping, leaving it to paragraph handling.
pub struct HeadingMatcher;

impl BlockMatcher for HeadingMatcher {
    fn try_match(&self, cursor: &mut Cursor<'_>, _parser: &Parser) -> Option<Block> {
        if cursor.ch() != Some('#') {
            return None;
        }
        let line = cursor.line();
        let level = line.chars().take_while(|&c| c == '#').count();
        if level > 6 {
            return None;
        }

        let start = cursor.pos();
        let text = line[level..].trim().to_string();
        cursor.advance_line();

        Some(Block::new(
            BlockKind::Heading {
                level: level as u8,
                text,
                inlines: None,
            },
            start,
            cursor.pos() - start,
        ))
    }
}
