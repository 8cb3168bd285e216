use crate::ast::{Block, BlockKind};
use crate::cursor::Cursor;
use crate::matchers::BlockMatcher;
use crate::parser::Parser;

/// `>`-prefixed quotes. Consecutive quoted lines are stripped of one `>`
/// (plus at most one following space) and the remainder, line breaks intact,
/// is recursively parsed as an independent document.
pub struct BlockquoteMatcher;

impl BlockMatcher for BlockquoteMatcher {
    fn try_match(&self, cursor: &mut Cursor<'_>, parser: &Parser) -> Option<Block> {
        if !cursor.line().starts_with('>') {
            return None;
        }

        let start = cursor.pos();
        let mut quoted = String::new();
        while !cursor.is_end() {
            let line = cursor.line();
            let Some(rest) = line.strip_prefix('>') else {
                break;
            };
            quoted.push_str(rest.strip_prefix(' ').unwrap_or(rest));
            cursor.advance_line();
        }

        let children = parser.parse(&quoted);
        Some(Block::new(
            BlockKind::Blockquote { children },
            start,
            cursor.pos() - start,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(src: &str) -> Option<Block> {
        let mut cursor = Cursor::new(src);
        BlockquoteMatcher.try_match(&mut cursor, &Parser::new())
    }

    fn children_of(block: Block) -> Vec<Block> {
        match block.kind {
            BlockKind::Blockquote { children } => children,
            other => panic!("expected blockquote, got {:?}", other),
        }
    }

    #[test]
    fn interior_parses_as_independent_document() {
        let children = children_of(matched("> a\n> b").expect("should match"));
        let expected = Parser::new().parse("a\nb");
        assert_eq!(children, expected);
    }

    #[test]
    fn stops_at_first_unquoted_line() {
        let mut cursor = Cursor::new("> quoted\nplain");
        let block = BlockquoteMatcher
            .try_match(&mut cursor, &Parser::new())
            .expect("should match");
        assert_eq!(children_of(block).len(), 1);
        assert_eq!(cursor.line(), "plain");
    }

    #[test]
    fn nested_quote_recurses() {
        let children = children_of(matched("> > deep").expect("should match"));
        assert_eq!(children.len(), 1);
        assert!(matches!(children[0].kind, BlockKind::Blockquote { .. }));
    }

    #[test]
    fn quoted_heading_is_parsed_inside() {
        let children = children_of(matched("> # title").expect("should match"));
        assert!(matches!(
            children[0].kind,
            BlockKind::Heading { level: 1, .. }
        ));
    }

    #[test]
    fn plain_line_rejects_without_moving() {
        let mut cursor = Cursor::new("no quote here");
        assert!(
            BlockquoteMatcher
                .try_match(&mut cursor, &Parser::new())
                .is_none()
        );
        assert_eq!(cursor.pos(), 0);
    }
}
