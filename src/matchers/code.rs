use crate::ast::{Block, BlockKind};
use crate::cursor::Cursor;
use crate::matchers::BlockMatcher;
use crate::parser::Parser;

/// Triple-backtick fenced code. Everything between the fences is kept
/// verbatim, terminators included; the fence lines themselves are not.
pub struct CodeMatcher;

impl BlockMatcher for CodeMatcher {
    fn try_match(&self, cursor: &mut Cursor<'_>, _parser: &Parser) -> Option<Block> {
        if !cursor.line().starts_with("```") {
            return None;
        }
        let start = cursor.pos();
        cursor.advance_line();

        let mut literal = String::new();
        while !cursor.is_end() && !cursor.line().starts_with("```") {
            literal.push_str(cursor.line());
            cursor.advance_line();
        }
        // closing fence, if any
        cursor.advance_line();

        Some(Block::new(
            BlockKind::Code { literal },
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
        CodeMatcher.try_match(&mut cursor, &Parser::new())
    }

    #[test]
    fn fences_excluded_content_verbatim() {
        let block = matched("```\nlet x = 1;\nlet y = 2;\n```\n").expect("should match");
        match block.kind {
            BlockKind::Code { literal } => assert_eq!(literal, "let x = 1;\nlet y = 2;\n"),
            other => panic!("expected code, got {:?}", other),
        }
    }

    #[test]
    fn runs_to_end_without_closing_fence() {
        let block = matched("```\nunterminated\n").expect("should match");
        match block.kind {
            BlockKind::Code { literal } => assert_eq!(literal, "unterminated\n"),
            other => panic!("expected code, got {:?}", other),
        }
    }

    #[test]
    fn markup_inside_stays_raw() {
        let block = matched("```\n**not strong**\n```").expect("should match");
        match block.kind {
            BlockKind::Code { literal } => assert_eq!(literal, "**not strong**\n"),
            other => panic!("expected code, got {:?}", other),
        }
    }

    #[test]
    fn plain_line_rejects_without_moving() {
        let mut cursor = Cursor::new("plain\n```\n");
        assert!(CodeMatcher.try_match(&mut cursor, &Parser::new()).is_none());
        assert_eq!(cursor.pos(), 0);
    }

    #[test]
    fn consumes_past_closing_fence() {
        let mut cursor = Cursor::new("```\nx\n```\nafter");
        CodeMatcher
            .try_match(&mut cursor, &Parser::new())
            .expect("should match");
        assert_eq!(cursor.line(), "after");
    }
}
