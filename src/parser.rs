/// Block dispatcher: drives the scan loop over an ordered matcher list,
/// buffers unclaimed lines into paragraphs, and attaches inline trees.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Block, BlockKind};
use crate::cursor::Cursor;
use crate::inline;
use crate::matchers::{
    ALLOWED_TAGS, BlockMatcher, BlockquoteMatcher, CodeMatcher, HeadingMatcher, HtmlMatcher,
    ListMatcher,
};

/// Runs of three or more newlines collapse to a single blank line before
/// paragraph splitting.
static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// The fixed matcher trial order. Container matchers recursively re-enter
/// the parser on their dedented sub-documents.
pub fn default_matchers(allowed_tags: &'static [&'static str]) -> Vec<Box<dyn BlockMatcher>> {
    vec![
        Box::new(HeadingMatcher),
        Box::new(CodeMatcher),
        Box::new(HtmlMatcher::new(allowed_tags)),
        Box::new(ListMatcher),
        Box::new(BlockquoteMatcher),
    ]
}

pub struct Parser {
    matchers: Vec<Box<dyn BlockMatcher>>,
}

impl Parser {
    pub fn new() -> Self {
        Self::with_matchers(default_matchers(ALLOWED_TAGS))
    }

    /// Construct with an explicit, ordered matcher list. There is no global
    /// registry; configuration lives in the instance.
    pub fn with_matchers(matchers: Vec<Box<dyn BlockMatcher>>) -> Self {
        Parser { matchers }
    }

    /// Parse one document (top-level or a recursive sub-document) into a
    /// block list. Each invocation owns its cursor and paragraph buffer.
    pub fn parse(&self, source: &str) -> Vec<Block> {
        let source = source.replace('\r', "");
        let mut cursor = Cursor::new(&source);
        let mut blocks: Vec<Block> = Vec::new();
        let mut pending: Vec<String> = Vec::new();
        let mut pending_start = 0;

        while !cursor.is_end() {
            let before = cursor.pos();
            match self
                .matchers
                .iter()
                .find_map(|m| m.try_match(&mut cursor, self))
            {
                Some(block) => {
                    // paragraphs land immediately before the block that
                    // triggered the flush, preserving source order
                    flush_paragraphs(&mut blocks, &mut pending, pending_start, before);
                    blocks.push(block);
                }
                None => {
                    if pending.is_empty() {
                        pending_start = before;
                    }
                    pending.push(cursor.line().trim_end_matches('\n').to_string());
                    cursor.advance_line();
                }
            }
        }
        flush_paragraphs(&mut blocks, &mut pending, pending_start, cursor.pos());

        for block in &mut blocks {
            attach_inline_trees(block);
        }
        blocks
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Join buffered lines, collapse blank-line runs, and emit one paragraph per
/// non-empty blank-line-separated group.
fn flush_paragraphs(blocks: &mut Vec<Block>, pending: &mut Vec<String>, start: usize, end: usize) {
    if pending.is_empty() {
        return;
    }
    let joined = pending.join("\n");
    pending.clear();

    let collapsed = NEWLINE_RUNS.replace_all(&joined, "\n\n");
    for group in collapsed.split("\n\n") {
        if group.trim().is_empty() {
            continue;
        }
        blocks.push(Block::new(
            BlockKind::Paragraph {
                text: group.to_string(),
                inlines: None,
            },
            start,
            end - start,
        ));
    }
}

/// Depth-first visit tokenizing every leaf block that allows inline markup.
/// Leaves produced by a recursive sub-parse already carry their tree.
fn attach_inline_trees(block: &mut Block) {
    match &mut block.kind {
        BlockKind::Paragraph { text, inlines } | BlockKind::Heading { text, inlines, .. } => {
            if inlines.is_none() {
                *inlines = Some(inline::tokenize(text));
            }
        }
        BlockKind::List { items, .. } => {
            for item in items {
                attach_inline_trees(item);
            }
        }
        BlockKind::ListItem { children } | BlockKind::Blockquote { children } => {
            for child in children {
                attach_inline_trees(child);
            }
        }
        BlockKind::Code { .. } | BlockKind::Html { .. } => {}
    }
}
