use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Block, BlockKind};
use crate::cursor::Cursor;
use crate::matchers::{BlockMatcher, is_blank_line, strip_line_end};
use crate::parser::Parser;

/// Tags whose blocks pass through verbatim when they open a line.
pub const ALLOWED_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "base",
    "basefont",
    "blockquote",
    "body",
    "caption",
    "center",
    "col",
    "colgroup",
    "dd",
    "details",
    "dialog",
    "dir",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "frame",
    "frameset",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "head",
    "header",
    "hr",
    "html",
    "iframe",
    "legend",
    "li",
    "link",
    "main",
    "menu",
    "menuitem",
    "nav",
    "noframes",
    "ol",
    "optgroup",
    "option",
    "p",
    "param",
    "section",
    "source",
    "summary",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "title",
    "tr",
    "track",
    "ul",
];

static RAW_CONTAINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<(script|pre|style)( |>|$)").unwrap());

static TAG_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^</?([a-zA-Z0-9]+)( |\t|/>|>|$)").unwrap());

/// Raw HTML passthrough. Two sub-rules, first success wins: `<script>`,
/// `<pre>` and `<style>` containers run until their closing tag; any other
/// allow-listed tag runs until the next blank line.
pub struct HtmlMatcher {
    allowed_tags: &'static [&'static str],
}

impl HtmlMatcher {
    pub fn new(allowed_tags: &'static [&'static str]) -> Self {
        HtmlMatcher { allowed_tags }
    }

    /// `<(script|pre|style)` line: consume until a line containing the
    /// matching close tag (inclusive), or end of input.
    fn raw_container(&self, cursor: &mut Cursor<'_>) -> Option<Block> {
        let first = cursor.line();
        let caps = RAW_CONTAINER.captures(strip_line_end(first))?;
        let end_tag = format!("</{}>", &caps[1]);

        let start = cursor.pos();
        let mut line = first;
        let mut literal = String::new();
        cursor.advance_line();
        while !cursor.is_end() && !line.contains(&end_tag) {
            literal.push_str(line);
            line = cursor.line();
            cursor.advance_line();
        }
        literal.push_str(line);

        Some(Block::new(
            BlockKind::Html {
                literal: literal.trim().to_string(),
            },
            start,
            cursor.pos() - start,
        ))
    }

    /// Generic open/close tag line whose name is allow-listed: consume until
    /// the next blank line (inclusive), or end of input.
    fn allow_listed(&self, cursor: &mut Cursor<'_>) -> Option<Block> {
        let first = cursor.line();
        let caps = TAG_LINE.captures(strip_line_end(first))?;
        let name = caps[1].to_ascii_lowercase();
        if !self.allowed_tags.contains(&name.as_str()) {
            return None;
        }

        let start = cursor.pos();
        let mut line = first;
        let mut literal = String::new();
        cursor.advance_line();
        while !cursor.is_end() && !is_blank_line(line) {
            literal.push_str(line);
            line = cursor.line();
            cursor.advance_line();
        }
        literal.push_str(line);

        Some(Block::new(
            BlockKind::Html {
                literal: literal.trim().to_string(),
            },
            start,
            cursor.pos() - start,
        ))
    }
}

impl BlockMatcher for HtmlMatcher {
    fn try_match(&self, cursor: &mut Cursor<'_>, _parser: &Parser) -> Option<Block> {
        self.raw_container(cursor)
            .or_else(|| self.allow_listed(cursor))
    }
}
