use crate::ast::{Block, BlockKind};
use crate::cursor::Cursor;
use crate::matchers::{BlockMatcher, is_blank_line, strip_line_end};
use crate::parser::Parser;

const MARKER_INDENT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Unordered,
    Ordered,
}

/// Marker form and width of a potential item line: `- ` for unordered,
/// single-digit-then-period (`1. `) for ordered. The two forms are mutually
/// exclusive within one list.
fn marker_of(line: &str) -> Option<(Marker, usize)> {
    if line.starts_with("- ") {
        return Some((Marker::Unordered, 2));
    }
    let bytes = line.as_bytes();
    if bytes.len() >= 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2] == b' ' {
        return Some((Marker::Ordered, 3));
    }
    None
}

/// A continuation line is dedented by the marker indentation width before
/// being buffered into the current item.
fn dedent(line: &str) -> &str {
    line.get(MARKER_INDENT..).unwrap_or("")
}

/// Ordered and unordered lists. Item text accumulates dedented continuation
/// lines; each closed item is recursively parsed as an independent document
/// and the result becomes the item's children.
pub struct ListMatcher;

impl ListMatcher {
    fn close_item(parser: &Parser, lines: &[String], start: usize, end: usize) -> Block {
        let children = parser.parse(&lines.join("\n"));
        Block::new(BlockKind::ListItem { children }, start, end - start)
    }
}

impl BlockMatcher for ListMatcher {
    fn try_match(&self, cursor: &mut Cursor<'_>, parser: &Parser) -> Option<Block> {
        let first = strip_line_end(cursor.line());
        let (marker, width) = marker_of(first)?;

        let start = cursor.pos();
        let mut items: Vec<Block> = Vec::new();
        let mut item_lines = vec![first[width..].to_string()];
        let mut item_start = cursor.pos();
        cursor.advance_line();

        loop {
            let line = strip_line_end(cursor.line());

            // blank lines belong to the current item
            if is_blank_line(line) && !cursor.is_end() {
                item_lines.push(dedent(line).to_string());
                cursor.advance_line();
                continue;
            }
            // indented at least the marker width: continuation
            if line.starts_with("  ") {
                item_lines.push(dedent(line).to_string());
                cursor.advance_line();
                continue;
            }
            // a fresh marker of the same form starts the next item
            if let Some((m, w)) = marker_of(line)
                && m == marker
            {
                items.push(Self::close_item(parser, &item_lines, item_start, cursor.pos()));
                item_lines = vec![line[w..].to_string()];
                item_start = cursor.pos();
                cursor.advance_line();
                continue;
            }
            // anything else (including the other marker form) ends the list
            items.push(Self::close_item(parser, &item_lines, item_start, cursor.pos()));
            break;
        }

        Some(Block::new(
            BlockKind::List {
                ordered: marker == Marker::Ordered,
                items,
            },
            start,
            cursor.pos() - start,
        ))
    }
}
