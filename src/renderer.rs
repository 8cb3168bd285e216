/// HTML renderer for the block and inline trees
use crate::ast::{Block, BlockKind, InlineId, InlineKind, InlineTree};

pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }

    pub fn render(&self, blocks: &[Block]) -> String {
        blocks.iter().map(render_block).collect()
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_block(block: &Block) -> String {
    let body = match &block.kind {
        BlockKind::Paragraph { inlines, .. } | BlockKind::Heading { inlines, .. } => {
            let tree = inlines
                .as_ref()
                .expect("leaf block reached the renderer without an inline tree");
            render_inlines(tree)
        }
        BlockKind::Code { literal } => escape_entities(literal),
        BlockKind::Html { literal } => literal.clone(),
        BlockKind::List { items, .. } => items.iter().map(render_block).collect(),
        BlockKind::ListItem { children } | BlockKind::Blockquote { children } => {
            children.iter().map(render_block).collect()
        }
    };

    let tag = block.kind.tag();
    if tag.is_empty() {
        body
    } else {
        format!("<{}>{}</{}>", tag, body, tag)
    }
}

fn render_inlines(tree: &InlineTree) -> String {
    let mut out = String::new();
    render_inline(tree, InlineTree::ROOT, &mut out);
    out
}

fn render_inline(tree: &InlineTree, id: InlineId, out: &mut String) {
    match tree.kind(id) {
        InlineKind::Root { children } => {
            for &child in children {
                render_inline(tree, child, out);
            }
        }
        InlineKind::Em { children } => {
            out.push_str("<em>");
            for &child in children {
                render_inline(tree, child, out);
            }
            out.push_str("</em>");
        }
        InlineKind::Strong { children } => {
            out.push_str("<strong>");
            for &child in children {
                render_inline(tree, child, out);
            }
            out.push_str("</strong>");
        }
        InlineKind::Text { value } => {
            // a space before a line break becomes an explicit break tag
            out.push_str(&escape_entities(value).replace(" \n", "<br>\n"));
        }
        InlineKind::Code { value } => {
            out.push_str(&format!("<code>{}</code>", escape_entities(value)));
        }
        InlineKind::Link { href, title } => {
            let visible = if title.is_empty() {
                href.clone()
            } else {
                escape_entities(title)
            };
            out.push_str(&format!("<a href='{}'>{}</a>", href, visible));
        }
        InlineKind::Image { src, title } => {
            out.push_str(&format!("<img src='{}' title='{}' >", src, title));
        }
        InlineKind::Embed { src } => {
            out.push_str(&format!(
                "<iframe width=\"100%\" height=\"315\" src=\"https://www.youtube.com/embed/{}\" \
                 title=\"YouTube video player\" frameborder=\"0\" allow=\"accelerometer; autoplay; \
                 clipboard-write; encrypted-media; gyroscope; picture-in-picture\" \
                 allowfullscreen></iframe>",
                src
            ));
        }
    }
}

/// Numeric entity escaping: `<`, `>`, `&` and the U+00A0..=U+9999 range.
fn escape_entities(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '<' | '>' | '&' => format!("&#{};", c as u32),
            '\u{00A0}'..='\u{9999}' => format!("&#{};", c as u32),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::InlineTree as Tree;

    #[test]
    fn escapes_angle_brackets_and_ampersand() {
        assert_eq!(escape_entities("a <b> & c"), "a &#60;b&#62; &#38; c");
    }

    #[test]
    fn escapes_high_range_numerically() {
        assert_eq!(escape_entities("café"), "caf&#233;");
        assert_eq!(escape_entities("日本"), "&#26085;&#26412;");
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(escape_entities("plain 'text' \"here\""), "plain 'text' \"here\"");
    }

    #[test]
    fn trailing_space_newline_becomes_break() {
        let mut tree = Tree::new();
        tree.push(
            Tree::ROOT,
            InlineKind::Text {
                value: "one \ntwo".to_string(),
            },
        );
        assert_eq!(render_inlines(&tree), "one<br>\ntwo");
    }

    #[test]
    fn link_without_title_shows_raw_href() {
        let mut tree = Tree::new();
        tree.push(
            Tree::ROOT,
            InlineKind::Link {
                href: "url".to_string(),
                title: String::new(),
            },
        );
        assert_eq!(render_inlines(&tree), "<a href='url'>url</a>");
    }

    #[test]
    fn link_title_is_escaped() {
        let mut tree = Tree::new();
        tree.push(
            Tree::ROOT,
            InlineKind::Link {
                href: "u".to_string(),
                title: "<t>".to_string(),
            },
        );
        assert_eq!(render_inlines(&tree), "<a href='u'>&#60;t&#62;</a>");
    }

    #[test]
    fn image_attributes_are_unescaped() {
        let mut tree = Tree::new();
        tree.push(
            Tree::ROOT,
            InlineKind::Image {
                src: "pic.png".to_string(),
                title: "desc".to_string(),
            },
        );
        assert_eq!(render_inlines(&tree), "<img src='pic.png' title='desc' >");
    }

    #[test]
    fn code_block_body_is_escaped() {
        let block = Block::new(
            BlockKind::Code {
                literal: "<code>\n".to_string(),
            },
            0,
            0,
        );
        assert_eq!(render_block(&block), "<pre>&#60;code&#62;\n</pre>");
    }

    #[test]
    fn html_block_passes_through_without_wrapper() {
        let block = Block::new(
            BlockKind::Html {
                literal: "<div>raw</div>".to_string(),
            },
            0,
            0,
        );
        assert_eq!(render_block(&block), "<div>raw</div>");
    }

    #[test]
    #[should_panic(expected = "without an inline tree")]
    fn untokenized_leaf_is_a_defect() {
        let block = Block::new(
            BlockKind::Paragraph {
                text: "x".to_string(),
                inlines: None,
            },
            0,
            0,
        );
        render_block(&block);
    }
}
