/// Inline tokenizer: turns one leaf block's text into an inline node tree.
///
/// Deterministic and total: malformed constructs roll the cursor back to the
/// start of the attempt and degrade to literal text, one character at a time,
/// so the scan always advances.
use crate::ast::{InlineId, InlineKind, InlineTree};

pub fn tokenize(content: &str) -> InlineTree {
    Tokenizer::new(content).run()
}

struct Tokenizer {
    chars: Vec<char>,
    cur: usize,
    tree: InlineTree,
    /// Insertion point: new nodes land at (or under) this node.
    node: InlineId,
}

impl Tokenizer {
    fn new(content: &str) -> Self {
        Tokenizer {
            chars: content.chars().collect(),
            cur: 0,
            tree: InlineTree::new(),
            node: InlineTree::ROOT,
        }
    }

    fn run(mut self) -> InlineTree {
        while self.cur < self.chars.len() {
            let ch = self.chars[self.cur];
            let next = self.chars.get(self.cur + 1).copied();
            if ch == '\\' {
                self.escape();
            } else if ch == '*' && next == Some('*') {
                self.toggle_span(2, true);
            } else if ch == '*' {
                self.toggle_span(1, false);
            } else if ch == '!' && next == Some('[') {
                self.image();
            } else if ch == '%' && next == Some('[') {
                self.embed();
            } else if ch == '[' {
                self.link();
            } else if ch == '`' {
                self.code_span();
            } else {
                self.push_text();
            }
        }
        self.tree
    }

    /// Append the character at the cursor to the current text leaf, creating
    /// one under the insertion point's container if needed.
    fn push_text(&mut self) {
        while !self.tree.kind(self.node).is_container() && !self.tree.kind(self.node).is_text() {
            self.node = self.tree.parent(self.node);
        }
        if !self.tree.kind(self.node).is_text() {
            self.node = self.tree.push(
                self.node,
                InlineKind::Text {
                    value: String::new(),
                },
            );
        }
        if let InlineKind::Text { value } = self.tree.kind_mut(self.node) {
            value.push(self.chars[self.cur]);
        }
        self.cur += 1;
    }

    /// Backslash: the next character is literal. A lone trailing backslash is
    /// itself literal.
    fn escape(&mut self) {
        if self.cur + 1 < self.chars.len() {
            self.cur += 1;
        }
        self.push_text();
    }

    /// Delimiter toggle for `em`/`strong`: close the nearest open container
    /// of the same kind, otherwise open a new one and descend into it.
    fn toggle_span(&mut self, delimiter_len: usize, strong: bool) {
        self.cur += delimiter_len;
        let container = self.tree.container_of(self.node);
        let same_kind = match self.tree.kind(container) {
            InlineKind::Strong { .. } => strong,
            InlineKind::Em { .. } => !strong,
            _ => false,
        };
        if same_kind {
            self.node = self.tree.parent(container);
        } else {
            let kind = if strong {
                InlineKind::Strong {
                    children: Vec::new(),
                }
            } else {
                InlineKind::Em {
                    children: Vec::new(),
                }
            };
            self.node = self.tree.push(container, kind);
        }
    }

    /// Attach a finished leaf under the nearest container; the insertion
    /// point does not descend into leaves.
    fn attach_leaf(&mut self, kind: InlineKind) {
        let container = self.tree.container_of(self.node);
        self.tree.push(container, kind);
        self.node = container;
    }

    /// Accumulate characters until `end`, leaving the cursor on the
    /// delimiter. Restores the cursor and yields `None` if `end` never
    /// occurs.
    fn take_until(&mut self, end: char) -> Option<String> {
        let start = self.cur;
        let mut taken = String::new();
        while self.cur < self.chars.len() && self.chars[self.cur] != end {
            taken.push(self.chars[self.cur]);
            self.cur += 1;
        }
        if self.cur >= self.chars.len() {
            self.cur = start;
            return None;
        }
        Some(taken)
    }

    /// `` `...` ``: a code leaf holding the raw interior, never re-tokenized.
    fn code_span(&mut self) {
        let start = self.cur;
        self.cur += 1;
        match self.take_until('`') {
            Some(value) => {
                self.cur += 1;
                self.attach_leaf(InlineKind::Code { value });
            }
            None => {
                self.cur = start;
                self.push_text();
            }
        }
    }

    /// Bracketed target shared by links, images and embeds: `(...)` or
    /// `[...]` immediately after the closing `]` of the leading segment.
    fn take_target(&mut self) -> Option<String> {
        let end = match self.chars.get(self.cur) {
            Some('(') => ')',
            Some('[') => ']',
            _ => return None,
        };
        self.cur += 1;
        let target = self.take_until(end)?;
        self.cur += 1;
        Some(target)
    }

    /// `[title](href)` or `[title][href]`.
    fn link(&mut self) {
        let start = self.cur;
        self.cur += 1;
        let parsed = self.take_until(']').and_then(|title| {
            self.cur += 1;
            self.take_target().map(|href| (title, href))
        });
        match parsed {
            Some((title, href)) => self.attach_leaf(InlineKind::Link { href, title }),
            None => {
                self.cur = start;
                self.push_text();
            }
        }
    }

    /// `![desc](url)` or `![desc][url]`.
    fn image(&mut self) {
        let start = self.cur;
        self.cur += 2;
        let parsed = self.take_until(']').and_then(|title| {
            self.cur += 1;
            self.take_target().map(|src| (title, src))
        });
        match parsed {
            Some((title, src)) => self.attach_leaf(InlineKind::Image { src, title }),
            None => {
                self.cur = start;
                self.push_text();
                self.push_text();
            }
        }
    }

    /// `%[src]`: fixed video embed.
    fn embed(&mut self) {
        let start = self.cur;
        self.cur += 2;
        match self.take_until(']') {
            Some(src) => {
                self.cur += 1;
                self.attach_leaf(InlineKind::Embed { src });
            }
            None => {
                self.cur = start;
                self.push_text();
                self.push_text();
            }
        }
    }
}
