/// AST node types for the restricted Markdown dialect
use serde::{Deserialize, Serialize};

/// Source position of a block, relative to the document its parse saw.
/// Recursive sub-parses (list items, blockquotes) restart at offset zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Span { start, len }
    }
}

/// A structural unit of the document: a leaf block carrying text or a
/// container block carrying child blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub span: Span,
}

impl Block {
    pub fn new(kind: BlockKind, start: usize, len: usize) -> Self {
        Block {
            kind,
            span: Span::new(start, len),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockKind {
    Paragraph {
        text: String,
        inlines: Option<InlineTree>,
    },
    Heading {
        level: u8,
        text: String,
        inlines: Option<InlineTree>,
    },
    /// Fenced code; rendered entity-escaped, never inline-tokenized
    Code {
        literal: String,
    },
    /// Raw HTML passthrough; rendered verbatim with no wrapper tag
    Html {
        literal: String,
    },
    List {
        ordered: bool,
        items: Vec<Block>, // ListItem blocks
    },
    ListItem {
        children: Vec<Block>,
    },
    Blockquote {
        children: Vec<Block>,
    },
}

impl BlockKind {
    /// HTML wrapper tag for this block; empty string means no wrapper.
    pub fn tag(&self) -> String {
        match self {
            BlockKind::Paragraph { .. } => "p".to_string(),
            BlockKind::Heading { level, .. } => format!("h{}", level),
            BlockKind::Code { .. } => "pre".to_string(),
            BlockKind::Html { .. } => String::new(),
            BlockKind::List { ordered, .. } => if *ordered { "ol" } else { "ul" }.to_string(),
            BlockKind::ListItem { .. } => "li".to_string(),
            BlockKind::Blockquote { .. } => "blockquote".to_string(),
        }
    }
}

/// Index of an inline node within its `InlineTree`.
pub type InlineId = usize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineNode {
    /// Structural parent, used only for upward walks during tokenization.
    /// The root is its own parent.
    pub parent: InlineId,
    pub kind: InlineKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InlineKind {
    Root { children: Vec<InlineId> },
    Text { value: String },
    Em { children: Vec<InlineId> },
    Strong { children: Vec<InlineId> },
    Code { value: String },
    Link { href: String, title: String },
    Image { src: String, title: String },
    Embed { src: String },
}

impl InlineKind {
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            InlineKind::Root { .. } | InlineKind::Em { .. } | InlineKind::Strong { .. }
        )
    }

    pub fn is_text(&self) -> bool {
        matches!(self, InlineKind::Text { .. })
    }
}

/// Arena of inline nodes addressed by index. Node 0 is the root; the
/// parent's child list owns the index, parent links are non-owning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineTree {
    nodes: Vec<InlineNode>,
}

impl InlineTree {
    pub const ROOT: InlineId = 0;

    pub fn new() -> Self {
        InlineTree {
            nodes: vec![InlineNode {
                parent: Self::ROOT,
                kind: InlineKind::Root {
                    children: Vec::new(),
                },
            }],
        }
    }

    pub fn kind(&self, id: InlineId) -> &InlineKind {
        &self.nodes[id].kind
    }

    pub fn kind_mut(&mut self, id: InlineId) -> &mut InlineKind {
        &mut self.nodes[id].kind
    }

    pub fn parent(&self, id: InlineId) -> InlineId {
        self.nodes[id].parent
    }

    /// Child ids of a container node; leaves have none.
    pub fn children(&self, id: InlineId) -> &[InlineId] {
        match &self.nodes[id].kind {
            InlineKind::Root { children }
            | InlineKind::Em { children }
            | InlineKind::Strong { children } => children,
            _ => &[],
        }
    }

    /// Nearest container at or above `id`.
    pub fn container_of(&self, mut id: InlineId) -> InlineId {
        while !self.nodes[id].kind.is_container() {
            id = self.nodes[id].parent;
        }
        id
    }

    /// Attach a new node under `parent` and return its id.
    pub fn push(&mut self, parent: InlineId, kind: InlineKind) -> InlineId {
        let id = self.nodes.len();
        self.nodes.push(InlineNode { parent, kind });
        match &mut self.nodes[parent].kind {
            InlineKind::Root { children }
            | InlineKind::Em { children }
            | InlineKind::Strong { children } => children.push(id),
            _ => panic!("inline node {} attached to non-container parent", id),
        }
        id
    }
}

impl Default for InlineTree {
    fn default() -> Self {
        Self::new()
    }
}
