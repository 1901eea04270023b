//! Owned query AST.
//!
//! Lists are built through [`Node::or_list`] and [`Node::and_list`], which
//! collapse a single item to the item itself, so an `Or`/`And` node always
//! holds at least two children.

use serde::Serialize;

use super::token::{FilterOp, TokenKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Bare term. `kind` records whether the lexeme was a word, URL, date or number.
    Word { text: String, kind: TokenKind },
    /// Quoted phrase, quotes stripped.
    Text { text: String },
    /// Hashtag without its `#`.
    Hashtag { text: String },
    /// Mention without its `@`.
    Mention { text: String },
    /// Leaf term carrying a filter, a range, a boost, or a combination.
    Explicit {
        value: Box<Node>,
        #[serde(skip_serializing_if = "Option::is_none")]
        filter_key: Option<String>,
        filter_op: FilterOp,
        #[serde(skip_serializing_if = "Option::is_none")]
        boost: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        range_to: Option<Box<Node>>,
    },
    Exclude { inner: Box<Node> },
    Include { inner: Box<Node> },
    Subexpression { inner: Box<Node> },
    Or { items: Vec<Node> },
    And { items: Vec<Node> },
}

impl Node {
    pub fn word(text: impl Into<String>, kind: TokenKind) -> Self {
        Node::Word {
            text: text.into(),
            kind,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn hashtag(text: impl Into<String>) -> Self {
        Node::Hashtag { text: text.into() }
    }

    pub fn mention(text: impl Into<String>) -> Self {
        Node::Mention { text: text.into() }
    }

    pub fn exclude(inner: Node) -> Self {
        Node::Exclude {
            inner: Box::new(inner),
        }
    }

    pub fn include(inner: Node) -> Self {
        Node::Include {
            inner: Box::new(inner),
        }
    }

    pub fn subexpression(inner: Node) -> Self {
        Node::Subexpression {
            inner: Box::new(inner),
        }
    }

    /// `None` for no items, the item itself for one, `Or` otherwise.
    pub fn or_list(mut items: Vec<Node>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => items.pop(),
            _ => Some(Node::Or { items }),
        }
    }

    /// `None` for no items, the item itself for one, `And` otherwise.
    pub fn and_list(mut items: Vec<Node>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => items.pop(),
            _ => Some(Node::And { items }),
        }
    }

    /// Terms that can carry a filter, range or boost.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Node::Word { .. } | Node::Text { .. } | Node::Hashtag { .. } | Node::Mention { .. }
        )
    }

    /// Token kind this node was built from.
    pub fn token_kind(&self) -> TokenKind {
        match self {
            Node::Word { kind, .. } => *kind,
            Node::Text { .. } => TokenKind::Phrase,
            Node::Hashtag { .. } => TokenKind::Hashtag,
            Node::Mention { .. } => TokenKind::Mention,
            Node::Explicit {
                filter_key,
                range_to,
                ..
            } => {
                if filter_key.is_some() {
                    TokenKind::Filter
                } else if range_to.is_some() {
                    TokenKind::Range
                } else {
                    TokenKind::Boost
                }
            }
            Node::Exclude { .. } => TokenKind::Exclude,
            Node::Include { .. } => TokenKind::Include,
            Node::Subexpression { .. } => TokenKind::OpenParen,
            Node::Or { .. } => TokenKind::OrOperator,
            Node::And { .. } => TokenKind::AndOperator,
        }
    }

    /// Text of a leaf term, or of the leaf an explicit term wraps.
    pub fn term_text(&self) -> Option<&str> {
        match self {
            Node::Word { text, .. }
            | Node::Text { text }
            | Node::Hashtag { text }
            | Node::Mention { text } => Some(text),
            Node::Explicit { value, .. } => value.term_text(),
            _ => None,
        }
    }

    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Word { .. } | Node::Text { .. } | Node::Hashtag { .. } | Node::Mention { .. } => {
                Vec::new()
            }
            Node::Explicit {
                value, range_to, ..
            } => std::iter::once(value.as_ref())
                .chain(range_to.as_deref())
                .collect(),
            Node::Exclude { inner } | Node::Include { inner } | Node::Subexpression { inner } => {
                vec![inner.as_ref()]
            }
            Node::Or { items } | Node::And { items } => items.iter().collect(),
        }
    }

    /// Top-level expressions: the items of a root list, or the node itself.
    pub fn expressions(&self) -> Vec<&Node> {
        match self {
            Node::Or { items } | Node::And { items } => items.iter().collect(),
            _ => vec![self],
        }
    }
}
