//! Indented text dump of an AST, one node per line.

use std::fmt::Write;

use quarry_core::Colors;

use super::ast::Node;
use super::token::TokenKind;

pub struct AstPrinter<'n> {
    node: &'n Node,
    colors: Colors,
}

impl<'n> AstPrinter<'n> {
    pub fn new(node: &'n Node) -> Self {
        Self {
            node,
            colors: Colors::OFF,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colors = Colors::new(value);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.node, 0, w)
    }

    fn format_node(&self, node: &Node, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        self.format_line(node, &prefix, w)?;
        match node {
            Node::Explicit {
                value, range_to, ..
            } => {
                self.format_node(value, indent + 1, w)?;
                if let Some(to) = range_to {
                    let c = &self.colors;
                    write!(w, "{prefix}  {}..{} ", c.dim, c.reset)?;
                    self.format_line(to, "", w)?;
                }
                Ok(())
            }
            _ => {
                for child in node.children() {
                    self.format_node(child, indent + 1, w)?;
                }
                Ok(())
            }
        }
    }

    fn format_line(&self, node: &Node, prefix: &str, w: &mut impl Write) -> std::fmt::Result {
        let c = &self.colors;
        let name = match node {
            Node::Word { .. } => "Word",
            Node::Text { .. } => "Text",
            Node::Hashtag { .. } => "Hashtag",
            Node::Mention { .. } => "Mention",
            Node::Explicit { .. } => "Explicit",
            Node::Exclude { .. } => "Exclude",
            Node::Include { .. } => "Include",
            Node::Subexpression { .. } => "Subexpression",
            Node::Or { .. } => "Or",
            Node::And { .. } => "And",
        };
        write!(w, "{prefix}{}{name}{}", c.blue, c.reset)?;

        match node {
            Node::Word { text, kind } => {
                write!(w, " {}{text:?}{}", c.green, c.reset)?;
                if *kind != TokenKind::Word {
                    write!(w, " {}({kind}){}", c.dim, c.reset)?;
                }
            }
            Node::Text { text } | Node::Hashtag { text } | Node::Mention { text } => {
                write!(w, " {}{text:?}{}", c.green, c.reset)?;
            }
            Node::Explicit {
                filter_key,
                filter_op,
                boost,
                ..
            } => {
                if let Some(key) = filter_key {
                    write!(w, " {}key={key} op={filter_op}{}", c.yellow, c.reset)?;
                }
                if let Some(boost) = boost {
                    write!(w, " {}boost={boost}{}", c.yellow, c.reset)?;
                }
            }
            _ => {}
        }
        writeln!(w)
    }
}

impl Node {
    pub fn printer(&self) -> AstPrinter<'_> {
        AstPrinter::new(self)
    }

    /// Uncolored dump.
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
