use std::io::BufRead;

use crate::grammar;
use crate::{DerivationReader, Production, TraceErr};

/// Kind distinguishes terminal leaves, whose production carries a lexeme,
/// from non-terminal nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Terminal,
    NonTerminal,
}

/// A single grammar symbol instance of a rebuilt parse tree.
///
/// A node has no children if it is a terminal or the left-hand side of an
/// epsilon production. Otherwise it holds exactly one child per right-hand
/// symbol, in right-hand order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    production: Production,
    kind: Kind,
    children: Vec<Node>,
}

impl Node {
    pub fn terminal(production: Production) -> Self {
        Self {
            production,
            kind: Kind::Terminal,
            children: vec![],
        }
    }

    pub fn non_terminal(production: Production, children: Vec<Node>) -> Self {
        debug_assert!(children.is_empty() || children.len() == production.rhs().len());

        Self {
            production,
            kind: Kind::NonTerminal,
            children,
        }
    }

    pub fn production(&self) -> &Production {
        &self.production
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The left-hand symbol of the node's production.
    pub fn lhs(&self) -> &str {
        self.production.lhs()
    }

    /// The scanned text of a terminal leaf.
    pub fn lexeme(&self) -> Option<&str> {
        match self.kind {
            Kind::Terminal => self.production.rhs().first().map(String::as_str),
            Kind::NonTerminal => None,
        }
    }

    /// The grammar symbols of the node's production, omitting the lexeme of a
    /// terminal.
    pub fn rule_symbols(&self) -> &[String] {
        match self.kind {
            Kind::Terminal => &self.production.symbols()[..1],
            Kind::NonTerminal => self.production.symbols(),
        }
    }

    /// Returns true if the node's production is exactly the whitespace
    /// separated rule `pattern`.
    pub fn matches(&self, pattern: &str) -> bool {
        let symbols = self.rule_symbols();

        pattern.split_whitespace().count() == symbols.len()
            && pattern
                .split_whitespace()
                .zip(symbols)
                .all(|(expected, symbol)| expected == symbol)
    }

    /// Returns true if the node's production is exactly `rule`.
    pub fn matches_rule(&self, rule: &[&str]) -> bool {
        let symbols = self.rule_symbols();

        rule.len() == symbols.len()
            && rule
                .iter()
                .zip(symbols)
                .all(|(&expected, symbol)| expected == symbol)
    }

    /// Total number of nodes in the tree rooted at this node.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(Node::len).sum::<usize>()
    }

    /// Visits the tree top-down, left to right. This is the order the
    /// productions appeared in the trace it was built from.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

/// Prints the tree back out as the derivation trace it was built from.
impl core::fmt::Display for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.pre_order()
            .try_for_each(|node| writeln!(f, "{}", node.production))
    }
}

/// PreOrder is a depth-first iterator over a tree's nodes.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());

        Some(next)
    }
}

/// Rebuilds the tree rooted at `expected`, consuming one trace line for the
/// node itself and one per node of each of its subtrees.
pub fn build_tree<R: BufRead>(
    reader: &mut DerivationReader<R>,
    expected: &str,
) -> Result<Node, TraceErr> {
    let production = reader.next_production()?;
    let line = reader.lines_consumed();

    if production.lhs() != expected {
        return Err(TraceErr::UnexpectedSymbol {
            line,
            expected: expected.to_string(),
            found: production.lhs().to_string(),
        });
    }

    if grammar::is_terminal(expected) {
        return if production.len() == 2 {
            Ok(Node::terminal(production))
        } else {
            Err(TraceErr::MalformedTerminal { line, production })
        };
    }

    let children = production
        .rhs()
        .iter()
        .map(|symbol| build_tree(reader, symbol))
        .collect::<Result<Vec<Node>, TraceErr>>()?;

    Ok(Node::non_terminal(production, children))
}

/// Rebuilds a whole program's parse tree, rooted at the start symbol.
pub fn build_parse_tree<R: BufRead>(reader: &mut DerivationReader<R>) -> Result<Node, TraceErr> {
    let tree = build_tree(reader, grammar::START_SYMBOL)?;
    tracing::debug!(
        nodes = tree.len(),
        lines = reader.lines_consumed(),
        "rebuilt parse tree:\n{}",
        tree
    );

    Ok(tree)
}
