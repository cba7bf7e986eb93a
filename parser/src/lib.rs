//! Replays a WL derivation trace (`.wli`) back into the parse tree it
//! describes.

pub mod grammar;
mod production;
mod reader;
pub mod shape;
mod tree;

pub use production::{Production, ProductionErr};
pub use reader::DerivationReader;
pub use shape::Shape;
pub use tree::{build_parse_tree, build_tree, Kind, Node, PreOrder};

/// TraceErr represents any failure to replay a derivation trace into a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceErr {
    #[error("unable to read derivation trace: {0}")]
    Io(String),
    #[error("derivation trace ended after {lines} lines, before the tree was complete")]
    UnexpectedEof { lines: usize },
    #[error("line {line} of the derivation trace holds no production")]
    EmptyProduction { line: usize },
    #[error("line {line} derives {found}, expected {expected}")]
    UnexpectedSymbol {
        line: usize,
        expected: String,
        found: String,
    },
    #[error("line {line} should hold a terminal and its lexeme, found: {production}")]
    MalformedTerminal { line: usize, production: Production },
}
