pub mod machine;
pub mod register;
pub mod symbols;

pub use symbols::{collect_symbols, SymbolCollector, SymbolTable};

use wlgen_parser::Production;

/// PassErr represents an error stemming from either the symbol or the code
/// generation pass, capturing any point of breakdown while walking the tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PassErr {
    #[error("unrecognized rule {0}")]
    UnrecognizedRule(Production),
    #[error("undefined reference: {0}")]
    UndefinedReference(String),
}

/// CompilationStage represents a single pass over the parse tree, taking an
/// input and output type for the pass.
pub trait CompilationStage<I, O, E> {
    fn apply(&mut self, input: I) -> Result<O, E>;
}
