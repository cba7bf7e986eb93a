//! The symbol pass walks the rebuilt parse tree and collects every declared
//! identifier, in declaration order.

use wlgen_parser::{Node, Shape};

use crate::{CompilationStage, PassErr};

/// SymbolTable holds declared identifiers in the order they were declared.
/// Code generation resolves names by their position in the table, so the
/// order is significant and duplicates are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.symbols.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Appends every symbol of `other`, after this table's own.
    pub fn append_mut(&mut self, other: SymbolTable) {
        self.symbols.extend(other.symbols);
    }
}

impl From<Vec<String>> for SymbolTable {
    fn from(symbols: Vec<String>) -> Self {
        Self { symbols }
    }
}

impl<'a> From<&'a str> for SymbolTable {
    fn from(symbol: &'a str) -> Self {
        Self {
            symbols: vec![symbol.to_string()],
        }
    }
}

/// SymbolCollector is the compilation stage wrapping `collect_symbols`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolCollector;

impl<'a> CompilationStage<&'a Node, SymbolTable, PassErr> for SymbolCollector {
    fn apply(&mut self, input: &'a Node) -> Result<SymbolTable, PassErr> {
        let symbols = collect_symbols(input)?;
        tracing::debug!(symbols = ?symbols.symbols, "collected symbol table");

        Ok(symbols)
    }
}

/// Builds the table of identifiers declared in the tree rooted at `node`.
pub fn collect_symbols(node: &Node) -> Result<SymbolTable, PassErr> {
    match Shape::of(node) {
        Shape::Start { procedure } => collect_symbols(procedure),
        Shape::Wain { params, .. } => {
            params
                .into_iter()
                .try_fold(SymbolTable::new(), |mut symbols, dcl| {
                    collect_symbols(dcl).map(|declared| {
                        symbols.append_mut(declared);
                        symbols
                    })
                })
        }
        Shape::Dcl { id } => collect_symbols(id),
        Shape::Identifier(lexeme) => Ok(SymbolTable::from(lexeme)),
        Shape::ExprTerm(_) | Shape::TermFactor(_) | Shape::FactorId(_) | Shape::Unsupported => {
            Err(PassErr::UnrecognizedRule(node.production().clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wlgen_parser::Production;

    fn leaf(symbol: &str, lexeme: &str) -> Node {
        Node::terminal(Production::terminal(symbol, lexeme))
    }

    fn dcl(id: &str) -> Node {
        Node::non_terminal(
            Production::rule("dcl", &["INT", "ID"]),
            vec![leaf("INT", "int"), leaf("ID", id)],
        )
    }

    #[test]
    fn should_collect_a_single_declaration() {
        assert_eq!(Ok(SymbolTable::from("x")), collect_symbols(&dcl("x")));
    }

    #[test]
    fn should_collect_an_identifier_leaf() {
        assert_eq!(
            Ok(SymbolTable::from("wain")),
            collect_symbols(&leaf("ID", "wain"))
        );
    }

    #[test]
    fn should_append_tables_in_order() {
        let mut symbols = SymbolTable::from("b");
        symbols.append_mut(SymbolTable::from(vec!["a".to_string(), "b".to_string()]));

        assert_eq!(vec!["b", "a", "b"], symbols.iter().collect::<Vec<_>>());
        assert_eq!(Some("a"), symbols.get(1));
        assert_eq!(None, symbols.get(3));
    }

    #[test]
    fn should_reject_productions_without_declarations() {
        let expr = Node::non_terminal(
            Production::rule("expr", &["term"]),
            vec![Node::non_terminal(
                Production::rule("term", &["factor"]),
                vec![Node::non_terminal(
                    Production::rule("factor", &["ID"]),
                    vec![leaf("ID", "a")],
                )],
            )],
        );

        assert_eq!(
            Err(PassErr::UnrecognizedRule(Production::rule("expr", &["term"]))),
            collect_symbols(&expr)
        );
    }

    #[test]
    fn should_reject_an_unsupported_declaration() {
        let dcl = Node::non_terminal(
            Production::rule("dcl", &["INT", "STAR", "ID"]),
            vec![leaf("INT", "int"), leaf("STAR", "*"), leaf("ID", "p")],
        );

        assert_eq!(
            Err(PassErr::UnrecognizedRule(dcl.production().clone())),
            SymbolCollector.apply(&dcl)
        );
    }
}
