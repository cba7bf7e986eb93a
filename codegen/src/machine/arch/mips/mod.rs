use wlgen_parser::{Node, Shape};

use crate::symbols::SymbolTable;
use crate::{CompilationStage, PassErr};

mod register;
pub use register::GeneralPurpose;

/// Number of symbol table entries identifiers are resolved against, one per
/// parameter register.
const PARAMETER_SLOTS: usize = 2;

/// Mips represents the MIPS machine target.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mips;

impl<'a> CompilationStage<(&'a Node, &'a SymbolTable), Vec<String>, PassErr> for Mips {
    fn apply(
        &mut self,
        (tree, symbols): (&'a Node, &'a SymbolTable),
    ) -> Result<Vec<String>, PassErr> {
        let insts = codegen_node(tree, symbols)?;
        tracing::debug!(instructions = insts.len(), "generated mips instructions");

        Ok(insts)
    }
}

/// Generates the newline-terminated instruction listing for the tree rooted
/// at `tree`.
pub fn generate_code(tree: &Node, symbols: &SymbolTable) -> Result<String, PassErr> {
    Mips.apply((tree, symbols)).map(|insts| insts.concat())
}

fn codegen_node(node: &Node, symbols: &SymbolTable) -> Result<Vec<String>, PassErr> {
    match Shape::of(node) {
        Shape::Start { procedure } => codegen_node(procedure, symbols).map(|insts| {
            insts
                .into_iter()
                .chain(codegen_return(GeneralPurpose::ReturnAddress))
                .collect()
        }),
        Shape::Wain { ret, .. } => codegen_node(ret, symbols),
        Shape::ExprTerm(inner) | Shape::TermFactor(inner) | Shape::FactorId(inner) => {
            codegen_node(inner, symbols)
        }
        Shape::Identifier(identifier) => codegen_load_identifier(symbols, identifier),
        Shape::Dcl { .. } | Shape::Unsupported => {
            Err(PassErr::UnrecognizedRule(node.production().clone()))
        }
    }
}

/// Copies the parameter register backing `identifier` into the result
/// register. Only the first two symbols are consulted and a match in the
/// second slot takes precedence over the first.
fn codegen_load_identifier(
    symbols: &SymbolTable,
    identifier: &str,
) -> Result<Vec<String>, PassErr> {
    (0..PARAMETER_SLOTS)
        .rev()
        .find(|&position| symbols.get(position) == Some(identifier))
        .and_then(GeneralPurpose::parameter)
        .map(|param| codegen_copy(GeneralPurpose::Result, param))
        .ok_or_else(|| PassErr::UndefinedReference(identifier.to_string()))
}

fn codegen_copy(dest: GeneralPurpose, src: GeneralPurpose) -> Vec<String> {
    vec![format!("add {},{},{}\n", dest, GeneralPurpose::Zero, src)]
}

fn codegen_return(ret_addr: GeneralPurpose) -> Vec<String> {
    vec![format!("jr {}\n", ret_addr)]
}
