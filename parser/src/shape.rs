//! Classifies tree nodes by the catalogued production they were derived
//! with, handing out the children each production is walked through.

use crate::grammar::{self, rules};
use crate::Node;

/// Shape represents each production the compilation passes understand.
/// Anything else is `Unsupported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    /// `S BOF procedure EOF`
    Start { procedure: &'a Node },
    /// The two parameter `wain` procedure.
    Wain {
        params: [&'a Node; 2],
        ret: &'a Node,
    },
    /// `dcl INT ID`
    Dcl { id: &'a Node },
    /// `expr term`
    ExprTerm(&'a Node),
    /// `term factor`
    TermFactor(&'a Node),
    /// `factor ID`
    FactorId(&'a Node),
    /// An `ID` leaf and its lexeme.
    Identifier(&'a str),
    Unsupported,
}

impl<'a> Shape<'a> {
    pub fn of(node: &'a Node) -> Self {
        let children = node.children();

        if node.matches_rule(rules::START) {
            if let [_, procedure, _] = children {
                return Shape::Start { procedure };
            }
        } else if node.matches_rule(rules::WAIN) {
            if let [_, _, _, first, _, second, _, _, _, _, _, ret, _, _] = children {
                return Shape::Wain {
                    params: [first, second],
                    ret,
                };
            }
        } else if node.matches_rule(rules::DCL) {
            if let [_, id] = children {
                return Shape::Dcl { id };
            }
        } else if node.matches_rule(rules::EXPR_TERM) {
            if let [term] = children {
                return Shape::ExprTerm(term);
            }
        } else if node.matches_rule(rules::TERM_FACTOR) {
            if let [factor] = children {
                return Shape::TermFactor(factor);
            }
        } else if node.matches_rule(rules::FACTOR_ID) {
            if let [id] = children {
                return Shape::FactorId(id);
            }
        } else if node.lhs() == grammar::IDENTIFIER {
            if let Some(lexeme) = node.lexeme() {
                return Shape::Identifier(lexeme);
            }
        }

        Shape::Unsupported
    }
}
