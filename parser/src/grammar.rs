/// The grammar symbol every derivation is rooted at.
pub const START_SYMBOL: &str = "S";

/// The terminal carrying identifier lexemes.
pub const IDENTIFIER: &str = "ID";

/// Every terminal symbol of the WL grammar.
pub const TERMINALS: &[&str] = &[
    "BOF", "BECOMES", "COMMA", "ELSE", "EOF", "EQ", "GE", "GT", "ID", "IF", "INT", "LBRACE", "LE",
    "LPAREN", "LT", "MINUS", "NE", "NUM", "PCT", "PLUS", "PRINTLN", "RBRACE", "RETURN", "RPAREN",
    "SEMI", "SLASH", "STAR", "WAIN", "WHILE",
];

/// Returns true if `symbol` names a terminal of the WL grammar.
pub fn is_terminal(symbol: &str) -> bool {
    TERMINALS.contains(&symbol)
}

/// Productions recognized by the symbol table and code generation passes,
/// pre-split into their symbols.
pub mod rules {
    pub const START: &[&str] = &["S", "BOF", "procedure", "EOF"];
    pub const WAIN: &[&str] = &[
        "procedure",
        "INT",
        "WAIN",
        "LPAREN",
        "dcl",
        "COMMA",
        "dcl",
        "RPAREN",
        "LBRACE",
        "dcls",
        "statements",
        "RETURN",
        "expr",
        "SEMI",
        "RBRACE",
    ];
    pub const DCL: &[&str] = &["dcl", "INT", "ID"];
    pub const EXPR_TERM: &[&str] = &["expr", "term"];
    pub const TERM_FACTOR: &[&str] = &["term", "factor"];
    pub const FACTOR_ID: &[&str] = &["factor", "ID"];
}
