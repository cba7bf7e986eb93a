use parcel::parsers::character::*;
use parcel::prelude::v1::*;

/// ProductionErr represents a trace line that could not be read as a
/// production.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductionErr {
    #[error("a production requires at least one symbol")]
    Empty,
    #[error("unable to tokenize production: {0}")]
    Unparseable(String),
}

/// A single rule application. Element 0 is the left-hand symbol, the
/// remainder is either the right-hand side of a rule or, for terminals, the
/// scanned lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    symbols: Vec<String>,
}

impl Production {
    pub fn new(symbols: Vec<String>) -> Result<Self, ProductionErr> {
        if symbols.is_empty() {
            Err(ProductionErr::Empty)
        } else {
            Ok(Self { symbols })
        }
    }

    /// Builds a non-terminal production from a left-hand symbol and its
    /// right-hand side.
    pub fn rule<S: AsRef<str>>(lhs: &str, rhs: &[S]) -> Self {
        let symbols = core::iter::once(lhs)
            .chain(rhs.iter().map(|symbol| symbol.as_ref()))
            .map(str::to_string)
            .collect();

        Self { symbols }
    }

    /// Builds the production of a terminal leaf.
    pub fn terminal(symbol: &str, lexeme: &str) -> Self {
        Self {
            symbols: vec![symbol.to_string(), lexeme.to_string()],
        }
    }

    pub fn lhs(&self) -> &str {
        // safe to index, a production is never empty.
        &self.symbols[0]
    }

    pub fn rhs(&self) -> &[String] {
        &self.symbols[1..]
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true when the production derives nothing.
    pub fn is_epsilon(&self) -> bool {
        self.symbols.len() == 1
    }
}

impl core::fmt::Display for Production {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.symbols.join(" "))
    }
}

impl core::str::FromStr for Production {
    type Err = ProductionErr;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let input: Vec<(usize, char)> = line.chars().enumerate().collect();

        match production_symbols().parse(&input[..]) {
            Ok(MatchStatus::Match {
                span: _,
                remainder,
                inner,
            }) if remainder.is_empty() => Self::new(inner),
            Ok(MatchStatus::Match { remainder, .. }) => Err(ProductionErr::Unparseable(
                remainder.iter().map(|&(_, c)| c).collect(),
            )),
            Ok(MatchStatus::NoMatch(_)) => Err(ProductionErr::Empty),
            Err(e) => Err(ProductionErr::Unparseable(e)),
        }
    }
}

fn production_symbols<'a>() -> impl Parser<'a, &'a [(usize, char)], Vec<String>> {
    parcel::right(parcel::join(
        parcel::zero_or_more(whitespace()),
        parcel::one_or_more(parcel::left(parcel::join(
            symbol(),
            parcel::zero_or_more(whitespace()),
        ))),
    ))
}

fn symbol<'a>() -> impl Parser<'a, &'a [(usize, char)], String> {
    parcel::one_or_more(any_character().predicate(|c| !c.is_whitespace()))
        .map(|chars| chars.into_iter().collect::<String>())
}

fn whitespace<'a>() -> impl Parser<'a, &'a [(usize, char)], char> {
    any_character().predicate(|c| c.is_whitespace())
}
