use std::io::BufRead;

use crate::{Production, ProductionErr, TraceErr};

/// DerivationReader owns the cursor into a derivation trace, handing out one
/// production per line. The cursor only ever moves forward.
pub struct DerivationReader<R> {
    lines: std::io::Lines<R>,
    consumed: usize,
}

impl<R: BufRead> DerivationReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            consumed: 0,
        }
    }

    /// Reads and tokenizes the next line of the trace.
    pub fn next_production(&mut self) -> Result<Production, TraceErr> {
        let line = match self.lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Err(TraceErr::Io(e.to_string())),
            None => {
                return Err(TraceErr::UnexpectedEof {
                    lines: self.consumed,
                })
            }
        };
        self.consumed += 1;
        tracing::trace!(line = self.consumed, production = %line);

        line.parse::<Production>().map_err(|e| match e {
            ProductionErr::Empty => TraceErr::EmptyProduction {
                line: self.consumed,
            },
            ProductionErr::Unparseable(reason) => TraceErr::Io(reason),
        })
    }

    /// The number of trace lines handed out so far.
    pub fn lines_consumed(&self) -> usize {
        self.consumed
    }
}
