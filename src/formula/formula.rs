use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    #[error("a formula needs at least one proposition")]
    NoPropositions,
    #[error("a formula needs at least one sentence")]
    NoSentences,
    #[error("every sentence must contain at least two literals, got width {0}")]
    WidthTooSmall(usize),
    #[error("literal table length {len} is not a multiple of the sentence width {width}")]
    RaggedTable { len: usize, width: usize },
    #[error(
        "wrong value {value} for the #{pos} literal of the #{sentence} sentence; \
         expected a nonzero integer with magnitude at most {num_vars}"
    )]
    LiteralOutOfRange {
        sentence: usize,
        pos: usize,
        value: i64,
        num_vars: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }

    /// 0-based slot of this literal's variable in an assignment vector.
    pub fn index(self) -> usize {
        self.var as usize - 1
    }
}

/// Immutable clause table: `num_clauses` rows of exactly `width` literals,
/// stored row-major. Variables are numbered 1..=`num_vars`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    num_vars: u32,
    width: usize,
    lits: Vec<Lit>,
}

impl Formula {
    /// Builds a formula from raw signed literals in row-major order.
    /// A positive value asserts the variable, a negative value its negation.
    pub fn new(num_vars: u32, width: usize, values: &[i64]) -> Result<Self, FormulaError> {
        if num_vars < 1 {
            return Err(FormulaError::NoPropositions);
        }
        if width < 2 {
            return Err(FormulaError::WidthTooSmall(width));
        }
        if values.is_empty() {
            return Err(FormulaError::NoSentences);
        }
        if values.len() % width != 0 {
            return Err(FormulaError::RaggedTable {
                len: values.len(),
                width,
            });
        }

        let mut lits = Vec::with_capacity(values.len());
        for (i, &value) in values.iter().enumerate() {
            if value == 0 || value.unsigned_abs() > u64::from(num_vars) {
                return Err(FormulaError::LiteralOutOfRange {
                    sentence: i / width + 1,
                    pos: i % width + 1,
                    value,
                    num_vars,
                });
            }
            lits.push(Lit::new(value.unsigned_abs() as u32, value > 0));
        }

        Ok(Self {
            num_vars,
            width,
            lits,
        })
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    pub fn num_clauses(&self) -> usize {
        self.lits.len() / self.width
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn clause(&self, index: usize) -> &[Lit] {
        &self.lits[index * self.width..(index + 1) * self.width]
    }

    pub fn clauses(&self) -> std::slice::ChunksExact<'_, Lit> {
        self.lits.chunks_exact(self.width)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clause in self.clauses() {
            for (j, lit) in clause.iter().enumerate() {
                if j > 0 {
                    f.write_str(" or ")?;
                }
                if lit.sign {
                    write!(f, "P{}", lit.var)?;
                } else {
                    write!(f, "not P{}", lit.var)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
