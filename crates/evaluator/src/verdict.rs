use {
    core::fmt::{self, Display},
    def::{Row, Value},
};

/// Generic success message; missions usually show their own instead.
pub const SUCCESS_MESSAGE: &str = "Correct!";

/// The first discrepancy found between a player's result and the reference.
///
/// `Display` renders the message shown to the player.
#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    /// Column names differ positionally. Names are reported as written.
    ColumnSequence {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Column name sets differ. Names are reported normalized.
    ColumnSet {
        missing: Vec<String>,
        extra: Vec<String>,
    },

    RowCount {
        expected: usize,
        actual: usize,
    },

    /// Rows differ at a 1-based position.
    Row {
        number: usize,
        expected: Row,
        actual: Row,
    },

    /// A row occurs a different number of times on each side.
    RowMultiplicity {
        row: Row,
        expected: usize,
        actual: usize,
    },
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnSequence { expected, actual } => write!(
                f,
                "Column names or their order do not match. Expected: {}, found: {}",
                Names(expected),
                Names(actual)
            ),
            Self::ColumnSet { missing, extra } => {
                write!(f, "The set of column names does not match.")?;

                if !missing.is_empty() {
                    write!(f, " Missing columns in your result: {}.", Names(missing))?;
                }
                if !extra.is_empty() {
                    write!(f, " Unexpected columns in your result: {}.", Names(extra))?;
                }

                Ok(())
            }
            Self::RowCount { expected, actual } => write!(
                f,
                "The number of rows does not match. Expected: {}, found: {}",
                expected, actual
            ),
            Self::Row {
                number,
                expected,
                actual,
            } => write!(
                f,
                "Incorrect data in row {} (row order matters). Expected: {}, found: {}",
                number,
                Tuple(expected),
                Tuple(actual)
            ),
            Self::RowMultiplicity {
                row,
                expected,
                actual,
            } => write!(
                f,
                "Mismatch for data row {}. Expected it {} time(s), found it {} time(s).",
                Tuple(row),
                expected,
                actual
            ),
        }
    }
}

struct Names<'a>(&'a [String]);

impl Display for Names<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

struct Tuple<'a>(&'a [Value]);

impl Display for Tuple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Correct,
    Incorrect(Mismatch),
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Self::Correct => None,
            Self::Incorrect(mismatch) => Some(mismatch),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "{}", SUCCESS_MESSAGE),
            Self::Incorrect(mismatch) => write!(f, "{}", mismatch),
        }
    }
}

impl From<Result<(), Mismatch>> for Verdict {
    fn from(result: Result<(), Mismatch>) -> Self {
        match result {
            Ok(()) => Self::Correct,
            Err(mismatch) => Self::Incorrect(mismatch),
        }
    }
}
