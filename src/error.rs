//! Error type shared by every stage of the scoring pipeline.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which of the two inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    Hypothesis,
    Reference,
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hypothesis => write!(f, "hypothesis"),
            Self::Reference => write!(f, "reference"),
        }
    }
}

/// Errors that abort a BLEU computation.
#[derive(Debug)]
pub enum BleuError {
    /// An input file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The n-gram order is not a positive integer.
    InvalidOrder(String),
    /// One of the token sequences is shorter than the requested order, so it
    /// has no n-grams of that order.
    OrderExceedsLength {
        sequence: Sequence,
        order: usize,
        length: usize,
    },
    /// The hypothesis has no tokens at all.
    EmptyHypothesis,
}

impl fmt::Display for BleuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::InvalidOrder(order) => {
                write!(f, "invalid n-gram order {order:?} (expected an integer >= 1)")
            }
            Self::OrderExceedsLength {
                sequence,
                order,
                length,
            } => write!(
                f,
                "undefined precision: {order}-gram order exceeds the {sequence} length ({length} tokens)"
            ),
            Self::EmptyHypothesis => {
                write!(f, "hypothesis is empty, brevity penalty is undefined")
            }
        }
    }
}

impl Error for BleuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
