pub mod bleu;
pub mod error;
pub mod ngram;
pub mod precision;
pub mod tokenize;

use std::fs;
use std::path::Path;

use log::info;

pub use bleu::{brevity_penalty, calc_bleu, format_score, BleuScore, DEFAULT_MAX_ORDER};
pub use error::{BleuError, Sequence};
pub use ngram::{ngrams, NgramCounts};
pub use precision::{clipped_precision, Precision};
pub use tokenize::{Tokenizer, TreebankTokenizer, WhitespaceTokenizer};

/// Parses a maximum n-gram order given on the command line.
pub fn parse_order(arg: &str) -> Result<usize, BleuError> {
    match arg.trim().parse::<usize>() {
        Ok(order) if order >= 1 => Ok(order),
        _ => Err(BleuError::InvalidOrder(arg.to_string())),
    }
}

/// Reads a whole file and tokenises it.
pub fn read_tokens(path: &Path, tokenizer: &dyn Tokenizer) -> Result<Vec<String>, BleuError> {
    let text = fs::read_to_string(path).map_err(|source| BleuError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tokens = tokenizer.tokenize(&text);
    info!("{}: {} tokens", path.display(), tokens.len());
    Ok(tokens)
}

/// Scores the hypothesis file against the reference file.
pub fn score_files(
    hypothesis: &Path,
    reference: &Path,
    max_order: usize,
    tokenizer: &dyn Tokenizer,
) -> Result<BleuScore, BleuError> {
    let hyp = read_tokens(hypothesis, tokenizer)?;
    let reference = read_tokens(reference, tokenizer)?;
    calc_bleu(&hyp, &reference, max_order)
}
