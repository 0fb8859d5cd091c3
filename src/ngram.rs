use std::collections::HashMap;

/// Contiguous `n`-token windows of `tokens`, in source order.
///
/// Returns `tokens.len() - n + 1` n-grams, or none when `n` is zero or longer
/// than the sequence.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<&[String]> {
    if n == 0 || n > tokens.len() {
        return Vec::new();
    }
    tokens.windows(n).collect()
}

/// Multiset of n-grams where every occurrence can be consumed once.
#[derive(Debug, Default)]
pub struct NgramCounts<'a> {
    counts: HashMap<&'a [String], usize>,
}

impl<'a> NgramCounts<'a> {
    pub fn from_ngrams<I>(ngrams: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut counts = HashMap::new();
        for ngram in ngrams {
            *counts.entry(ngram).or_insert(0) += 1;
        }
        NgramCounts { counts }
    }

    /// Consumes one occurrence of `ngram`. Returns false if none is left.
    pub fn take(&mut self, ngram: &[String]) -> bool {
        match self.counts.get_mut(ngram) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    fn remaining(&self, ngram: &[String]) -> usize {
        self.counts.get(ngram).copied().unwrap_or(0)
    }

    /// Total occurrences not yet consumed.
    pub(crate) fn len(&self) -> usize {
        self.counts.values().sum()
    }
}
