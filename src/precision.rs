use log::debug;

use crate::error::{BleuError, Sequence};
use crate::ngram::{ngrams, NgramCounts};

/// Clipped n-gram precision for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub order: usize,
    pub matches: usize,
    pub total: usize,
}

impl Precision {
    pub fn value(&self) -> f64 {
        self.matches as f64 / self.total as f64
    }
}

/// Counts hypothesis `n`-grams found in the reference. Each reference n-gram
/// occurrence can satisfy at most one hypothesis n-gram.
pub fn clipped_precision(
    hyp: &[String],
    reference: &[String],
    n: usize,
) -> Result<Precision, BleuError> {
    if n == 0 {
        return Err(BleuError::InvalidOrder(n.to_string()));
    }
    let hyp_ngrams = ngrams(hyp, n);
    if hyp_ngrams.is_empty() {
        return Err(BleuError::OrderExceedsLength {
            sequence: Sequence::Hypothesis,
            order: n,
            length: hyp.len(),
        });
    }
    let ref_ngrams = ngrams(reference, n);
    if ref_ngrams.is_empty() {
        return Err(BleuError::OrderExceedsLength {
            sequence: Sequence::Reference,
            order: n,
            length: reference.len(),
        });
    }

    let mut remaining = NgramCounts::from_ngrams(ref_ngrams);
    let matches = hyp_ngrams
        .iter()
        .filter(|ngram| remaining.take(ngram))
        .count();
    debug!(
        "{}-gram: {} reference occurrences left unmatched",
        n,
        remaining.len()
    );

    Ok(Precision {
        order: n,
        matches,
        total: hyp_ngrams.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn repeated_unigrams_are_clipped() {
        let p = clipped_precision(&toks(&["a", "a", "a"]), &toks(&["a", "a"]), 1).unwrap();
        assert_eq!((p.matches, p.total), (2, 3));
        assert!((p.value() - 0.667).abs() < 1e-3);
    }

    #[test]
    fn identical_sequences_are_fully_precise() {
        let tokens = toks(&["the", "cat", "sat", "on", "the", "mat"]);
        for n in 1..=tokens.len() {
            let p = clipped_precision(&tokens, &tokens, n).unwrap();
            assert_eq!(p.value(), 1.0);
        }
    }

    #[test]
    fn bigram_matching_is_exact() {
        let hyp = toks(&["the", "cat", "sat"]);
        let reference = toks(&["the", "cat", "ran"]);
        let p = clipped_precision(&hyp, &reference, 2).unwrap();
        assert_eq!((p.matches, p.total), (1, 2));
        let p = clipped_precision(&hyp, &toks(&["The", "Cat", "sat"]), 1).unwrap();
        assert_eq!(p.matches, 1);
    }

    #[test]
    fn disjoint_sequences_have_zero_precision() {
        let p = clipped_precision(&toks(&["x", "y"]), &toks(&["a", "b"]), 1).unwrap();
        assert_eq!(p.value(), 0.0);
    }

    #[test]
    fn short_hypothesis_is_rejected() {
        let err = clipped_precision(&toks(&["a", "b"]), &toks(&["a", "b", "c"]), 3).unwrap_err();
        match err {
            BleuError::OrderExceedsLength {
                sequence,
                order,
                length,
            } => {
                assert_eq!(sequence, Sequence::Hypothesis);
                assert_eq!(order, 3);
                assert_eq!(length, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_reference_is_rejected() {
        let err = clipped_precision(&toks(&["a", "b", "c"]), &toks(&["a"]), 2).unwrap_err();
        assert!(matches!(
            err,
            BleuError::OrderExceedsLength {
                sequence: Sequence::Reference,
                order: 2,
                length: 1,
            }
        ));
    }

    #[test]
    fn zero_order_is_rejected() {
        let tokens = toks(&["a"]);
        assert!(matches!(
            clipped_precision(&tokens, &tokens, 0),
            Err(BleuError::InvalidOrder(_))
        ));
    }

    #[test]
    fn precision_stays_in_unit_interval() {
        let vocab = ["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..300 {
            let draw = |rng: &mut StdRng| -> Vec<String> {
                let len = rng.gen_range(3..12);
                (0..len)
                    .map(|_| vocab.choose(&mut *rng).unwrap().to_string())
                    .collect()
            };
            let hyp = draw(&mut rng);
            let reference = draw(&mut rng);
            let n = rng.gen_range(1..=3);
            let p = clipped_precision(&hyp, &reference, n).unwrap();
            assert!(p.matches <= p.total);
            assert!((0.0..=1.0).contains(&p.value()));
        }
    }
}
