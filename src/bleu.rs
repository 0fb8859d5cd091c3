use log::debug;

use crate::error::{BleuError, Sequence};
use crate::precision::{clipped_precision, Precision};

/// Highest n-gram order used when none is given.
pub const DEFAULT_MAX_ORDER: usize = 4;

const SCORE_DECIMALS: i32 = 3;

/// Result of scoring one hypothesis against one reference.
#[derive(Debug, Clone, PartialEq)]
pub struct BleuScore {
    /// BLEU rounded to three decimals.
    pub score: f64,
    pub precisions: Vec<Precision>,
    pub brevity_penalty: f64,
    pub hyp_len: usize,
    pub ref_len: usize,
    pub max_order: usize,
}

/// `min(1, e^(1 - ref_len / hyp_len))`, on token counts.
pub fn brevity_penalty(hyp_len: usize, ref_len: usize) -> Result<f64, BleuError> {
    if hyp_len == 0 {
        return Err(BleuError::EmptyHypothesis);
    }
    let ratio = ref_len as f64 / hyp_len as f64;
    Ok((1.0 - ratio).exp().min(1.0))
}

/// Sentence BLEU over orders `1..=max_order`.
///
/// The precisions are combined by an unsmoothed geometric mean, so a single
/// order without any match makes the whole score 0. Both sequences must be at
/// least `max_order` tokens long.
pub fn calc_bleu(
    hyp: &[String],
    reference: &[String],
    max_order: usize,
) -> Result<BleuScore, BleuError> {
    if max_order == 0 {
        return Err(BleuError::InvalidOrder(max_order.to_string()));
    }
    if hyp.is_empty() {
        return Err(BleuError::EmptyHypothesis);
    }
    for (sequence, tokens) in [(Sequence::Hypothesis, hyp), (Sequence::Reference, reference)] {
        if max_order > tokens.len() {
            return Err(BleuError::OrderExceedsLength {
                sequence,
                order: max_order,
                length: tokens.len(),
            });
        }
    }

    let mut precisions = Vec::with_capacity(max_order);
    let mut product = 1.0_f64;
    for n in 1..=max_order {
        let precision = clipped_precision(hyp, reference, n)?;
        debug!(
            "{}-gram precision: {}/{} = {:.4}",
            n,
            precision.matches,
            precision.total,
            precision.value()
        );
        product *= precision.value();
        precisions.push(precision);
    }
    let geometric_mean = product.powf(1.0 / max_order as f64);

    let bp = brevity_penalty(hyp.len(), reference.len())?;
    debug!(
        "geometric mean={:.4}, BP={:.4}, hyp_len={}, ref_len={}",
        geometric_mean,
        bp,
        hyp.len(),
        reference.len()
    );

    Ok(BleuScore {
        score: round_to(bp * geometric_mean, SCORE_DECIMALS),
        precisions,
        brevity_penalty: bp,
        hyp_len: hyp.len(),
        ref_len: reference.len(),
        max_order,
    })
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Renders a score for the `BLEU-score:` line: whole numbers keep one
/// decimal place, anything else uses the shortest exact form.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        format!("{}", score)
    }
}
