//! # Log-Likelihood Scoring

use crate::{
    EDResult,
    EncDetectError,
    model::EncodingModel,
    types::{EPSILON, byte_pairs},
};

/// Score ``text`` under ``model``.
///
/// The score accumulates ``-ln(p)`` terms:
/// * the first byte contributes ``-ln(unigram[b0])``;
/// * every later byte ``b_i`` contributes ``-ln(unigram[b_i]) - ln(bigram[(b_{i-1}, b_i)])``.
///
/// A term whose probabilities are not all above [`EPSILON`] contributes zero.
/// For later bytes the gate is conjunctive: both the unigram and the bigram
/// probability must clear it. The result is therefore always finite.
///
/// ## Returns
/// The score, or [`EncDetectError::EmptyInput`] for an empty ``text``.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(model, text)))]
pub fn log_likelihood_score(
    model: &EncodingModel,
    text: &[u8],
) -> EDResult<f64> {
    let Some(&first) = text.first() else {
        return Err(EncDetectError::EmptyInput);
    };

    let unigram = model.unigram();
    let bigram = model.bigram();

    let mut score = 0.0;

    let p = unigram.get(first);
    if p > EPSILON {
        score -= p.ln();
    }

    for pair in byte_pairs(text) {
        let p_sym = unigram.get(pair.1);
        let p_pair = bigram.get(pair);
        if p_sym > EPSILON && p_pair > EPSILON {
            score -= p_sym.ln() + p_pair.ln();
        }
    }

    Ok(score)
}
