//! # Corpus Trainer

use crate::{
    EDResult,
    EncDetectError,
    encoding::Encoding,
    model::{ByteCountTable, BytePairCountTable, EncodingModel},
};

/// Train the model for one encoding from its reference corpus.
///
/// ## Arguments
/// * `encoding` - the encoding ``corpus`` is written in.
/// * `corpus` - the reference bytes.
///
/// ## Returns
/// The trained model, or [`EncDetectError::EmptyCorpus`] for an empty corpus.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(corpus)))]
pub fn train_model(
    encoding: Encoding,
    corpus: &[u8],
) -> EDResult<EncodingModel> {
    if corpus.is_empty() {
        return Err(EncDetectError::EmptyCorpus { encoding });
    }

    let byte_counts = ByteCountTable::<u64>::from_bytes(corpus);
    let pair_counts = BytePairCountTable::<u64>::from_bytes(corpus);

    log::debug!(
        "{encoding}: {} symbols, {} distinct bytes, {} distinct pairs",
        byte_counts.total(),
        byte_counts.counts().iter().filter(|&&c| c > 0).count(),
        pair_counts.iter_nonzero().count(),
    );

    Ok(EncodingModel::from_counts(
        encoding,
        &byte_counts,
        &pair_counts,
    ))
}

/// Train the UTF-8 and Windows-1251 models.
///
/// ## Arguments
/// * `utf8_corpus` - reference text genuinely encoded as UTF-8.
/// * `win1251_corpus` - reference text genuinely encoded as Windows-1251.
///
/// ## Returns
/// ``(utf8_model, win1251_model)``; or [`EncDetectError::EmptyCorpus`]
/// if either corpus is empty.
pub fn train(
    utf8_corpus: &[u8],
    win1251_corpus: &[u8],
) -> EDResult<(EncodingModel, EncodingModel)> {
    let (utf8, win1251) = train_pair(utf8_corpus, win1251_corpus);
    Ok((utf8?, win1251?))
}

#[cfg(feature = "rayon")]
fn train_pair(
    utf8_corpus: &[u8],
    win1251_corpus: &[u8],
) -> (EDResult<EncodingModel>, EDResult<EncodingModel>) {
    rayon::join(
        || train_model(Encoding::Utf8, utf8_corpus),
        || train_model(Encoding::Windows1251, win1251_corpus),
    )
}

#[cfg(not(feature = "rayon"))]
fn train_pair(
    utf8_corpus: &[u8],
    win1251_corpus: &[u8],
) -> (EDResult<EncodingModel>, EDResult<EncodingModel>) {
    (
        train_model(Encoding::Utf8, utf8_corpus),
        train_model(Encoding::Windows1251, win1251_corpus),
    )
}
