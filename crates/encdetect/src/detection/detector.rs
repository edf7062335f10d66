//! # Two-Model Detector

use crate::{
    EDResult,
    corpus::{CorpusPaths, read_corpus},
    encoding::Encoding,
    model::EncodingModel,
    training::train,
};

/// The raw log-likelihood scores of one input under both models.
///
/// These are accumulated ``-ln(p)`` sums, not calibrated probabilities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    /// The score under the UTF-8 model.
    pub utf8: f64,

    /// The score under the Windows-1251 model.
    pub win1251: f64,
}

impl Scores {
    /// Pick the encoding these scores select.
    ///
    /// UTF-8 wins only on a strictly greater score; ties go to Windows-1251.
    pub fn encoding(&self) -> Encoding {
        if self.utf8 > self.win1251 {
            Encoding::Utf8
        } else {
            Encoding::Windows1251
        }
    }
}

/// Compute both [`Scores`] for ``text``.
pub fn score_both(
    model_utf8: &EncodingModel,
    model_win1251: &EncodingModel,
    text: &[u8],
) -> EDResult<Scores> {
    let scores = Scores {
        utf8: model_utf8.score(text)?,
        win1251: model_win1251.score(text)?,
    };
    log::debug!(
        "scores over {} bytes: utf8 = {}, win1251 = {}",
        text.len(),
        scores.utf8,
        scores.win1251
    );
    Ok(scores)
}

/// Classify ``text`` as UTF-8 or Windows-1251.
///
/// ## Arguments
/// * `model_utf8` - the model trained on the UTF-8 corpus.
/// * `model_win1251` - the model trained on the Windows-1251 corpus.
/// * `text` - the bytes to classify.
///
/// ## Returns
/// The selected encoding, or [`crate::EncDetectError::EmptyInput`]
/// for an empty ``text``.
pub fn detect(
    model_utf8: &EncodingModel,
    model_win1251: &EncodingModel,
    text: &[u8],
) -> EDResult<Encoding> {
    Ok(score_both(model_utf8, model_win1251, text)?.encoding())
}

/// Owns the UTF-8 and Windows-1251 models for repeated detection.
#[derive(Debug, Clone)]
pub struct Detector {
    utf8: EncodingModel,
    win1251: EncodingModel,
}

impl Detector {
    /// Build a detector from trained models.
    ///
    /// ## Panics
    /// If the models are not for [`Encoding::Utf8`] and
    /// [`Encoding::Windows1251`] respectively.
    pub fn new(
        utf8: EncodingModel,
        win1251: EncodingModel,
    ) -> Self {
        assert_eq!(utf8.encoding(), Encoding::Utf8);
        assert_eq!(win1251.encoding(), Encoding::Windows1251);
        Self { utf8, win1251 }
    }

    /// Train a detector from in-memory reference corpora.
    pub fn train(
        utf8_corpus: &[u8],
        win1251_corpus: &[u8],
    ) -> EDResult<Self> {
        let (utf8, win1251) = train(utf8_corpus, win1251_corpus)?;
        Ok(Self::new(utf8, win1251))
    }

    /// Load both reference corpora from disk and train a detector.
    pub fn from_corpus_paths(paths: &CorpusPaths) -> EDResult<Self> {
        let utf8_corpus = read_corpus(&paths.utf8)?;
        let win1251_corpus = read_corpus(&paths.win1251)?;
        Self::train(&utf8_corpus, &win1251_corpus)
    }

    /// The UTF-8 model.
    pub fn utf8_model(&self) -> &EncodingModel {
        &self.utf8
    }

    /// The Windows-1251 model.
    pub fn win1251_model(&self) -> &EncodingModel {
        &self.win1251
    }

    /// Compute both [`Scores`] for ``text``.
    pub fn scores(
        &self,
        text: &[u8],
    ) -> EDResult<Scores> {
        score_both(&self.utf8, &self.win1251, text)
    }

    /// Classify ``text``; see [`detect`].
    pub fn detect(
        &self,
        text: &[u8],
    ) -> EDResult<Encoding> {
        detect(&self.utf8, &self.win1251, text)
    }
}
