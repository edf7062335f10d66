use std::path::PathBuf;

use encdetect::{
    CorpusPaths,
    Detector,
    corpus::{DEFAULT_UTF8_CORPUS, DEFAULT_WIN1251_CORPUS},
};

/// Reference corpus arg group.
#[derive(clap::Args, Debug)]
pub struct CorpusArgs {
    /// Reference text encoded as UTF-8.
    #[arg(long, default_value = DEFAULT_UTF8_CORPUS)]
    utf8_corpus: PathBuf,

    /// Reference text encoded as Windows-1251.
    #[arg(long, default_value = DEFAULT_WIN1251_CORPUS)]
    win1251_corpus: PathBuf,
}

impl CorpusArgs {
    /// Get the corpus paths.
    pub fn paths(&self) -> CorpusPaths {
        CorpusPaths::default()
            .with_utf8(&self.utf8_corpus)
            .with_win1251(&self.win1251_corpus)
    }

    /// Read both corpora and train the detector.
    pub fn load_detector(&self) -> Result<Detector, Box<dyn std::error::Error>> {
        let paths = self.paths();
        log::info!(
            "training on {} and {}",
            paths.utf8.display(),
            paths.win1251.display()
        );
        Ok(Detector::from_corpus_paths(&paths)?)
    }
}
