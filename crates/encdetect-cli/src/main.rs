mod corpus_args;
mod logging;

use std::{io::Write, path::PathBuf};

use clap::Parser;
use corpus_args::CorpusArgs;
use logging::LogArgs;

/// Detect whether a file is UTF-8 or Windows-1251.
///
/// Without a PATH, trains on the reference corpora and exits.
#[derive(clap::Parser, Debug)]
#[command(name = "encdetect", version)]
pub struct Args {
    /// File to classify.
    path: Option<PathBuf>,

    #[clap(flatten)]
    corpus: CorpusArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl Args {
    /// Train, then classify ``path`` if one was given, writing the label to ``out``.
    pub fn run<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let detector = self.corpus.load_detector()?;

        let Some(path) = &self.path else {
            log::info!("no input file; training only");
            return Ok(());
        };

        let text = encdetect::read_corpus(path)?;
        let encoding = detector.detect(&text)?;
        writeln!(out, "{encoding}")?;

        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    let mut stdout = std::io::stdout().lock();
    args.run(&mut stdout)?;
    stdout.flush()?;

    Ok(())
}
