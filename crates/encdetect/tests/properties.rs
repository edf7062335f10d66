#![allow(missing_docs)]

use encdetect::{Detector, EncDetectError, Encoding, training::train_model};

static UTF8_SAMPLE: &str = "Так говорила в июле 1805 года известная Анна Павловна Шерер, \
фрейлина и приближенная императрицы Марии Феодоровны, встречая важного и \
чиновного князя Василия, первого приехавшего на ее вечер.";

fn win1251(text: &str) -> Vec<u8> {
    encoding_rs::WINDOWS_1251.encode(text).0.into_owned()
}

#[test]
fn scale_invariance() {
    let utf8 = UTF8_SAMPLE.as_bytes();
    let win = win1251(UTF8_SAMPLE);

    let once = Detector::train(utf8, &win).unwrap();
    let thrice = Detector::train(&utf8.repeat(3), &win.repeat(3)).unwrap();

    assert_eq!(
        once.utf8_model().unigram(),
        thrice.utf8_model().unigram()
    );

    for word in UTF8_SAMPLE.split_whitespace() {
        for text in [word.as_bytes().to_vec(), win1251(word)] {
            assert_eq!(
                once.detect(&text).unwrap(),
                thrice.detect(&text).unwrap(),
                "{word}"
            );
        }
    }

    let once = Detector::train(&b"ab".repeat(50), &b"cd".repeat(50)).unwrap();
    let many = Detector::train(&b"ab".repeat(500), &b"cd".repeat(500)).unwrap();
    for text in [&b"abab"[..], b"cdcd", b"a", b"d", b"abcd", b"cdab", b"xyz", b"abdc"] {
        assert_eq!(once.detect(text).unwrap(), many.detect(text).unwrap());
    }
}

#[test]
fn empty_input_is_rejected() {
    let detector = Detector::train(b"aaaa", b"bbbb").unwrap();

    assert!(matches!(
        detector.detect(b""),
        Err(EncDetectError::EmptyInput)
    ));
    assert!(matches!(
        detector.scores(b""),
        Err(EncDetectError::EmptyInput)
    ));
}

proptest::proptest! {
    #![proptest_config(proptest::prelude::ProptestConfig::with_cases(256))]

    /// Scores are finite and non-negative for any input, and detection is
    /// repeatable.
    #[test]
    fn scores_are_finite_and_deterministic(
        utf8_corpus in proptest::collection::vec(0..=255u8, 1..200),
        win_corpus in proptest::collection::vec(0..=255u8, 1..200),
        text in proptest::collection::vec(0..=255u8, 1..100),
    ) {
        let detector = Detector::train(&utf8_corpus, &win_corpus).unwrap();

        let scores = detector.scores(&text).unwrap();
        proptest::prop_assert!(scores.utf8.is_finite() && scores.utf8 >= 0.0);
        proptest::prop_assert!(scores.win1251.is_finite() && scores.win1251 >= 0.0);

        let first = detector.detect(&text).unwrap();
        proptest::prop_assert_eq!(first, scores.encoding());
        proptest::prop_assert_eq!(first, detector.detect(&text).unwrap());

        let retrained = Detector::train(&utf8_corpus, &win_corpus).unwrap();
        proptest::prop_assert_eq!(first, retrained.detect(&text).unwrap());
    }

    /// Identical corpora produce identical models, so every input ties.
    #[test]
    fn identical_corpora_tie_to_windows_1251(
        corpus in proptest::collection::vec(0..=255u8, 1..200),
        text in proptest::collection::vec(0..=255u8, 1..100),
    ) {
        let detector = Detector::train(&corpus, &corpus).unwrap();
        proptest::prop_assert_eq!(detector.detect(&text).unwrap(), Encoding::Windows1251);
    }

    /// A single byte only contributes its unigram term.
    #[test]
    fn single_byte_input(
        corpus in proptest::collection::vec(0..=255u8, 1..200),
        byte in 0..=255u8,
    ) {
        let model = train_model(Encoding::Utf8, &corpus).unwrap();

        let p = model.unigram().get(byte);
        let expected = if p > 1e-12 { -p.ln() } else { 0.0 };
        proptest::prop_assert_eq!(model.score(&[byte]).unwrap(), expected);
    }

    /// Bytes absent from a corpus never move that model's score.
    #[test]
    fn unseen_bytes_score_zero(
        corpus in proptest::collection::vec(0..=127u8, 1..200),
        text in proptest::collection::vec(128..=255u8, 1..100),
    ) {
        let model = train_model(Encoding::Windows1251, &corpus).unwrap();
        proptest::prop_assert_eq!(model.score(&text).unwrap(), 0.0);
    }
}
