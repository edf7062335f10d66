//! # Target Encodings

/// The closed set of encodings the detector can report.
///
/// The [`core::fmt::Display`] form is the label printed by the CLI.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr
)]
pub enum Encoding {
    /// UTF-8.
    #[strum(serialize = "UTF-8")]
    Utf8,

    /// Windows-1251 (Cyrillic).
    #[strum(serialize = "Windows 1251")]
    Windows1251,
}

impl Encoding {
    /// The printable label of this encoding.
    pub fn label(self) -> &'static str {
        self.into()
    }
}
