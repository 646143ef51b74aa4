// Error type for number inflection

use ukr_core::Tag;

/// Coarse category of an [`InflectError`].
///
/// Every strict-mode failure is the same "invalid input" condition from the
/// caller's point of view; the kind only tells them which check tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    UnparseableWord,
    UnsupportedScript,
    UnsupportedPartOfSpeech,
    AmbiguousPartOfSpeech,
    InflectionFailed,
}

/// Error type for [`Numbers::convert_to_auto`](crate::Numbers::convert_to_auto).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InflectError {
    /// A negative number other than the "last" sentinel.
    #[error("negative numbers are not supported: {0}")]
    NegativeNumber(i64),

    /// The analyzer does not know the sample word.
    #[error("cannot parse {word:?} ({tag})")]
    UnparseableWord { word: String, tag: Tag },

    /// The sample is not written in Cyrillic.
    #[error("only Ukrainian sample words are supported, got {0:?}")]
    UnsupportedScript(String),

    /// The sample is a noun denoting a quantity ("десяток").
    #[error("quantity nouns like {word:?} are not supported ({tag})")]
    UnsupportedPartOfSpeech { word: String, tag: Tag },

    /// The sample is neither an ordinal nor a cardinal numeral.
    #[error("{word:?} is neither an ordinal nor a cardinal numeral ({tag})")]
    AmbiguousPartOfSpeech { word: String, tag: Tag },

    /// The base word could not be carried into the sample's form.
    #[error("cannot inflect {base:?} into {grammemes} to match {sample:?}")]
    InflectionFailed {
        sample: String,
        base: String,
        grammemes: Tag,
    },
}

impl InflectError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeNumber(_) => ErrorKind::InvalidInput,
            Self::UnparseableWord { .. } => ErrorKind::UnparseableWord,
            Self::UnsupportedScript(_) => ErrorKind::UnsupportedScript,
            Self::UnsupportedPartOfSpeech { .. } => ErrorKind::UnsupportedPartOfSpeech,
            Self::AmbiguousPartOfSpeech { .. } => ErrorKind::AmbiguousPartOfSpeech,
            Self::InflectionFailed { .. } => ErrorKind::InflectionFailed,
        }
    }
}
