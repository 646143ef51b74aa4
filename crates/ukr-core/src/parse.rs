// Morphological parse result type

use crate::tag::Tag;

/// Position of a parse inside an analyzer's lexicon.
///
/// Opaque to everything but the analyzer that produced it; used to find the
/// other forms of the same lexeme when inflecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LexemeRef {
    pub lexeme: u32,
    pub form: u16,
}

/// One candidate interpretation of a word.
///
/// Parses are immutable values. Anything that needs a different tag builds a
/// new parse with [`Parse::with_tag`].
#[derive(Debug, Clone, PartialEq)]
pub struct Parse {
    /// The surface form exactly as analysed (lowercased, normalised).
    pub word: String,
    pub tag: Tag,
    /// Dictionary form of the lexeme.
    pub normal_form: String,
    /// Analyzer confidence. Only used for ordering candidates.
    pub score: f32,
    /// `None` for synthetic parses (digits, foreign script, unknown words)
    /// which cannot be inflected.
    pub lexeme: Option<LexemeRef>,
}

impl Parse {
    pub fn new(
        word: impl Into<String>,
        tag: Tag,
        normal_form: impl Into<String>,
        score: f32,
        lexeme: Option<LexemeRef>,
    ) -> Self {
        Self {
            word: word.into(),
            tag,
            normal_form: normal_form.into(),
            score,
            lexeme,
        }
    }

    /// A parse with no lexicon backing: the word is its own normal form.
    pub fn synthetic(word: impl Into<String>, tag: Tag) -> Self {
        let word = word.into();
        Self {
            normal_form: word.clone(),
            word,
            tag,
            score: 1.0,
            lexeme: None,
        }
    }

    /// A copy of this parse carrying a different tag.
    pub fn with_tag(&self, tag: Tag) -> Parse {
        Parse {
            tag,
            ..self.clone()
        }
    }

    pub fn pos(&self) -> Option<&str> {
        self.tag.pos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{ADJF, LATN, SING};

    #[test]
    fn synthetic_uses_word_as_normal_form() {
        let p = Parse::synthetic("whatever", Tag::new([LATN]));
        assert_eq!(p.normal_form, "whatever");
        assert_eq!(p.lexeme, None);
        assert_eq!(p.pos(), Some(LATN));
    }

    #[test]
    fn with_tag_is_independent() {
        let p = Parse::new(
            "перший",
            "ADJF,compb masc,nomn".parse().unwrap(),
            "перший",
            1.0,
            Some(LexemeRef { lexeme: 3, form: 0 }),
        );
        let q = p.with_tag(p.tag.with(SING));
        assert!(q.tag.contains(SING));
        assert!(!p.tag.contains(SING));
        assert_eq!(q.word, p.word);
        assert_eq!(q.lexeme, p.lexeme);
        assert_eq!(q.pos(), Some(ADJF));
    }
}
