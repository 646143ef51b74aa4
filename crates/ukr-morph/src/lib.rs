//! Morphological analysis for Ukrainian number words.
//!
//! The [`Analyzer`] trait is the seam the inflection engine talks to.
//! [`UkrainianAnalyzer`] implements it over a built-in [`Lexicon`] of
//! cardinals, ordinals and the words that collide with them.

pub mod lexicon;
pub mod paradigm;
mod ukrainian;

use std::collections::BTreeSet;

use ukr_core::Parse;

pub use lexicon::Lexicon;
pub use ukrainian::UkrainianAnalyzer;

/// Trait for morphological analyzers.
pub trait Analyzer {
    /// Analyze a word and return every candidate parse, best guess first.
    ///
    /// Never returns an empty list: words the analyzer cannot identify come
    /// back as a single `UNKN` parse.
    fn parse(&self, word: &str) -> Vec<Parse>;

    /// Produce the form of `parse`'s lexeme that carries all of `grammemes`.
    ///
    /// Returns `None` when the lexeme has no such form or the parse is not
    /// backed by a lexeme at all.
    fn inflect(&self, parse: &Parse, grammemes: &BTreeSet<String>) -> Option<Parse>;
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    fn parse(&self, word: &str) -> Vec<Parse> {
        (**self).parse(word)
    }

    fn inflect(&self, parse: &Parse, grammemes: &BTreeSet<String>) -> Option<Parse> {
        (**self).inflect(parse, grammemes)
    }
}
