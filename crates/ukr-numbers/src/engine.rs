// The inflection engine

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, warn};
use ukr_core::tag::{ADJF, GENT, LATN, NOMN, NOUN, NUMB, NUMR, PLUR, SING, UNKN};
use ukr_core::Parse;
use ukr_morph::lexicon::LAST;
use ukr_morph::{Analyzer, UkrainianAnalyzer};
use ukr_num2words::{NumberSpeller, UkrainianSpeller, plural_class};

use crate::disambiguate::{
    POS_BLACKLIST, POS_WHITELIST, add_singular, filter_by_grammemes, inflect_sequentially,
    remove_bad_grammemes,
};
use crate::error::InflectError;
use crate::metadata::NumberMetadata;
use crate::options::NumbersOptions;

/// Callback invoked when a base word cannot be inflected and the engine
/// falls back to digits.
pub type DiagnosticHook = Box<dyn Fn(&InflectError) + Send + Sync>;

/// Converts numbers into Ukrainian words agreeing with a sample word.
///
/// The engine holds only immutable configuration and its two collaborators,
/// so one instance can serve concurrent callers whenever `A` and `S` are
/// `Sync`.
///
/// ```
/// use ukr_numbers::{Numbers, NumbersOptions};
///
/// let numbers = Numbers::new(NumbersOptions::default());
/// assert_eq!(
///     numbers.convert_to_auto(3, "тридцятому", None).unwrap().as_deref(),
///     Some("третьому"),
/// );
/// ```
pub struct Numbers<A = UkrainianAnalyzer, S = UkrainianSpeller> {
    analyzer: A,
    speller: S,
    options: NumbersOptions,
    diagnostic: DiagnosticHook,
}

impl Numbers {
    /// Engine over the built-in analyzer and speller.
    pub fn new(options: NumbersOptions) -> Self {
        Self::with_parts(UkrainianAnalyzer::new(), UkrainianSpeller, options)
    }
}

impl Default for Numbers {
    fn default() -> Self {
        Self::new(NumbersOptions::default())
    }
}

impl<A: Analyzer, S: NumberSpeller> Numbers<A, S> {
    /// Engine over the given analyzer and speller.
    pub fn with_parts(analyzer: A, speller: S, options: NumbersOptions) -> Self {
        Self {
            analyzer,
            speller,
            options,
            diagnostic: Box::new(|_| {}),
        }
    }

    /// The options the engine was built with.
    pub fn options(&self) -> NumbersOptions {
        self.options
    }

    /// The analyzer used for samples and base words.
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Replace the callback run on the digit fallback path.
    pub fn set_diagnostic_hook(&mut self, hook: DiagnosticHook) {
        self.diagnostic = hook;
    }

    /// Cardinal wording of `n` in its default form.
    pub fn to_number(&self, n: u64) -> String {
        self.speller.cardinal(n)
    }

    /// Ordinal wording of `n` in its default form.
    pub fn to_ordinal(&self, n: u64) -> String {
        self.speller.ordinal(n)
    }

    /// Render `n` as a word in the same grammatical form as `sample`.
    ///
    /// An ordinal sample yields an ordinal, a cardinal sample a cardinal, a
    /// sample written in digits yields the digits of `n`. `known` narrows
    /// down ambiguous samples: the parse sharing the most of these grammemes
    /// is used.
    ///
    /// Returns `Ok(None)` only for `-1` with a cardinal sample when
    /// [`NumbersOptions::negative_one_is_last`] is set. Unusable samples are
    /// errors unless [`NumbersOptions::graceful_failure`] is set, in which
    /// case they yield the digits of `n`. Negative numbers other than the
    /// `-1` sentinel are always an error.
    pub fn convert_to_auto(
        &self,
        n: i64,
        sample: impl fmt::Display,
        known: Option<&[&str]>,
    ) -> Result<Option<String>, InflectError> {
        let is_last = n == -1 && self.options.negative_one_is_last;
        if n < 0 && !is_last {
            return Err(InflectError::NegativeNumber(n));
        }

        let sample = sample.to_string();
        let known: Option<BTreeSet<String>> =
            known.map(|grammemes| grammemes.iter().map(|g| g.to_string()).collect());

        let parses = self.analyzer.parse(&sample);
        let Some(chosen) = self.choose(&parses, known.as_ref()) else {
            let tag = parses.first().map(|p| p.tag.clone()).unwrap_or_default();
            let error = InflectError::AmbiguousPartOfSpeech { word: sample, tag };
            return self.fail_or_log(n, error);
        };
        debug!(sample = %sample, tag = %chosen.tag, "chose sample parse");

        let tag = &chosen.tag;
        let base_phrase = if tag.contains(UNKN) {
            return self.fail_or_log(
                n,
                InflectError::UnparseableWord {
                    word: sample,
                    tag: tag.clone(),
                },
            );
        } else if tag.contains(LATN) {
            return self.fail_or_log(n, InflectError::UnsupportedScript(sample));
        } else if tag.contains(NOUN) {
            return self.fail_or_log(
                n,
                InflectError::UnsupportedPartOfSpeech {
                    word: sample,
                    tag: tag.clone(),
                },
            );
        } else if tag.contains(NUMB) {
            return Ok(Some(n.to_string()));
        } else if tag.contains(ADJF) {
            if is_last {
                LAST.to_string()
            } else {
                self.speller.ordinal(n.unsigned_abs())
            }
        } else if tag.contains(NUMR) {
            if is_last {
                return Ok(None);
            }
            self.speller.cardinal(n.unsigned_abs())
        } else {
            return self.fail_or_log(
                n,
                InflectError::AmbiguousPartOfSpeech {
                    word: sample,
                    tag: tag.clone(),
                },
            );
        };

        let mut meta = NumberMetadata::from_number(if is_last { None } else { Some(n) });
        meta.set_complete_base_form(&base_phrase);
        let base_word = meta.base_form().unwrap_or(base_phrase.as_str());
        if meta.beginning_of_number().is_some() && tag.contains(NUMR) {
            debug!(
                n,
                phrase = %base_phrase,
                "compound cardinal agreement is not supported, inflecting the last word only"
            );
        }

        let grammemes = remove_bad_grammemes(tag);
        let base_parses = self.analyzer.parse(base_word);
        let inflected = self
            .choose(&base_parses, None)
            .filter(|base| base.lexeme.is_some())
            .map(|base| inflect_sequentially(&self.analyzer, &base, grammemes.iter()));

        match inflected {
            Some(parse) => Ok(Some(meta.with_last_word(&parse.word))),
            None => {
                let error = InflectError::InflectionFailed {
                    sample,
                    base: base_word.to_string(),
                    grammemes,
                };
                warn!(n, error = %error, "falling back to digits");
                (self.diagnostic)(&error);
                Ok(Some(n.to_string()))
            }
        }
    }

    /// Inflect a noun parse into the number and case that a count of `n`
    /// governs: nominative singular after 1, nominative plural after 2-4,
    /// genitive plural otherwise (including 11-14).
    pub fn make_agree_with_number(&self, parse: &Parse, n: u64) -> Parse {
        let grammemes = match plural_class(n) {
            0 => [SING, NOMN],
            1 => [PLUR, NOMN],
            _ => [PLUR, GENT],
        };
        inflect_sequentially(&self.analyzer, parse, grammemes)
    }

    /// Disambiguate, then make the grammatical number explicit.
    fn choose(&self, parses: &[Parse], known: Option<&BTreeSet<String>>) -> Option<Parse> {
        filter_by_grammemes(parses, known, POS_WHITELIST, POS_BLACKLIST).map(add_singular)
    }

    fn fail_or_log(&self, n: i64, error: InflectError) -> Result<Option<String>, InflectError> {
        if self.options.graceful_failure {
            warn!(n, error = %error, "falling back to digits");
            Ok(Some(n.to_string()))
        } else {
            Err(error)
        }
    }
}
