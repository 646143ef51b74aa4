// Lexicon-backed analyzer for Ukrainian number words

use std::collections::BTreeSet;

use ukr_core::character::{Script, detect_script, normalize_word};
use ukr_core::tag::{INTG, LATN, NUMB, UNKN};
use ukr_core::{LexemeRef, Parse, Tag};

use crate::Analyzer;
use crate::lexicon::Lexicon;

/// Ukrainian analyzer over a [`Lexicon`].
///
/// Input is lowercased and apostrophes are normalised before lookup. Words
/// written in digits or Latin letters get a single synthetic parse; Cyrillic
/// words missing from the lexicon (and not a fused compound of a scale
/// ordinal) come back as `UNKN`.
pub struct UkrainianAnalyzer {
    lexicon: Lexicon,
}

impl UkrainianAnalyzer {
    /// Analyzer over the built-in lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::ukrainian())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn build(&self, word: &str, prefix: &str, at: LexemeRef, score: f32) -> Option<Parse> {
        let lexeme = self.lexicon.lexeme(at.lexeme)?;
        let form = lexeme.forms.get(at.form as usize)?;
        Some(Parse::new(
            word,
            form.tag.clone(),
            format!("{prefix}{}", lexeme.lemma),
            score,
            Some(at),
        ))
    }
}

impl Default for UkrainianAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for UkrainianAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse> {
        let word = normalize_word(word);
        let synthetic = |grammemes: &[&str]| {
            vec![Parse::synthetic(
                word.clone(),
                Tag::new(grammemes.iter().copied()),
            )]
        };

        match detect_script(&word) {
            Script::Digits => return synthetic(&[NUMB, INTG]),
            Script::Latin => return synthetic(&[LATN]),
            Script::Other => return synthetic(&[UNKN]),
            Script::Cyrillic => {}
        }

        let exact = self.lexicon.lookup(&word);
        let candidates: Vec<(&str, LexemeRef)> = if exact.is_empty() {
            self.lexicon.lookup_compound(&word)
        } else {
            exact.iter().map(|&at| ("", at)).collect()
        };
        if candidates.is_empty() {
            return synthetic(&[UNKN]);
        }

        let score = 1.0 / candidates.len() as f32;
        candidates
            .into_iter()
            .filter_map(|(prefix, at)| self.build(&word, prefix, at, score))
            .collect()
    }

    /// Pick, among the lexeme's forms carrying every requested grammeme, the
    /// one closest to `parse` once the requested grammemes replace their
    /// category in its tag. Ties go to the earlier form.
    fn inflect(&self, parse: &Parse, grammemes: &BTreeSet<String>) -> Option<Parse> {
        let at = parse.lexeme?;
        let lexeme = self.lexicon.lexeme(at.lexeme)?;
        let current = lexeme.forms.get(at.form as usize)?;
        let prefix = parse.word.strip_suffix(current.word.as_str())?;

        let required = || grammemes.iter().map(String::as_str);
        let target = parse.tag.updated(required());

        let mut best: Option<(usize, usize)> = None;
        for (i, form) in lexeme.forms.iter().enumerate() {
            if !form.tag.contains_all(required()) {
                continue;
            }
            let overlap = form.tag.overlap(target.iter());
            if best.is_none_or(|(_, b)| overlap > b) {
                best = Some((i, overlap));
            }
        }

        let (index, _) = best?;
        let form = &lexeme.forms[index];
        Some(Parse::new(
            format!("{prefix}{}", form.word),
            form.tag.clone(),
            format!("{prefix}{}", lexeme.lemma),
            parse.score,
            Some(LexemeRef {
                lexeme: at.lexeme,
                form: index as u16,
            }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ukr_core::tag::{ADJF, NOUN, NPRO, NUMR, VERB};

    fn set(grammemes: &[&str]) -> BTreeSet<String> {
        grammemes.iter().map(|g| g.to_string()).collect()
    }

    fn first(analyzer: &UkrainianAnalyzer, word: &str) -> Parse {
        analyzer.parse(word).remove(0)
    }

    #[test]
    fn ordinal_parses_in_paradigm_order() {
        let a = UkrainianAnalyzer::new();
        let parses = a.parse("тридцятому");
        let tags: Vec<String> = parses.iter().map(|p| p.tag.to_string()).collect();
        assert_eq!(
            tags,
            vec![
                "ADJF,compb,datv,masc",
                "ADJF,compb,loct,masc",
                "ADJF,compb,datv,neut",
                "ADJF,compb,loct,neut",
            ]
        );
        assert!(parses.iter().all(|p| p.normal_form == "тридцятий"));
        assert!((parses[0].score - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn synthetic_parses() {
        let a = UkrainianAnalyzer::new();
        assert_eq!(first(&a, "232").pos(), Some(NUMB));
        assert_eq!(first(&a, "whatever").pos(), Some(LATN));
        assert_eq!(first(&a, "пʼятьмастами").pos(), Some(UNKN));
        assert_eq!(first(&a, "двадцять два").pos(), Some(UNKN));
        assert_eq!(a.parse("whatever").len(), 1);
    }

    #[test]
    fn ambiguous_words_list_every_reading() {
        let a = UkrainianAnalyzer::new();
        let one = a.parse("один");
        assert_eq!(one[0].pos(), Some(NPRO));
        assert!(one.iter().any(|p| p.pos() == Some(NUMR)));

        let three: Vec<Parse> = a.parse("три");
        assert_eq!(three[0].pos(), Some(VERB));
        assert!(three.iter().any(|p| p.pos() == Some(NUMR)));

        assert!(a.parse("десяток").iter().all(|p| p.pos() == Some(NOUN)));
    }

    #[test]
    fn input_is_normalised() {
        let a = UkrainianAnalyzer::new();
        let p = first(&a, "П'ятий");
        assert_eq!(p.word, "пʼятий");
        assert_eq!(p.pos(), Some(ADJF));
    }

    #[test]
    fn inflect_changes_case_and_keeps_gender() {
        let a = UkrainianAnalyzer::new();
        let base = first(&a, "третій");
        let dat = a.inflect(&base, &set(&["datv"])).unwrap();
        assert_eq!(dat.word, "третьому");
        assert_eq!(dat.normal_form, "третій");

        let fem = a.inflect(&dat, &set(&["femn"])).unwrap();
        assert_eq!(fem.word, "третій");
        assert!(fem.tag.contains("femn"));
        assert!(fem.tag.contains("datv"));
    }

    #[test]
    fn inflect_fails_without_matching_form() {
        let a = UkrainianAnalyzer::new();
        let three = a
            .parse("три")
            .into_iter()
            .find(|p| p.pos() == Some(NUMR))
            .unwrap();
        assert!(a.inflect(&three, &set(&["femn"])).is_none());
        assert!(a.inflect(&three, &set(&["sing"])).is_none());
        assert_eq!(a.inflect(&three, &set(&["ablt"])).unwrap().word, "трьома");
    }

    #[test]
    fn synthetic_parses_never_inflect() {
        let a = UkrainianAnalyzer::new();
        let digits = first(&a, "232");
        assert!(a.inflect(&digits, &set(&["datv"])).is_none());
    }

    #[test]
    fn fused_scale_ordinals() {
        let a = UkrainianAnalyzer::new();
        let p = first(&a, "двохтисячному");
        assert_eq!(p.pos(), Some(ADJF));
        assert_eq!(p.normal_form, "двохтисячний");

        let nom = a.inflect(&p, &set(&["nomn"])).unwrap();
        assert_eq!(nom.word, "двохтисячний");

        let fem = a.inflect(&nom, &set(&["femn"])).unwrap();
        assert_eq!(fem.word, "двохтисячна");
    }

    #[test]
    fn accusative_animacy() {
        let a = UkrainianAnalyzer::new();
        let base = first(&a, "другий");
        let anim = a.inflect(&base, &set(&["accs", "anim"])).unwrap();
        assert_eq!(anim.word, "другого");
        let inan = a.inflect(&base, &set(&["accs"])).unwrap();
        assert_eq!(inan.word, "другий");
    }
}
