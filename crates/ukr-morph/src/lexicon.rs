// In-memory lexicon of Ukrainian number words and their neighbours

use hashbrown::HashMap;
use ukr_core::LexemeRef;

use crate::paradigm::{
    self, CHOTYRY, COUNTING, DVA, HUNDREDS, Lexeme, MASCULINE_SCALE_ENDINGS, MASCULINE_SCALES,
    NOUN_DESIATKA, NOUN_DESIATOK, NOUN_NUL, NOUN_SOTNIA, NUMERAL, ODYN, ODYN_PRONOUN, ORDINALS,
    SCALE_ORDINALS, TRY, TRY_VERB, TYSIACHA,
};

/// Lemma of the word meaning "last".
pub const LAST: &str = "останній";

/// All lexemes plus an index from surface form to every (lexeme, form)
/// pair spelling it.
///
/// Index entries are kept in insertion order, which is the order parses are
/// reported in. Entries that must win ties (the pronoun reading of "один",
/// the noun "десятка") are therefore inserted first.
pub struct Lexicon {
    lexemes: Vec<Lexeme>,
    index: HashMap<String, Vec<LexemeRef>>,
    /// Indices of lexemes flagged `compounding`.
    compounding: Vec<u32>,
}

impl Lexicon {
    /// An empty lexicon.
    pub fn new() -> Self {
        Self {
            lexemes: Vec::new(),
            index: HashMap::new(),
            compounding: Vec::new(),
        }
    }

    /// The built-in Ukrainian number lexicon.
    pub fn ukrainian() -> Self {
        let mut lx = Self::new();

        // Neighbours first so they lead their surface forms
        lx.insert(Lexeme::listed("NPRO", ODYN_PRONOUN));
        lx.insert(Lexeme::listed("VERB", TRY_VERB));
        lx.insert(Lexeme::listed("NOUN inan femn", NOUN_DESIATKA));
        lx.insert(Lexeme::listed("NOUN inan masc", NOUN_DESIATOK));
        lx.insert(Lexeme::listed("NOUN inan femn", NOUN_SOTNIA));
        lx.insert(Lexeme::decline("нул", "NOUN inan masc", NOUN_NUL));

        // Cardinals
        lx.insert(Lexeme::listed(NUMERAL, ODYN));
        lx.insert(Lexeme::listed(NUMERAL, DVA));
        lx.insert(Lexeme::listed(NUMERAL, TRY));
        lx.insert(Lexeme::listed(NUMERAL, CHOTYRY));
        for (nominative, oblique, instrumental) in COUNTING {
            lx.insert(paradigm::counting_numeral(nominative, oblique, instrumental));
        }
        for &forms in HUNDREDS {
            lx.insert(paradigm::hundreds_numeral(forms));
        }
        lx.insert(Lexeme::listed(NUMERAL, TYSIACHA));
        for scale in MASCULINE_SCALES {
            lx.insert(Lexeme::decline(scale, NUMERAL, MASCULINE_SCALE_ENDINGS));
        }

        // Ordinals and "last"
        for lemma in ORDINALS.iter().chain(std::iter::once(&LAST)) {
            if let Some(lexeme) = paradigm::adjective(lemma) {
                lx.insert(lexeme);
            }
        }
        for lemma in SCALE_ORDINALS {
            if let Some(lexeme) = paradigm::adjective(lemma) {
                lx.insert(lexeme.compounding());
            }
        }

        lx
    }

    /// Add a lexeme and index all its forms.
    pub fn insert(&mut self, lexeme: Lexeme) {
        let id = self.lexemes.len() as u32;
        for (form, f) in lexeme.forms.iter().enumerate() {
            self.index
                .entry(f.word.clone())
                .or_default()
                .push(LexemeRef {
                    lexeme: id,
                    form: form as u16,
                });
        }
        if lexeme.compounding {
            self.compounding.push(id);
        }
        self.lexemes.push(lexeme);
    }

    /// Every (lexeme, form) spelled exactly `word`.
    pub fn lookup(&self, word: &str) -> &[LexemeRef] {
        self.index.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every (prefix, lexeme, form) where `word` is a non-empty prefix
    /// followed by a form of a compounding lexeme.
    pub fn lookup_compound<'w>(&self, word: &'w str) -> Vec<(&'w str, LexemeRef)> {
        let mut found = Vec::new();
        for &id in &self.compounding {
            let lexeme = &self.lexemes[id as usize];
            for (form, f) in lexeme.forms.iter().enumerate() {
                if let Some(prefix) = word.strip_suffix(f.word.as_str()) {
                    if !prefix.is_empty() {
                        found.push((
                            prefix,
                            LexemeRef {
                                lexeme: id,
                                form: form as u16,
                            },
                        ));
                    }
                }
            }
        }
        found
    }

    pub fn lexeme(&self, id: u32) -> Option<&Lexeme> {
        self.lexemes.get(id as usize)
    }

    /// Number of lexemes.
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
