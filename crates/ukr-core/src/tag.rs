// Grammeme vocabulary and the Tag value type
//
// Grammeme names follow the OpenCorpora convention used by Ukrainian
// morphological dictionaries (ADJF, NUMR, nomn, masc, ...).

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Part of speech
// ---------------------------------------------------------------------------

/// Full adjective. Ordinals ("перший", "тридцятий") are analysed as ADJF.
pub const ADJF: &str = "ADJF";
/// Cardinal numeral ("два", "тридцять").
pub const NUMR: &str = "NUMR";
/// Pronoun-numeral ("один" as in "one of them").
pub const NPRO: &str = "NPRO";
pub const VERB: &str = "VERB";
pub const NOUN: &str = "NOUN";
/// A token written with digits ("232").
pub const NUMB: &str = "NUMB";
/// A token written in Latin script.
pub const LATN: &str = "LATN";
/// A token the analyzer could not identify.
pub const UNKN: &str = "UNKN";

// ---------------------------------------------------------------------------
// Case
// ---------------------------------------------------------------------------

pub const NOMN: &str = "nomn";
pub const GENT: &str = "gent";
pub const DATV: &str = "datv";
pub const ACCS: &str = "accs";
pub const ABLT: &str = "ablt";
pub const LOCT: &str = "loct";
pub const VOCT: &str = "voct";

// ---------------------------------------------------------------------------
// Gender, number, animacy, degree, misc
// ---------------------------------------------------------------------------

pub const MASC: &str = "masc";
pub const FEMN: &str = "femn";
pub const NEUT: &str = "neut";

pub const SING: &str = "sing";
pub const PLUR: &str = "plur";

pub const ANIM: &str = "anim";
pub const INAN: &str = "inan";

/// Base comparison degree. Present on every full adjective parse but not
/// transferable between lexemes.
pub const COMPB: &str = "compb";

/// Integer marker on `NUMB` parses.
pub const INTG: &str = "intg";

/// Grammatical category a grammeme belongs to.
///
/// Two grammemes of the same category are mutually exclusive within one tag,
/// which is what makes "replace the case of this form" well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    PartOfSpeech,
    Case,
    Gender,
    Number,
    Animacy,
    Degree,
}

impl Category {
    /// Return the category of a known grammeme, or `None` for grammemes
    /// outside the closed vocabulary above.
    pub fn of(grammeme: &str) -> Option<Category> {
        match grammeme {
            ADJF | NUMR | NPRO | VERB | NOUN | NUMB | LATN | UNKN => Some(Category::PartOfSpeech),
            NOMN | GENT | DATV | ACCS | ABLT | LOCT | VOCT => Some(Category::Case),
            MASC | FEMN | NEUT => Some(Category::Gender),
            SING | PLUR => Some(Category::Number),
            ANIM | INAN => Some(Category::Animacy),
            COMPB => Some(Category::Degree),
            _ => None,
        }
    }
}

/// Error returned when a tag string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("empty tag")]
    Empty,
    #[error("conflicting grammemes {0} and {1}")]
    Conflict(String, String),
}

/// A set of grammemes describing one word form.
///
/// Grammemes are unique and unordered; iteration is in sorted order so that
/// every operation over a tag is deterministic. Tags are values: every
/// modifying operation returns a new `Tag`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tag {
    grammemes: BTreeSet<String>,
}

impl Tag {
    /// Build a tag from any collection of grammeme names.
    pub fn new<I, S>(grammemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            grammemes: grammemes.into_iter().map(Into::into).collect(),
        }
    }

    /// The part-of-speech grammeme, if the tag has one.
    pub fn pos(&self) -> Option<&str> {
        self.first_of(Category::PartOfSpeech)
    }

    /// The grammatical-number grammeme (`sing` / `plur`), if present.
    pub fn number(&self) -> Option<&str> {
        self.first_of(Category::Number)
    }

    pub fn case(&self) -> Option<&str> {
        self.first_of(Category::Case)
    }

    pub fn gender(&self) -> Option<&str> {
        self.first_of(Category::Gender)
    }

    fn first_of(&self, category: Category) -> Option<&str> {
        self.iter().find(|g| Category::of(g) == Some(category))
    }

    pub fn contains(&self, grammeme: &str) -> bool {
        self.grammemes.contains(grammeme)
    }

    /// Iterate over the grammemes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.grammemes.iter().map(String::as_str)
    }

    pub fn grammemes(&self) -> &BTreeSet<String> {
        &self.grammemes
    }

    pub fn len(&self) -> usize {
        self.grammemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammemes.is_empty()
    }

    /// Return `true` if every grammeme of `required` is present in this tag.
    pub fn contains_all<'a>(&self, required: impl IntoIterator<Item = &'a str>) -> bool {
        required.into_iter().all(|g| self.contains(g))
    }

    /// Count the grammemes this tag shares with `other`.
    pub fn overlap<'a>(&self, other: impl IntoIterator<Item = &'a str>) -> usize {
        other.into_iter().filter(|g| self.contains(g)).count()
    }

    /// A copy of this tag with `grammeme` added.
    pub fn with(&self, grammeme: &str) -> Tag {
        let mut grammemes = self.grammemes.clone();
        grammemes.insert(grammeme.to_string());
        Tag { grammemes }
    }

    /// A copy of this tag with `grammeme` removed. Removing an absent
    /// grammeme returns an equal tag.
    pub fn without(&self, grammeme: &str) -> Tag {
        let mut grammemes = self.grammemes.clone();
        grammemes.remove(grammeme);
        Tag { grammemes }
    }

    /// A copy of this tag where each requested grammeme replaces whatever
    /// grammeme of the same category this tag had.
    ///
    /// `masc,nomn` updated with `{datv}` is `masc,datv`. Grammemes without a
    /// known category are simply added.
    pub fn updated<'a>(&self, required: impl IntoIterator<Item = &'a str>) -> Tag {
        let required: Vec<&str> = required.into_iter().collect();
        let replaced: Vec<Category> = required.iter().filter_map(|g| Category::of(g)).collect();

        let mut grammemes: BTreeSet<String> = self
            .grammemes
            .iter()
            .filter(|g| match Category::of(g) {
                Some(cat) => !replaced.contains(&cat),
                None => true,
            })
            .cloned()
            .collect();
        grammemes.extend(required.iter().map(|g| g.to_string()));
        Tag { grammemes }
    }
}

impl fmt::Display for Tag {
    /// Render as a comma-separated list, part of speech first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.pos();
        let mut parts: Vec<&str> = pos.into_iter().collect();
        parts.extend(self.iter().filter(|g| Some(*g) != pos));
        write!(f, "{}", parts.join(","))
    }
}

impl FromStr for Tag {
    type Err = TagError;

    /// Parse tags written as `ADJF,compb masc,datv` (commas and spaces are
    /// both separators). Two grammemes of the same category are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|g| !g.is_empty())
            .collect();
        if names.is_empty() {
            return Err(TagError::Empty);
        }
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                if a != b && Category::of(a).is_some() && Category::of(a) == Category::of(b) {
                    return Err(TagError::Conflict(a.to_string(), b.to_string()));
                }
            }
        }
        Ok(Tag::new(names))
    }
}

impl<S: Into<String>> FromIterator<S> for Tag {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Tag::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> Tag {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_query() {
        let t = tag("ADJF,compb masc,datv");
        assert_eq!(t.pos(), Some(ADJF));
        assert_eq!(t.case(), Some(DATV));
        assert_eq!(t.gender(), Some(MASC));
        assert_eq!(t.number(), None);
        assert!(t.contains(COMPB));
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn duplicates_collapse() {
        let t = tag("NUMR nomn nomn");
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn conflicting_case_is_rejected() {
        assert_eq!(
            "NUMR,nomn,gent".parse::<Tag>(),
            Err(TagError::Conflict("nomn".into(), "gent".into()))
        );
        assert_eq!("  ".parse::<Tag>(), Err(TagError::Empty));
    }

    #[test]
    fn display_puts_pos_first() {
        assert_eq!(tag("masc datv ADJF").to_string(), "ADJF,datv,masc");
    }

    #[test]
    fn with_and_without_leave_original_untouched() {
        let t = tag("ADJF,compb masc,nomn");
        let s = t.with(SING);
        assert!(s.contains(SING));
        assert!(!t.contains(SING));

        let c = t.without(COMPB);
        assert!(!c.contains(COMPB));
        assert!(t.contains(COMPB));
        assert_eq!(t.without("xxxx"), t);
    }

    #[test]
    fn updated_replaces_same_category() {
        let t = tag("ADJF,compb masc,nomn");
        let u = t.updated([DATV, FEMN]);
        assert_eq!(u, tag("ADJF,compb femn,datv"));
    }

    #[test]
    fn updated_adds_unknown_grammemes() {
        let t = tag("NUMR,nomn");
        assert_eq!(t.updated(["v_rod"]), tag("NUMR,nomn,v_rod"));
    }

    #[test]
    fn overlap_counts_shared() {
        let t = tag("ADJF,compb masc,accs,anim");
        assert_eq!(t.overlap([ACCS, ANIM, FEMN]), 2);
        assert!(t.contains_all([MASC, ACCS]));
        assert!(!t.contains_all([MASC, GENT]));
    }

    #[test]
    fn category_lookup() {
        assert_eq!(Category::of(NUMB), Some(Category::PartOfSpeech));
        assert_eq!(Category::of(VOCT), Some(Category::Case));
        assert_eq!(Category::of(COMPB), Some(Category::Degree));
        assert_eq!(Category::of(INTG), None);
    }
}
