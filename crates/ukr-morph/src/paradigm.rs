// Declension tables and lexeme construction
//
// Every table row is (ending or full form, grammemes). Singular gendered
// forms of adjectives and numerals deliberately carry no `sing` grammeme:
// gender implies it, and that is how Ukrainian dictionaries tag them.

use ukr_core::Tag;

/// One form of a lexeme.
#[derive(Debug, Clone)]
pub struct Form {
    pub word: String,
    pub tag: Tag,
}

/// A dictionary entry: its normal form and every inflected form.
#[derive(Debug, Clone)]
pub struct Lexeme {
    pub lemma: String,
    pub forms: Vec<Form>,
    /// Forms of this lexeme may be preceded by a fused prefix
    /// ("двох" + "тисячний").
    pub compounding: bool,
}

impl Lexeme {
    /// Build a lexeme from a stem, the grammemes shared by every form and a
    /// table of (ending, grammemes). The lemma is the first form.
    pub fn decline(stem: &str, common: &str, table: &[(&str, &str)]) -> Self {
        let forms: Vec<Form> = table
            .iter()
            .map(|(ending, grammemes)| Form {
                word: format!("{stem}{ending}"),
                tag: tag_of(&format!("{common} {grammemes}")),
            })
            .collect();
        Self::from_forms(forms)
    }

    /// Build a lexeme from a table of full forms.
    pub fn listed(common: &str, table: &[(&str, &str)]) -> Self {
        Self::decline("", common, table)
    }

    fn from_forms(forms: Vec<Form>) -> Self {
        let lemma = forms.first().map(|f| f.word.clone()).unwrap_or_default();
        Self {
            lemma,
            forms,
            compounding: false,
        }
    }

    pub fn compounding(mut self) -> Self {
        self.compounding = true;
        self
    }
}

/// Build a tag from a static grammeme list separated by spaces or commas.
pub fn tag_of(grammemes: &str) -> Tag {
    grammemes
        .split([',', ' '])
        .filter(|g| !g.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Adjectives (ordinals and "останній")
// ---------------------------------------------------------------------------

/// Common grammemes of every full-adjective form.
pub const ADJECTIVE: &str = "ADJF compb";

/// Hard-stem adjective endings ("перш|ий").
pub const HARD_ADJECTIVE: &[(&str, &str)] = &[
    ("ий", "masc nomn"),
    ("ого", "masc gent"),
    ("ому", "masc datv"),
    ("ий", "masc accs inan"),
    ("ого", "masc accs anim"),
    ("им", "masc ablt"),
    ("ому", "masc loct"),
    ("ім", "masc loct"),
    ("ий", "masc voct"),
    ("а", "femn nomn"),
    ("ої", "femn gent"),
    ("ій", "femn datv"),
    ("у", "femn accs"),
    ("ою", "femn ablt"),
    ("ій", "femn loct"),
    ("а", "femn voct"),
    ("е", "neut nomn"),
    ("ого", "neut gent"),
    ("ому", "neut datv"),
    ("е", "neut accs"),
    ("им", "neut ablt"),
    ("ому", "neut loct"),
    ("ім", "neut loct"),
    ("е", "neut voct"),
    ("і", "plur nomn"),
    ("их", "plur gent"),
    ("им", "plur datv"),
    ("і", "plur accs inan"),
    ("их", "plur accs anim"),
    ("ими", "plur ablt"),
    ("их", "plur loct"),
    ("і", "plur voct"),
];

/// Soft-stem adjective endings ("трет|ій", "останн|ій").
pub const SOFT_ADJECTIVE: &[(&str, &str)] = &[
    ("ій", "masc nomn"),
    ("ього", "masc gent"),
    ("ьому", "masc datv"),
    ("ій", "masc accs inan"),
    ("ього", "masc accs anim"),
    ("ім", "masc ablt"),
    ("ьому", "masc loct"),
    ("ім", "masc loct"),
    ("ій", "masc voct"),
    ("я", "femn nomn"),
    ("ьої", "femn gent"),
    ("ій", "femn datv"),
    ("ю", "femn accs"),
    ("ьою", "femn ablt"),
    ("ій", "femn loct"),
    ("я", "femn voct"),
    ("є", "neut nomn"),
    ("ього", "neut gent"),
    ("ьому", "neut datv"),
    ("є", "neut accs"),
    ("ім", "neut ablt"),
    ("ьому", "neut loct"),
    ("ім", "neut loct"),
    ("є", "neut voct"),
    ("і", "plur nomn"),
    ("іх", "plur gent"),
    ("ім", "plur datv"),
    ("і", "plur accs inan"),
    ("іх", "plur accs anim"),
    ("іми", "plur ablt"),
    ("іх", "plur loct"),
    ("і", "plur voct"),
];

/// Decline an adjective given in its masculine nominative form.
///
/// Words ending in "ій" take the soft declension, everything else the hard
/// one. Returns `None` for words that are not adjectives of either kind.
pub fn adjective(lemma: &str) -> Option<Lexeme> {
    if let Some(stem) = lemma.strip_suffix("ій") {
        Some(Lexeme::decline(stem, ADJECTIVE, SOFT_ADJECTIVE))
    } else {
        lemma
            .strip_suffix("ий")
            .map(|stem| Lexeme::decline(stem, ADJECTIVE, HARD_ADJECTIVE))
    }
}

// ---------------------------------------------------------------------------
// Cardinal numerals
// ---------------------------------------------------------------------------

pub const NUMERAL: &str = "NUMR";

pub const ODYN: &[(&str, &str)] = &[
    ("один", "masc nomn"),
    ("одного", "masc gent"),
    ("одному", "masc datv"),
    ("один", "masc accs inan"),
    ("одного", "masc accs anim"),
    ("одним", "masc ablt"),
    ("одному", "masc loct"),
    ("однім", "masc loct"),
    ("одна", "femn nomn"),
    ("однієї", "femn gent"),
    ("одної", "femn gent"),
    ("одній", "femn datv"),
    ("одну", "femn accs"),
    ("однією", "femn ablt"),
    ("одною", "femn ablt"),
    ("одній", "femn loct"),
    ("одне", "neut nomn"),
    ("одного", "neut gent"),
    ("одному", "neut datv"),
    ("одне", "neut accs"),
    ("одним", "neut ablt"),
    ("одному", "neut loct"),
    ("однім", "neut loct"),
    ("одні", "plur nomn"),
    ("одних", "plur gent"),
    ("одним", "plur datv"),
    ("одні", "plur accs inan"),
    ("одних", "plur accs anim"),
    ("одними", "plur ablt"),
    ("одних", "plur loct"),
];

pub const DVA: &[(&str, &str)] = &[
    ("два", "masc nomn"),
    ("два", "neut nomn"),
    ("дві", "femn nomn"),
    ("двох", "gent"),
    ("двом", "datv"),
    ("два", "masc accs inan"),
    ("два", "neut accs inan"),
    ("дві", "femn accs inan"),
    ("двох", "accs anim"),
    ("двома", "ablt"),
    ("двох", "loct"),
];

pub const TRY: &[(&str, &str)] = &[
    ("три", "nomn"),
    ("трьох", "gent"),
    ("трьом", "datv"),
    ("три", "accs inan"),
    ("трьох", "accs anim"),
    ("трьома", "ablt"),
    ("трьох", "loct"),
];

pub const CHOTYRY: &[(&str, &str)] = &[
    ("чотири", "nomn"),
    ("чотирьох", "gent"),
    ("чотирьом", "datv"),
    ("чотири", "accs inan"),
    ("чотирьох", "accs anim"),
    ("чотирма", "ablt"),
    ("чотирьома", "ablt"),
    ("чотирьох", "loct"),
];

/// Numerals from five up that decline in three shapes:
/// (nominative/accusative, genitive/dative/locative, instrumental).
pub const COUNTING: &[(&str, &str, &str)] = &[
    ("пʼять", "пʼяти", "пʼятьма"),
    ("шість", "шести", "шістьма"),
    ("сім", "семи", "сьома"),
    ("вісім", "восьми", "вісьма"),
    ("девʼять", "девʼяти", "девʼятьма"),
    ("десять", "десяти", "десятьма"),
    ("одинадцять", "одинадцяти", "одинадцятьма"),
    ("дванадцять", "дванадцяти", "дванадцятьма"),
    ("тринадцять", "тринадцяти", "тринадцятьма"),
    ("чотирнадцять", "чотирнадцяти", "чотирнадцятьма"),
    ("пʼятнадцять", "пʼятнадцяти", "пʼятнадцятьма"),
    ("шістнадцять", "шістнадцяти", "шістнадцятьма"),
    ("сімнадцять", "сімнадцяти", "сімнадцятьма"),
    ("вісімнадцять", "вісімнадцяти", "вісімнадцятьма"),
    ("девʼятнадцять", "девʼятнадцяти", "девʼятнадцятьма"),
    ("двадцять", "двадцяти", "двадцятьма"),
    ("тридцять", "тридцяти", "тридцятьма"),
    ("сорок", "сорока", "сорока"),
    ("пʼятдесят", "пʼятдесяти", "пʼятдесятьма"),
    ("шістдесят", "шістдесяти", "шістдесятьма"),
    ("сімдесят", "сімдесяти", "сімдесятьма"),
    ("вісімдесят", "вісімдесяти", "вісімдесятьма"),
    ("девʼяносто", "девʼяноста", "девʼяноста"),
    ("сто", "ста", "ста"),
];

pub fn counting_numeral(nominative: &str, oblique: &str, instrumental: &str) -> Lexeme {
    Lexeme::listed(
        NUMERAL,
        &[
            (nominative, "nomn"),
            (oblique, "gent"),
            (oblique, "datv"),
            (nominative, "accs"),
            (instrumental, "ablt"),
            (oblique, "loct"),
        ],
    )
}

/// Round hundreds from two hundred up:
/// (nominative/accusative, genitive, dative, instrumental, locative).
///
/// From five hundred on the instrumental is the "-истами" variant;
/// "пʼятьмастами" and the like are not listed.
pub const HUNDREDS: &[(&str, &str, &str, &str, &str)] = &[
    ("двісті", "двохсот", "двомстам", "двомастами", "двохстах"),
    ("триста", "трьохсот", "трьомстам", "трьомастами", "трьохстах"),
    ("чотириста", "чотирьохсот", "чотирьомстам", "чотирмастами", "чотирьохстах"),
    ("пʼятсот", "пʼятисот", "пʼятистам", "пʼятистами", "пʼятистах"),
    ("шістсот", "шестисот", "шестистам", "шестистами", "шестистах"),
    ("сімсот", "семисот", "семистам", "семистами", "семистах"),
    ("вісімсот", "восьмисот", "восьмистам", "восьмистами", "восьмистах"),
    ("девʼятсот", "девʼятисот", "девʼятистам", "девʼятистами", "девʼятистах"),
];

pub fn hundreds_numeral(
    (nominative, genitive, dative, instrumental, locative): (&str, &str, &str, &str, &str),
) -> Lexeme {
    Lexeme::listed(
        NUMERAL,
        &[
            (nominative, "nomn"),
            (genitive, "gent"),
            (dative, "datv"),
            (nominative, "accs"),
            (instrumental, "ablt"),
            (locative, "loct"),
        ],
    )
}

/// "тисяча" declines like a feminine noun.
pub const TYSIACHA: &[(&str, &str)] = &[
    ("тисяча", "femn nomn"),
    ("тисячі", "femn gent"),
    ("тисячі", "femn datv"),
    ("тисячу", "femn accs"),
    ("тисячею", "femn ablt"),
    ("тисячі", "femn loct"),
    ("тисячі", "plur nomn"),
    ("тисяч", "plur gent"),
    ("тисячам", "plur datv"),
    ("тисячі", "plur accs"),
    ("тисячами", "plur ablt"),
    ("тисячах", "plur loct"),
];

/// Scale numerals that decline like masculine nouns ("мільйон").
pub const MASCULINE_SCALES: &[&str] = &["мільйон", "мільярд", "трильйон", "квадрильйон", "квінтильйон"];

pub const MASCULINE_SCALE_ENDINGS: &[(&str, &str)] = &[
    ("", "masc nomn"),
    ("а", "masc gent"),
    ("у", "masc datv"),
    ("", "masc accs"),
    ("ом", "masc ablt"),
    ("і", "masc loct"),
    ("и", "plur nomn"),
    ("ів", "plur gent"),
    ("ам", "plur datv"),
    ("и", "plur accs"),
    ("ами", "plur ablt"),
    ("ах", "plur loct"),
];

// ---------------------------------------------------------------------------
// Ordinals
// ---------------------------------------------------------------------------

/// Ordinal lemmas that are single dictionary words.
pub const ORDINALS: &[&str] = &[
    "нульовий",
    "перший",
    "другий",
    "третій",
    "четвертий",
    "пʼятий",
    "шостий",
    "сьомий",
    "восьмий",
    "девʼятий",
    "десятий",
    "одинадцятий",
    "дванадцятий",
    "тринадцятий",
    "чотирнадцятий",
    "пʼятнадцятий",
    "шістнадцятий",
    "сімнадцятий",
    "вісімнадцятий",
    "девʼятнадцятий",
    "двадцятий",
    "тридцятий",
    "сороковий",
    "пʼятдесятий",
    "шістдесятий",
    "сімдесятий",
    "вісімдесятий",
    "девʼяностий",
    "сотий",
    "двохсотий",
    "трьохсотий",
    "чотирьохсотий",
    "пʼятисотий",
    "шестисотий",
    "семисотий",
    "восьмисотий",
    "девʼятисотий",
];

/// Scale ordinals; these also appear fused behind a multiplier stem.
pub const SCALE_ORDINALS: &[&str] = &[
    "тисячний",
    "мільйонний",
    "мільярдний",
    "трильйонний",
    "квадрильйонний",
    "квінтильйонний",
];

// ---------------------------------------------------------------------------
// Lexical neighbours: words that collide with number words
// ---------------------------------------------------------------------------

/// "один" as a pronoun ("один з них").
pub const ODYN_PRONOUN: &[(&str, &str)] = &[
    ("один", "masc nomn"),
    ("одного", "masc gent"),
    ("одному", "masc datv"),
    ("один", "masc accs inan"),
    ("одним", "masc ablt"),
    ("одна", "femn nomn"),
    ("одне", "neut nomn"),
    ("одні", "plur nomn"),
];

/// "три", imperative of "терти".
pub const TRY_VERB: &[(&str, &str)] = &[("три", "impf tran impr sing excl")];

pub const NOUN_NUL: &[(&str, &str)] = &[
    ("ь", "sing nomn"),
    ("я", "sing gent"),
    ("ю", "sing datv"),
    ("ь", "sing accs"),
    ("ем", "sing ablt"),
    ("і", "sing loct"),
    ("ю", "sing loct"),
    ("і", "plur nomn"),
    ("ів", "plur gent"),
    ("ям", "plur datv"),
    ("і", "plur accs"),
    ("ями", "plur ablt"),
    ("ях", "plur loct"),
];

/// "десятка" (femn) and "десяток" (masc) share most forms; both are nouns
/// denoting a quantity.
pub const NOUN_DESIATKA: &[(&str, &str)] = &[
    ("десятка", "sing nomn"),
    ("десятки", "sing gent"),
    ("десятці", "sing datv"),
    ("десятку", "sing accs"),
    ("десяткою", "sing ablt"),
    ("десятці", "sing loct"),
    ("десятки", "plur nomn"),
    ("десяток", "plur gent"),
    ("десяткам", "plur datv"),
    ("десятки", "plur accs"),
    ("десятками", "plur ablt"),
    ("десятках", "plur loct"),
];

pub const NOUN_DESIATOK: &[(&str, &str)] = &[
    ("десяток", "sing nomn"),
    ("десятка", "sing gent"),
    ("десятку", "sing datv"),
    ("десяток", "sing accs"),
    ("десятком", "sing ablt"),
    ("десятку", "sing loct"),
    ("десятки", "plur nomn"),
    ("десятків", "plur gent"),
    ("десяткам", "plur datv"),
    ("десятки", "plur accs"),
    ("десятками", "plur ablt"),
    ("десятках", "plur loct"),
];

pub const NOUN_SOTNIA: &[(&str, &str)] = &[
    ("сотня", "sing nomn"),
    ("сотні", "sing gent"),
    ("сотні", "sing datv"),
    ("сотню", "sing accs"),
    ("сотнею", "sing ablt"),
    ("сотні", "sing loct"),
    ("сотні", "plur nomn"),
    ("сотень", "plur gent"),
    ("сотням", "plur datv"),
    ("сотні", "plur accs"),
    ("сотнями", "plur ablt"),
    ("сотнях", "plur loct"),
];
