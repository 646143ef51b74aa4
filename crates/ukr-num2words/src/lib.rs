//! Ukrainian number words.
//!
//! Renders non-negative integers as the canonical Ukrainian cardinal
//! ("двадцять два") or ordinal ("двадцять другий") phrase in its default
//! form: nominative, masculine, singular.
//!
//! Ordinals only inflect their final component; every earlier word of the
//! phrase is the cardinal wording. Round thousands, millions, ... fuse the
//! multiplier into one word ("двохтисячний", "стотисячний").

/// Source of base number words.
pub trait NumberSpeller {
    /// Cardinal wording of `n`, e.g. `22` -> "двадцять два".
    fn cardinal(&self, n: u64) -> String;

    /// Ordinal wording of `n`, e.g. `22` -> "двадцять другий".
    fn ordinal(&self, n: u64) -> String;
}

/// The built-in Ukrainian speller.
#[derive(Debug, Clone, Copy, Default)]
pub struct UkrainianSpeller;

impl NumberSpeller for UkrainianSpeller {
    fn cardinal(&self, n: u64) -> String {
        cardinal(n)
    }

    fn ordinal(&self, n: u64) -> String {
        ordinal(n)
    }
}

// ---------------------------------------------------------------------------
// Word tables. Index is the numeric value; index 0 is unused unless noted.
// ---------------------------------------------------------------------------

const ONES: [&str; 20] = [
    "",
    "один",
    "два",
    "три",
    "чотири",
    "пʼять",
    "шість",
    "сім",
    "вісім",
    "девʼять",
    "десять",
    "одинадцять",
    "дванадцять",
    "тринадцять",
    "чотирнадцять",
    "пʼятнадцять",
    "шістнадцять",
    "сімнадцять",
    "вісімнадцять",
    "девʼятнадцять",
];

/// Feminine forms used in front of "тисяча".
const ONES_FEMININE: [&str; 3] = ["", "одна", "дві"];

const TENS: [&str; 10] = [
    "",
    "",
    "двадцять",
    "тридцять",
    "сорок",
    "пʼятдесят",
    "шістдесят",
    "сімдесят",
    "вісімдесят",
    "девʼяносто",
];

const HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двісті",
    "триста",
    "чотириста",
    "пʼятсот",
    "шістсот",
    "сімсот",
    "вісімсот",
    "девʼятсот",
];

/// Scale words per triad index (1 = thousands) in the three plural forms:
/// after 1, after 2-4, after everything else.
const SCALES: [[&str; 3]; 7] = [
    ["", "", ""],
    ["тисяча", "тисячі", "тисяч"],
    ["мільйон", "мільйони", "мільйонів"],
    ["мільярд", "мільярди", "мільярдів"],
    ["трильйон", "трильйони", "трильйонів"],
    ["квадрильйон", "квадрильйони", "квадрильйонів"],
    ["квінтильйон", "квінтильйони", "квінтильйонів"],
];

const ORD_ONES: [&str; 20] = [
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
];

const ORD_TENS: [&str; 10] = [
    "",
    "",
    "двадцятий",
    "тридцятий",
    "сороковий",
    "пʼятдесятий",
    "шістдесятий",
    "сімдесятий",
    "вісімдесятий",
    "девʼяностий",
];

const ORD_HUNDREDS: [&str; 10] = [
    "",
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

const ORD_SCALES: [&str; 7] = [
    "",
    "тисячний",
    "мільйонний",
    "мільярдний",
    "трильйонний",
    "квадрильйонний",
    "квінтильйонний",
];

/// Genitive stems used as the first half of fused ordinals ("двох|тисячний").
const GEN_ONES: [&str; 20] = [
    "",
    "одно",
    "двох",
    "трьох",
    "чотирьох",
    "пʼяти",
    "шести",
    "семи",
    "восьми",
    "девʼяти",
    "десяти",
    "одинадцяти",
    "дванадцяти",
    "тринадцяти",
    "чотирнадцяти",
    "пʼятнадцяти",
    "шістнадцяти",
    "сімнадцяти",
    "вісімнадцяти",
    "девʼятнадцяти",
];

const GEN_TENS: [&str; 10] = [
    "",
    "",
    "двадцяти",
    "тридцяти",
    "сорока",
    "пʼятдесяти",
    "шістдесяти",
    "сімдесяти",
    "вісімдесяти",
    "девʼяноста",
];

const GEN_HUNDREDS: [&str; 10] = [
    "",
    "сто",
    "двохсот",
    "трьохсот",
    "чотирьохсот",
    "пʼятисот",
    "шестисот",
    "семисот",
    "восьмисот",
    "девʼятисот",
];

// ---------------------------------------------------------------------------
// Cardinals
// ---------------------------------------------------------------------------

/// Cardinal wording of `n`.
pub fn cardinal(n: u64) -> String {
    if n == 0 {
        return "нуль".to_string();
    }

    let mut words: Vec<&str> = Vec::new();
    for (scale, triad) in triads(n).into_iter().enumerate().rev() {
        if triad == 0 {
            continue;
        }
        push_triad(&mut words, triad, scale == 1);
        if scale > 0 {
            words.push(SCALES[scale][plural_class(triad)]);
        }
    }
    words.join(" ")
}

/// Split `n` into base-1000 groups, least significant first.
fn triads(mut n: u64) -> Vec<u64> {
    let mut groups = Vec::new();
    while n > 0 {
        groups.push(n % 1000);
        n /= 1000;
    }
    groups
}

/// Append the words for a number in `1..1000`.
fn push_triad(words: &mut Vec<&'static str>, triad: u64, feminine: bool) {
    let hundreds = (triad / 100) as usize;
    let rest = (triad % 100) as usize;

    if hundreds > 0 {
        words.push(HUNDREDS[hundreds]);
    }
    let units = if rest < 20 {
        rest
    } else {
        words.push(TENS[rest / 10]);
        rest % 10
    };
    if units == 0 {
        return;
    }
    if feminine && units < ONES_FEMININE.len() {
        words.push(ONES_FEMININE[units]);
    } else {
        words.push(ONES[units]);
    }
}

/// Which scale-word form a count takes: 0 = "тисяча", 1 = "тисячі", 2 = "тисяч".
pub fn plural_class(n: u64) -> usize {
    let last_two = n % 100;
    let last = n % 10;
    if (11..=14).contains(&last_two) {
        2
    } else if last == 1 {
        0
    } else if (2..=4).contains(&last) {
        1
    } else {
        2
    }
}

// ---------------------------------------------------------------------------
// Ordinals
// ---------------------------------------------------------------------------

/// Ordinal wording of `n`.
pub fn ordinal(n: u64) -> String {
    if n == 0 {
        return ORD_ONES[0].to_string();
    }

    let low = n % 1000;
    let (last_word, last_value) = if low != 0 {
        let rest = low % 100;
        if rest == 0 {
            (ORD_HUNDREDS[(low / 100) as usize].to_string(), low)
        } else if rest < 20 {
            (ORD_ONES[rest as usize].to_string(), rest)
        } else if rest % 10 == 0 {
            (ORD_TENS[(rest / 10) as usize].to_string(), rest)
        } else {
            (ORD_ONES[(rest % 10) as usize].to_string(), rest % 10)
        }
    } else {
        let groups = triads(n);
        // low == 0 and n > 0, so some higher group is non-zero
        let scale = groups.iter().position(|&g| g != 0).unwrap_or(1);
        let multiplier = groups[scale];
        let word = format!("{}{}", fused_stem(multiplier), ORD_SCALES[scale]);
        (word, multiplier * 1000u64.pow(scale as u32))
    };

    let head = n - last_value;
    if head == 0 {
        last_word
    } else {
        format!("{} {}", cardinal(head), last_word)
    }
}

/// Genitive compound stem of a multiplier in `1..1000`; empty for 1
/// ("тисячний", not "однотисячний").
fn fused_stem(multiplier: u64) -> String {
    if multiplier == 1 {
        return String::new();
    }
    let hundreds = (multiplier / 100) as usize;
    let rest = (multiplier % 100) as usize;

    let mut stem = String::from(GEN_HUNDREDS[hundreds]);
    if rest < 20 {
        stem.push_str(GEN_ONES[rest]);
    } else {
        stem.push_str(GEN_TENS[rest / 10]);
        stem.push_str(GEN_ONES[rest % 10]);
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_cardinals() {
        assert_eq!(cardinal(0), "нуль");
        assert_eq!(cardinal(1), "один");
        assert_eq!(cardinal(2), "два");
        assert_eq!(cardinal(5), "пʼять");
        assert_eq!(cardinal(11), "одинадцять");
        assert_eq!(cardinal(19), "девʼятнадцять");
        assert_eq!(cardinal(30), "тридцять");
    }

    #[test]
    fn compound_cardinals() {
        assert_eq!(cardinal(22), "двадцять два");
        assert_eq!(cardinal(100), "сто");
        assert_eq!(cardinal(101), "сто один");
        assert_eq!(cardinal(245), "двісті сорок пʼять");
        assert_eq!(cardinal(999), "девʼятсот девʼяносто девʼять");
    }

    #[test]
    fn thousands_use_feminine_and_plural_forms() {
        assert_eq!(cardinal(1000), "одна тисяча");
        assert_eq!(cardinal(2000), "дві тисячі");
        assert_eq!(cardinal(5000), "пʼять тисяч");
        assert_eq!(cardinal(11_000), "одинадцять тисяч");
        assert_eq!(cardinal(21_000), "двадцять одна тисяча");
        assert_eq!(cardinal(100_000), "сто тисяч");
        assert_eq!(cardinal(1_002_003), "один мільйон дві тисячі три");
        assert_eq!(cardinal(3_000_000_000), "три мільярди");
    }

    #[test]
    fn largest_value() {
        let words = cardinal(u64::MAX);
        assert!(words.starts_with("вісімнадцять квінтильйонів"));
    }

    #[test]
    fn plural_classes() {
        assert_eq!(plural_class(1), 0);
        assert_eq!(plural_class(21), 0);
        assert_eq!(plural_class(11), 2);
        assert_eq!(plural_class(3), 1);
        assert_eq!(plural_class(13), 2);
        assert_eq!(plural_class(44), 1);
        assert_eq!(plural_class(5), 2);
        assert_eq!(plural_class(100), 2);
    }

    #[test]
    fn simple_ordinals() {
        assert_eq!(ordinal(0), "нульовий");
        assert_eq!(ordinal(1), "перший");
        assert_eq!(ordinal(2), "другий");
        assert_eq!(ordinal(3), "третій");
        assert_eq!(ordinal(30), "тридцятий");
        assert_eq!(ordinal(40), "сороковий");
        assert_eq!(ordinal(100), "сотий");
        assert_eq!(ordinal(300), "трьохсотий");
    }

    #[test]
    fn compound_ordinals_inflect_only_last_word() {
        assert_eq!(ordinal(22), "двадцять другий");
        assert_eq!(ordinal(120), "сто двадцятий");
        assert_eq!(ordinal(111), "сто одинадцятий");
        assert_eq!(ordinal(1100), "одна тисяча сотий");
        assert_eq!(ordinal(2023), "дві тисячі двадцять третій");
    }

    #[test]
    fn round_scales_fuse_into_one_word() {
        assert_eq!(ordinal(1000), "тисячний");
        assert_eq!(ordinal(2000), "двохтисячний");
        assert_eq!(ordinal(21_000), "двадцятиоднотисячний");
        assert_eq!(ordinal(100_000), "стотисячний");
        assert_eq!(ordinal(1_000_000), "мільйонний");
        assert_eq!(ordinal(5_000_000), "пʼятимільйонний");
        assert_eq!(ordinal(1_001_000), "один мільйон тисячний");
    }

    #[test]
    fn trait_delegates_to_free_functions() {
        let s = UkrainianSpeller;
        assert_eq!(s.cardinal(7), cardinal(7));
        assert_eq!(s.ordinal(7), "сьомий");
    }
}
