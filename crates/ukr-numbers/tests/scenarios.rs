//! End-to-end conversions through the built-in analyzer and speller.

use ukr_morph::Analyzer;
use ukr_numbers::{ErrorKind, NumberMetadata, Numbers, NumbersOptions};

fn strict() -> Numbers {
    Numbers::new(NumbersOptions::default())
}

fn graceful() -> Numbers {
    Numbers::new(NumbersOptions::graceful())
}

fn convert(numbers: &Numbers, n: i64, sample: &str) -> Option<String> {
    numbers
        .convert_to_auto(n, sample, None)
        .unwrap_or_else(|e| panic!("{n} / {sample}: {e}"))
}

// ---------------------------------------------------------------------------
// Ordinals
// ---------------------------------------------------------------------------

#[test]
fn ordinal_in_nominative() {
    let numbers = strict();
    assert_eq!(convert(&numbers, 2, "тридцятий").as_deref(), Some("другий"));
    assert_eq!(convert(&numbers, 30, "тридцятий").as_deref(), Some("тридцятий"));
}

#[test]
fn ordinal_in_dative() {
    assert_eq!(convert(&strict(), 3, "тридцятому").as_deref(), Some("третьому"));
}

#[test]
fn ordinal_gender_and_number() {
    let numbers = strict();
    assert_eq!(convert(&numbers, 4, "третя").as_deref(), Some("четверта"));
    assert_eq!(convert(&numbers, 7, "першими").as_deref(), Some("сьомими"));
    assert_eq!(convert(&numbers, 10, "другої").as_deref(), Some("десятої"));
}

#[test]
fn ordinal_with_fused_scale() {
    let numbers = strict();
    assert_eq!(convert(&numbers, 2000, "тридцятому").as_deref(), Some("двохтисячному"));
    assert_eq!(convert(&numbers, 1000, "третя").as_deref(), Some("тисячна"));
}

#[test]
fn ordinal_keeps_leading_words() {
    let numbers = strict();
    assert_eq!(convert(&numbers, 22, "другий").as_deref(), Some("двадцять другий"));
    assert_eq!(
        convert(&numbers, 1_945, "тридцятому").as_deref(),
        Some("одна тисяча девʼятсот сорок пʼятому")
    );
}

// ---------------------------------------------------------------------------
// Cardinals
// ---------------------------------------------------------------------------

#[test]
fn pronoun_reading_is_skipped() {
    assert_eq!(convert(&strict(), 2, "один").as_deref(), Some("два"));
}

#[test]
fn verb_reading_is_skipped() {
    assert_eq!(convert(&strict(), 5, "три").as_deref(), Some("пʼять"));
}

#[test]
fn cardinal_cases() {
    let numbers = strict();
    assert_eq!(convert(&numbers, 22, "два").as_deref(), Some("двадцять два"));
    assert_eq!(convert(&numbers, 5, "двох").as_deref(), Some("пʼяти"));
    assert_eq!(convert(&numbers, 1, "двома").as_deref(), Some("одним"));
    assert_eq!(convert(&numbers, 3, "пʼятьма").as_deref(), Some("трьома"));
}

#[test]
fn round_hundreds_in_oblique_cases() {
    let numbers = strict();
    assert_eq!(convert(&numbers, 200, "трьома").as_deref(), Some("двомастами"));
    assert_eq!(convert(&numbers, 500, "двох").as_deref(), Some("пʼятисот"));
    assert_eq!(convert(&numbers, 300, "трьом").as_deref(), Some("трьомстам"));
    assert_eq!(convert(&numbers, 900, "пʼятьма").as_deref(), Some("девʼятистами"));
    assert_eq!(convert(&numbers, 400, "два").as_deref(), Some("чотириста"));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn unusable_samples_fail_in_strict_mode() {
    let numbers = strict();
    let cases = [
        ("пʼятьмастами", ErrorKind::UnparseableWord),
        ("whatever", ErrorKind::UnsupportedScript),
        ("десяток", ErrorKind::UnsupportedPartOfSpeech),
        ("десятка", ErrorKind::UnsupportedPartOfSpeech),
    ];
    for (sample, kind) in cases {
        let err = numbers.convert_to_auto(2, sample, None).unwrap_err();
        assert_eq!(err.kind(), kind, "{sample}");
    }
}

#[test]
fn unusable_samples_degrade_in_graceful_mode() {
    let numbers = graceful();
    for sample in ["пʼятьмастами", "whatever", "десяток", "десятка"] {
        assert_eq!(convert(&numbers, 2, sample).as_deref(), Some("2"), "{sample}");
    }
}

#[test]
fn numeric_sample_in_both_modes() {
    for numbers in [strict(), graceful()] {
        let out = numbers.convert_to_auto(2, 232, None).unwrap();
        assert_eq!(out.as_deref(), Some("2"));
    }
}

// ---------------------------------------------------------------------------
// "Last"
// ---------------------------------------------------------------------------

#[test]
fn last_ordinal_and_cardinal() {
    let numbers = strict();
    assert_eq!(convert(&numbers, -1, "перший").as_deref(), Some("останній"));
    assert_eq!(convert(&numbers, -1, "тридцятому").as_deref(), Some("останньому"));
    assert_eq!(convert(&numbers, -1, "один"), None);
}

#[test]
fn last_disabled() {
    let numbers = Numbers::new(NumbersOptions {
        negative_one_is_last: false,
        ..NumbersOptions::default()
    });
    let err = numbers.convert_to_auto(-1, "перший", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

// ---------------------------------------------------------------------------
// Hints and helpers
// ---------------------------------------------------------------------------

#[test]
fn hints_select_among_readings() {
    let numbers = strict();
    // "третій" is masc nomn first, femn datv with a hint
    let plain = numbers.convert_to_auto(5, "третій", None).unwrap();
    assert_eq!(plain.as_deref(), Some("пʼятий"));
    let hinted = numbers
        .convert_to_auto(5, "третій", Some(&["femn", "datv"][..]))
        .unwrap();
    assert_eq!(hinted.as_deref(), Some("пʼятій"));
}

#[test]
fn count_agreement() {
    let numbers = strict();
    let desiatok = numbers
        .analyzer()
        .parse("десятків")
        .into_iter()
        .next()
        .unwrap();
    assert_eq!(numbers.make_agree_with_number(&desiatok, 1).word, "десяток");
    assert_eq!(numbers.make_agree_with_number(&desiatok, 3).word, "десятки");
    assert_eq!(numbers.make_agree_with_number(&desiatok, 14).word, "десятків");
}

#[test]
fn metadata_splits_phrases() {
    let m = NumberMetadata::from_number(Some(3));
    assert_eq!(m.n(), Some(3));
    assert_eq!(m.trailing_zeroes(), 0);
    assert!(!m.is_negative());
    assert!(!m.is_multi_word());

    assert!(NumberMetadata::from_number(None).is_last());

    assert!(NumberMetadata::from_number(Some(100)).is_multi_word());
    assert!(NumberMetadata::from_number(Some(500)).is_multi_word());

    let mut m = NumberMetadata::from_number(Some(100_000));
    assert!(m.is_multi_word());
    m.set_complete_base_form("сто тисяч");
    assert_eq!(m.beginning_of_number(), Some("сто"));
    assert_eq!(m.base_form(), Some("тисяч"));
}

#[test]
fn shared_between_threads() {
    let numbers = std::sync::Arc::new(strict());
    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let numbers = std::sync::Arc::clone(&numbers);
            std::thread::spawn(move || numbers.convert_to_auto(n, "тридцятому", None))
        })
        .collect();
    let words: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap().unwrap())
        .collect();
    assert_eq!(words, vec!["першому", "другому", "третьому", "четвертому"]);
}
