// Choosing one parse out of the analyzer's candidates, and the pure parse
// adjustments applied before inflection.

use std::collections::BTreeSet;

use ukr_core::tag::{ADJF, COMPB, NPRO, NUMR, SING, VERB};
use ukr_core::{Parse, Tag};
use ukr_morph::Analyzer;

/// Parts of speech preferred whenever the analyzer offers them.
pub const POS_WHITELIST: &[&str] = &[ADJF, NUMR];

/// Parts of speech that collide with numerals ("один" the pronoun, "три"
/// the verb) and are never chosen.
pub const POS_BLACKLIST: &[&str] = &[NPRO, VERB];

/// Grammemes that cannot be carried from one lexeme to another.
pub const GRAMMEMES_TO_DISCARD: &[&str] = &[COMPB];

fn pos_in(parse: &Parse, list: &[&str]) -> bool {
    parse.pos().is_some_and(|pos| list.contains(&pos))
}

/// Pick the best parse.
///
/// Whitelisted parts of speech win if any are present, blacklisted ones are
/// dropped. Without `known` hints (or with an empty set) the first remaining
/// candidate is returned. With hints, the candidate sharing the most
/// grammemes with `known` wins, earliest first on ties; if nothing shares a
/// grammeme the first remaining candidate is returned.
///
/// Returns `None` only when every candidate was blacklisted.
pub fn filter_by_grammemes<'p>(
    parses: &'p [Parse],
    known: Option<&BTreeSet<String>>,
    whitelist: &[&str],
    blacklist: &[&str],
) -> Option<&'p Parse> {
    let mut candidates: Vec<&Parse> = parses.iter().filter(|p| pos_in(p, whitelist)).collect();
    if candidates.is_empty() {
        candidates = parses.iter().collect();
    }
    candidates.retain(|p| !pos_in(p, blacklist));

    let first = candidates.first().copied();
    let known = match known {
        Some(known) if !known.is_empty() => known,
        _ => return first,
    };

    let mut best: Option<(&Parse, usize)> = None;
    for parse in candidates {
        let score = parse.tag.overlap(known.iter().map(String::as_str));
        if score > 0 && best.is_none_or(|(_, b)| score > b) {
            best = Some((parse, score));
        }
    }
    best.map(|(parse, _)| parse).or(first)
}

/// Add `sing` to a parse that carries no grammatical number.
///
/// Singular gendered adjective and numeral forms are tagged without it.
pub fn add_singular(parse: &Parse) -> Parse {
    if parse.tag.number().is_some() {
        parse.clone()
    } else {
        parse.with_tag(parse.tag.with(SING))
    }
}

/// Drop grammemes listed in [`GRAMMEMES_TO_DISCARD`].
pub fn remove_bad_grammemes(tag: &Tag) -> Tag {
    GRAMMEMES_TO_DISCARD
        .iter()
        .fold(tag.clone(), |tag, bad| tag.without(bad))
}

/// Apply `grammemes` to `parse` one at a time.
///
/// A grammeme the analyzer cannot satisfy is skipped and the next one is
/// applied to the last successful parse.
pub fn inflect_sequentially<'g, A>(
    analyzer: &A,
    parse: &Parse,
    grammemes: impl IntoIterator<Item = &'g str>,
) -> Parse
where
    A: Analyzer + ?Sized,
{
    grammemes.into_iter().fold(parse.clone(), |current, grammeme| {
        let single = BTreeSet::from([grammeme.to_string()]);
        analyzer.inflect(&current, &single).unwrap_or(current)
    })
}
