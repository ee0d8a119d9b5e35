use unicode_normalization::UnicodeNormalization;

use crate::rule_engine::RuleEngine;
use crate::tables::OrderingTables;
use crate::utils::{self, SHIN, SIN, SIN_DOT};

// At most this many vowel/dagesh marks may sit between Shin and its Sin dot.
const MAX_MARKS_BEFORE_SIN_DOT: usize = 2;

/// Canonicalizes a word into relevant characters only, with Sin/Shin and the
/// ambiguous Vav forms resolved to single units.
pub fn substitutions(word: &str) -> String {
    normalize_chars(word, OrderingTables::global(), &RuleEngine::new())
        .into_iter()
        .collect()
}

/// Output is a fixed point: feeding it back in returns it unchanged.
///
/// Absorbing a Holem that precedes its Vav emits Holem-Vav, which decomposes
/// back as Vav then Holem, so the decomposed form can shift under the rules.
/// The rules are rerun until the decomposed form is stable. Every rerun only
/// moves an absorbed Holem past its Vav, so the loop is bounded.
pub fn normalize_chars(word: &str, tables: &OrderingTables, rules: &RuleEngine) -> Vec<char> {
    let mut decomposed = decompose(word, tables);
    let mut resolved = rules.apply(&decomposed);

    let max_passes = decomposed.len() * decomposed.len() + 1;
    for _ in 0..max_passes {
        let text: String = resolved.iter().collect();
        let again = decompose(&text, tables);
        if again == decomposed {
            break;
        }
        decomposed = again;
        resolved = rules.apply(&decomposed);
    }
    resolved
}

// NFD, relevant characters only, Sin resolved.
fn decompose(word: &str, tables: &OrderingTables) -> Vec<char> {
    // Filtering keeps the decomposed order.
    let relevant: String = word.nfd().filter(|&c| tables.is_relevant(c)).collect();
    // Dropped starters can leave neighbouring marks out of canonical order.
    let canonical: Vec<char> = relevant.as_str().nfd().collect();
    resolve_sin(&canonical)
}

/// Rewrites `Shin marks{0,2} SinDot` as `Sin marks`.
///
/// NFD puts the Sin dot (ccc 25) after vowels and dagesh, so the dot usually
/// trails the marks that belong to the same letter.
pub fn resolve_sin(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == SHIN {
            let mut marks = 0;
            while marks < MAX_MARKS_BEFORE_SIN_DOT
                && chars.get(i + 1 + marks).map_or(false, |&m| utils::is_vowel_or_dagesh_cp(m))
            {
                marks += 1;
            }
            if chars.get(i + 1 + marks) == Some(&SIN_DOT) {
                out.push(SIN);
                out.extend_from_slice(&chars[i + 1..i + 1 + marks]);
                i += marks + 2;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out
}
