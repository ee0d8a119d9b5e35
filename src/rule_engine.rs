use crate::utils::{self, DAGESH, HOLEM, HOLEM_VAV, SHUREQ, VAV};

/// Resolves Vav forms that can be read either as a consonant or as a vowel.
///
/// Runs a single left-to-right pass. At each position the rules are tried in
/// order; a match consumes the pair and emits one unit, and scanning resumes
/// after the pair, so rewritten text is never matched again.
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        RuleEngine
    }

    pub fn apply(&self, chars: &[char]) -> Vec<char> {
        let mut out = Vec::with_capacity(chars.len());
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            // Rule 1 & 2: Holem next to Vav (either order) becomes Holem-Vav
            // unless the Vav carries its own vowel.
            let holem_pair = (c == HOLEM && next == Some(VAV)) || (c == VAV && next == Some(HOLEM));
            if holem_pair && absorbs_holem(out.last().copied(), chars.get(i + 2).copied()) {
                out.push(HOLEM_VAV);
                i += 2;
                continue;
            }

            // Rule 3: Vav + Dagesh is always Shureq
            if c == VAV && next == Some(DAGESH) {
                out.push(SHUREQ);
                i += 2;
                continue;
            }

            out.push(c);
            i += 1;
        }
        out
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

// `prev` is the last emitted character, `after` the one following the pair.
fn absorbs_holem(prev: Option<char>, after: Option<char>) -> bool {
    if let Some(a) = after {
        if utils::is_vowel_or_dagesh_cp(a) { return false; }
    }
    if let Some(p) = prev {
        if utils::is_vowel_cp(p) { return false; }
    }
    true
}
