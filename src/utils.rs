// Hebrew code points the collation cares about.

pub const SPACE: char = ' ';
pub const MAQAF: char = '\u{05BE}';

pub const SHEVA: char = '\u{05B0}';
pub const HOLEM: char = '\u{05B9}';
pub const HOLEM_HASER_FOR_VAV: char = '\u{05BA}';
pub const QIBBUTS: char = '\u{05BB}';
pub const DAGESH: char = '\u{05BC}';
pub const SHIN_DOT: char = '\u{05C1}';
pub const SIN_DOT: char = '\u{05C2}';

pub const VAV: char = '\u{05D5}';
pub const SHIN: char = '\u{05E9}';

// Presentation forms used as single canonical units after normalization.
// All three are composition exclusions, so NFC never produces them on its own.
pub const SIN: char = '\u{FB2B}';
pub const HOLEM_VAV: char = '\u{FB4B}';
pub const SHUREQ: char = '\u{FB35}';

/// Vowel points proper, including the recomposed Holem-Vav and Shureq units.
/// Dagesh is not a vowel here.
pub fn is_vowel_cp(cp: char) -> bool {
    // Sheva .. Holem Haser for Vav
    if cp >= SHEVA && cp <= HOLEM_HASER_FOR_VAV { return true; }
    if cp == QIBBUTS { return true; }
    cp == HOLEM_VAV || cp == SHUREQ
}

pub fn is_vowel_or_dagesh_cp(cp: char) -> bool {
    cp == DAGESH || is_vowel_cp(cp)
}

pub fn is_hebrew_letter_cp(cp: char) -> bool {
    // Alef .. Tav, finals included
    (cp >= '\u{05D0}' && cp <= '\u{05EA}') || cp == SIN
}

pub fn is_cantillation_cp(cp: char) -> bool {
    cp >= '\u{0591}' && cp <= '\u{05AF}'
}

/// `U+05B9` style rendering used by the debug output.
pub fn code_point_label(cp: char) -> String {
    format!("U+{:04X}", cp as u32)
}
