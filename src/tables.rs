use std::collections::HashMap;
use std::sync::OnceLock;

use crate::utils::{DAGESH, MAQAF, SHIN_DOT, SIN_DOT, SPACE};

/// Consonants in collation order. The rank of a consonant is its index.
/// Final forms sit right before their medial forms and Sin (U+FB2B) right
/// before Shin.
pub const CONSONANT_ORDER: [char; 29] = [
    SPACE,
    '\u{05D0}', // alef
    '\u{05D1}', // bet
    '\u{05D2}', // gimel
    '\u{05D3}', // dalet
    '\u{05D4}', // he
    '\u{05D5}', // vav
    '\u{05D6}', // zayin
    '\u{05D7}', // het
    '\u{05D8}', // tet
    '\u{05D9}', // yod
    '\u{05DA}', // final kaf
    '\u{05DB}', // kaf
    '\u{05DC}', // lamed
    '\u{05DD}', // final mem
    '\u{05DE}', // mem
    '\u{05DF}', // final nun
    '\u{05E0}', // nun
    '\u{05E1}', // samekh
    '\u{05E2}', // ayin
    '\u{05E3}', // final pe
    '\u{05E4}', // pe
    '\u{05E5}', // final tsadi
    '\u{05E6}', // tsadi
    '\u{05E7}', // qof
    '\u{05E8}', // resh
    '\u{FB2B}', // sin
    '\u{05E9}', // shin
    '\u{05EA}', // tav
];

/// Vowel tier in collation order, ranked from `VOWEL_OFFSET` upwards.
pub const VOWEL_ORDER: [char; 15] = [
    '\u{05B0}', // sheva
    '\u{05B1}', // hataf segol
    '\u{05B2}', // hataf patah
    '\u{05B3}', // hataf qamets
    '\u{05B4}', // hiriq
    '\u{05B5}', // tsere
    '\u{05B6}', // segol
    '\u{05B7}', // patah
    '\u{05B8}', // qamets
    '\u{05B9}', // holem
    '\u{05BA}', // holem haser for vav
    '\u{FB4B}', // holem-vav
    '\u{05BB}', // qibbuts
    '\u{FB35}', // shureq
    DAGESH,
];

pub const VOWEL_OFFSET: u32 = 100;

/// Rank tables for the two key levels. Built once, read-only afterwards.
#[derive(Debug)]
pub struct OrderingTables {
    consonants: HashMap<char, u32>,
    vowels: HashMap<char, u32>,
}

static TABLES: OnceLock<OrderingTables> = OnceLock::new();

impl OrderingTables {
    pub fn new() -> Self {
        let mut consonants: HashMap<char, u32> = CONSONANT_ORDER
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as u32))
            .collect();
        consonants.insert(MAQAF, consonants[&SPACE]);

        let vowels = VOWEL_ORDER
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, VOWEL_OFFSET + i as u32))
            .collect();

        Self { consonants, vowels }
    }

    /// Process-wide tables.
    pub fn global() -> &'static OrderingTables {
        TABLES.get_or_init(OrderingTables::new)
    }

    pub fn consonant_rank(&self, c: char) -> Option<u32> {
        self.consonants.get(&c).copied()
    }

    pub fn vowel_rank(&self, c: char) -> Option<u32> {
        self.vowels.get(&c).copied()
    }

    pub fn rank(&self, c: char) -> Option<u32> {
        self.consonant_rank(c).or_else(|| self.vowel_rank(c))
    }

    /// Characters that survive normalization. The Shin and Sin dots carry no
    /// rank but are needed to tell the two letters apart.
    pub fn is_relevant(&self, c: char) -> bool {
        c == SHIN_DOT || c == SIN_DOT || self.rank(c).is_some()
    }
}

impl Default for OrderingTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{HOLEM_VAV, SHIN, SHUREQ, SIN};

    #[test]
    fn maqaf_ranks_with_space() {
        let t = OrderingTables::global();
        assert_eq!(t.consonant_rank(MAQAF), Some(0));
        assert_eq!(t.consonant_rank(SPACE), Some(0));
    }

    #[test]
    fn sin_directly_before_shin() {
        let t = OrderingTables::global();
        let sin = t.consonant_rank(SIN).unwrap();
        let shin = t.consonant_rank(SHIN).unwrap();
        assert_eq!(sin + 1, shin);
        assert_eq!(t.consonant_rank('\u{05EA}'), Some(shin + 1));
    }

    #[test]
    fn consonant_ranks_strictly_increase() {
        let t = OrderingTables::new();
        let ranks: Vec<u32> = CONSONANT_ORDER
            .iter()
            .map(|&c| t.consonant_rank(c).unwrap())
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn vowels_rank_above_every_consonant() {
        let t = OrderingTables::global();
        let max_consonant = CONSONANT_ORDER
            .iter()
            .filter_map(|&c| t.consonant_rank(c))
            .max()
            .unwrap();
        for &v in VOWEL_ORDER.iter() {
            assert!(t.vowel_rank(v).unwrap() > max_consonant);
            assert_eq!(t.consonant_rank(v), None);
        }
    }

    #[test]
    fn vowel_sequence_is_linguistic_not_code_point() {
        let t = OrderingTables::global();
        assert_eq!(t.vowel_rank('\u{05B0}'), Some(100));
        assert_eq!(t.vowel_rank('\u{05B5}'), Some(105)); // tsere
        assert_eq!(t.vowel_rank('\u{05B8}'), Some(108)); // qamets
        assert_eq!(t.vowel_rank(HOLEM_VAV), Some(111));
        assert_eq!(t.vowel_rank('\u{05BB}'), Some(112));
        assert_eq!(t.vowel_rank(SHUREQ), Some(113));
        assert_eq!(t.vowel_rank(DAGESH), Some(114));
    }

    #[test]
    fn dots_are_relevant_but_unranked() {
        let t = OrderingTables::global();
        assert!(t.is_relevant(SHIN_DOT));
        assert!(t.is_relevant(SIN_DOT));
        assert_eq!(t.rank(SHIN_DOT), None);
        assert_eq!(t.rank(SIN_DOT), None);
        assert!(!t.is_relevant('\u{0591}'));
        assert!(!t.is_relevant('.'));
        assert!(!t.is_relevant('\n'));
    }
}
