use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::normalization::normalize_chars;
use crate::rule_engine::RuleEngine;
use crate::tables::OrderingTables;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SorterConfig {
    pub parallel_keys: bool,
    pub parallel_threshold: usize,
    pub strip_bom: bool,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            parallel_keys: true,
            parallel_threshold: 4096,
            strip_bom: true,
        }
    }
}

/// Two-level collation key: consonantal skeleton first, then the full
/// consonant and vowel sequence as a tiebreak.
///
/// The derived ordering compares `key1` before `key2`, each lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SortKey {
    pub key1: Vec<u32>,
    pub key2: Vec<u32>,
}

pub struct HebrewSorter {
    tables: &'static OrderingTables,
    rule_engine: RuleEngine,
    config: SorterConfig,
}

impl HebrewSorter {
    pub fn new(config: SorterConfig) -> Self {
        Self {
            tables: OrderingTables::global(),
            rule_engine: RuleEngine::new(),
            config,
        }
    }

    pub fn config(&self) -> &SorterConfig {
        &self.config
    }

    pub fn substitutions(&self, word: &str) -> String {
        normalize_chars(word, self.tables, &self.rule_engine)
            .into_iter()
            .collect()
    }

    pub fn sortkey(&self, word: &str) -> SortKey {
        let normalized = normalize_chars(word, self.tables, &self.rule_engine);
        tracing::trace!(word, normalized = normalized.len(), "derived key");

        let mut key1 = Vec::with_capacity(normalized.len());
        let mut key2 = Vec::with_capacity(normalized.len());
        for c in normalized {
            if let Some(r) = self.tables.consonant_rank(c) {
                key1.push(r);
                key2.push(r);
            } else if let Some(r) = self.tables.vowel_rank(c) {
                key2.push(r);
            }
        }
        SortKey { key1, key2 }
    }

    /// Returns the words in non-decreasing key order. Ties keep their input order.
    pub fn ivsort<S>(&self, words: &[S]) -> Vec<S>
    where
        S: AsRef<str> + Clone + Sync,
    {
        self.sort_with_keys(words)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }

    pub fn sort_with_keys<S>(&self, words: &[S]) -> Vec<(S, SortKey)>
    where
        S: AsRef<str> + Clone + Sync,
    {
        let mut keyed: Vec<(usize, SortKey)> = self.derive_keys(words).into_iter().enumerate().collect();
        // slice::sort_by is stable
        keyed.sort_by(|a, b| a.1.cmp(&b.1));
        keyed
            .into_iter()
            .map(|(i, key)| (words[i].clone(), key))
            .collect()
    }

    fn derive_keys<S>(&self, words: &[S]) -> Vec<SortKey>
    where
        S: AsRef<str> + Sync,
    {
        let parallel = self.config.parallel_keys && words.len() >= self.config.parallel_threshold;
        tracing::debug!(words = words.len(), parallel, "deriving sort keys");
        if parallel {
            words.par_iter().map(|w| self.sortkey(w.as_ref())).collect()
        } else {
            words.iter().map(|w| self.sortkey(w.as_ref())).collect()
        }
    }
}

impl Default for HebrewSorter {
    fn default() -> Self {
        Self::new(SorterConfig::default())
    }
}

pub fn sortkey(word: &str) -> SortKey {
    HebrewSorter::default().sortkey(word)
}

pub fn ivsort<S>(words: &[S]) -> Vec<S>
where
    S: AsRef<str> + Clone + Sync,
{
    HebrewSorter::default().ivsort(words)
}
