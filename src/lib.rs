//! Lexicon-style collation for pointed Hebrew.
//!
//! Words are ordered by consonantal skeleton first and by the full
//! consonant-and-vowel sequence second. Characters outside the ordering
//! tables (cantillation, punctuation, other scripts) are dropped before keys
//! are built, so words that differ only in such characters compare equal.

pub mod error;
pub mod hebrew_sorter;
pub mod normalization;
pub mod rule_engine;
pub mod tables;
pub mod utils;
pub mod wordlist;

pub use error::{IvsortError, IvsortResult};
pub use hebrew_sorter::{ivsort, sortkey, HebrewSorter, SortKey, SorterConfig};
pub use normalization::substitutions;
pub use tables::OrderingTables;
pub use wordlist::WordList;
