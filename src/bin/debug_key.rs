use unicode_normalization::UnicodeNormalization;

use ivsort::utils::{self, code_point_label};
use ivsort::{HebrewSorter, OrderingTables};

fn describe(c: char, tables: &OrderingTables) -> String {
    let class = if tables.consonant_rank(c).is_some() {
        "consonant"
    } else if tables.vowel_rank(c).is_some() {
        "vowel"
    } else if tables.is_relevant(c) {
        "dot"
    } else if utils::is_cantillation_cp(c) {
        "cantillation (dropped)"
    } else {
        "dropped"
    };
    match tables.rank(c) {
        Some(r) => format!("{} {} rank {}", code_point_label(c), class, r),
        None => format!("{} {}", code_point_label(c), class),
    }
}

fn main() {
    let tables = OrderingTables::global();
    let sorter = HebrewSorter::default();

    for word in std::env::args().skip(1) {
        println!("Word: {}", word);
        println!("NFD:");
        for c in word.nfd() {
            println!("  {}", describe(c, tables));
        }
        println!("Normalized:");
        for c in sorter.substitutions(&word).chars() {
            let marker = if utils::is_hebrew_letter_cp(c) { "*" } else { " " };
            println!(" {}{}", marker, describe(c, tables));
        }
        let key = sorter.sortkey(&word);
        println!("Key1: {:?}", key.key1);
        println!("Key2: {:?}", key.key2);
        println!();
    }
}
