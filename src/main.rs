use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use miette::Result;
use serde::Serialize;

use ivsort::{HebrewSorter, IvsortError, SortKey, SorterConfig, WordList};

#[derive(Parser)]
#[command(name = "ivsort", version, about = "Sort pointed Hebrew words in lexicon order")]
struct Cli {
    /// Word list, one word per line. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Write the sorted list here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Worker threads used for key derivation.
    #[arg(long, default_value = "4")]
    threads: usize,

    /// Print each word with its sort key as a JSON line.
    #[arg(long)]
    keys: bool,

    /// JSON file with sorter settings.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
struct KeyedWord<'a> {
    word: &'a str,
    #[serde(flatten)]
    key: &'a SortKey,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    run(cli)?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), IvsortError> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SorterConfig::default(),
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(cli.threads)
        .build_global()?;

    let list = match &cli.file {
        Some(path) => WordList::load(path)?,
        None => WordList::from_reader(io::stdin().lock(), "stdin")?,
    };
    let words = list.words(config.strip_bom)?;
    tracing::info!(origin = list.origin(), words = words.len(), "sorting");

    let sorter = HebrewSorter::new(config);
    let sorted = sorter.sort_with_keys(&words);

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path).map_err(IvsortError::Output)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);

    write_sorted(&mut out, &sorted, cli.keys)?;
    out.flush().map_err(IvsortError::Output)?;
    Ok(())
}

/// One line per word, trailing whitespace removed. Keys were derived from the
/// untrimmed words.
fn write_sorted<W: Write>(out: &mut W, sorted: &[(&str, SortKey)], with_keys: bool) -> Result<(), IvsortError> {
    for (word, key) in sorted {
        let display = word.trim_end();
        if with_keys {
            let line = serde_json::to_string(&KeyedWord { word: display, key })
                .map_err(|e| IvsortError::Output(e.into()))?;
            writeln!(out, "{}", line).map_err(IvsortError::Output)?;
        } else {
            writeln!(out, "{}", display).map_err(IvsortError::Output)?;
        }
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<SorterConfig, IvsortError> {
    let file = File::open(path).map_err(|source| IvsortError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(io::BufReader::new(file)).map_err(|source| IvsortError::Config {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALEF: &str = "\u{05D0}";
    const AV_SPACED: &str = "\u{05D0}\u{05D1} \r";

    fn render(words: &[&str], with_keys: bool) -> String {
        let sorted = HebrewSorter::default().sort_with_keys(words);
        let mut out = Vec::new();
        write_sorted(&mut out, &sorted, with_keys).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_output_is_right_trimmed() {
        assert_eq!(render(&[AV_SPACED, ALEF], false), "\u{05D0}\n\u{05D0}\u{05D1}\n");
    }

    #[test]
    fn keys_come_from_the_untrimmed_word() {
        let text = render(&[AV_SPACED], true);
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["word"], "\u{05D0}\u{05D1}");
        // the trailing space still ranks as 0
        assert_eq!(value["key1"], serde_json::json!([1, 2, 0]));
        assert_eq!(value["key2"], serde_json::json!([1, 2, 0]));
    }

    #[test]
    fn one_json_line_per_word() {
        let text = render(&[AV_SPACED, ALEF], true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("{\"word\":\"\u{05D0}\",\"key1\":[1]"));
    }
}
