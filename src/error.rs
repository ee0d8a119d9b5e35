//! Errors raised at the I/O boundary. Key derivation and sorting never fail.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum IvsortError {
    #[error("failed to read word list {}", path.display())]
    #[diagnostic(
        code(ivsort::io::read),
        help("Check that the file exists and is readable, or pipe the words on stdin instead.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read words from {origin}")]
    #[diagnostic(code(ivsort::io::stream))]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin} is not valid UTF-8 (first bad byte at offset {offset})")]
    #[diagnostic(
        code(ivsort::io::encoding),
        help("Word lists must be UTF-8 encoded. Re-encode the file, e.g. with `iconv -t UTF-8`.")
    )]
    InvalidUtf8 { origin: String, offset: usize },

    #[error("failed to write sorted output")]
    #[diagnostic(code(ivsort::io::write))]
    Output(#[source] std::io::Error),

    #[error("invalid sorter config {}", path.display())]
    #[diagnostic(
        code(ivsort::config),
        help("The config is a JSON object with optional `parallel_keys`, `parallel_threshold` and `strip_bom` fields.")
    )]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build the worker pool")]
    #[diagnostic(code(ivsort::threads))]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type IvsortResult<T> = std::result::Result<T, IvsortError>;
