//! Error types

use std::path::PathBuf;

use quarry_levels::types::ParseError;
use thiserror::Error;

/// An error that stops an import.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Couldn't parse level")]
    Parse(#[from] ParseError),

    #[error("Couldn't read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid option {name}: {reason}")]
    InvalidOptions { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ImportError>;

/// Formats an error followed by everything that caused it, one cause per line.
pub fn full_error_display(err: &anyhow::Error) -> String {
    let mut out = format!("Error: {}", err);
    for cause in err.chain().skip(1) {
        out.push_str(&format!("\n    caused by: {}", cause));
    }

    out
}
