//! Error types for Go source parsing.
//!
//! Every variant means a compilation unit (or the directory holding it) could
//! not be turned into a syntax tree. Declarations that merely have an
//! unfamiliar shape are never reported here; extractors skip them.

use std::path::PathBuf;

/// Errors that abort a parse invocation.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error in {} at {line}:{column}", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("{} has no package clause", path.display())]
    MissingPackageClause { path: PathBuf },

    #[error("invalid filename pattern '{pattern}': {source}")]
    InvalidFilenamePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to configure Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("parser produced no syntax tree for {}", path.display())]
    TreeConstruction { path: PathBuf },
}

impl ParseError {
    /// The file or directory the error refers to, when there is one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ParseError::Io { path, .. }
            | ParseError::Syntax { path, .. }
            | ParseError::MissingPackageClause { path }
            | ParseError::TreeConstruction { path } => Some(path),
            ParseError::InvalidFilenamePattern { .. } | ParseError::Grammar(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
