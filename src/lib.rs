// goannotations core - declaration model extraction for Go sources
//
// Parses Go files with tree-sitter and produces a ParsedSources model
// (structs, operations, interfaces, typedefs, enums) for code generators.

pub mod error;
pub mod extractors;
pub mod language;
pub mod utils;

use std::path::Path;

pub use error::{ParseError, Result};
pub use extractors::{
    Enum, EnumLiteral, ExtractorManager, Field, Interface, Operation, ParseOptions, ParsedSources,
    Struct, TypeKind, Typedef,
};

/// Parse a single Go file with default options
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParsedSources> {
    ExtractorManager::new().parse_file(path.as_ref())
}

/// Parse every Go file in `dir` whose name matches `filename_pattern`
pub fn parse_directory(dir: impl AsRef<Path>, filename_pattern: &str) -> Result<ParsedSources> {
    ExtractorManager::new().parse_directory(dir.as_ref(), filename_pattern)
}

/// Parse Go source held in memory
pub fn parse_source(filename: &str, source: &str) -> Result<ParsedSources> {
    ExtractorManager::new().parse_source(filename, source)
}
