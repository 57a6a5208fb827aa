//! Language Support - tree-sitter configuration for Go sources
//!
//! ALL grammar-specific configuration lives here so the manager and the tests
//! build parsers the same way.

use tree_sitter::{Language, Parser};

/// File extension of Go compilation units
pub const GO_EXTENSION: &str = "go";

/// Get the tree-sitter language for Go
pub fn get_tree_sitter_language() -> Language {
    tree_sitter_go::LANGUAGE.into()
}

/// Create a parser configured for Go
pub fn new_parser() -> Result<Parser, tree_sitter::LanguageError> {
    let mut parser = Parser::new();
    parser.set_language(&get_tree_sitter_language())?;
    Ok(parser)
}

/// Detect language from file extension
///
/// Only Go is supported; any other extension yields `None`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        GO_EXTENSION => Some("go"),
        _ => None,
    }
}

/// AST node kinds that declare callables
pub fn get_function_node_kinds() -> &'static [&'static str] {
    &["function_declaration", "method_declaration"]
}
