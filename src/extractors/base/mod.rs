// Base extractor types shared by the Go extractor, the linker and the manager
//
// - types.rs: the declaration model (ParsedSources, Struct, Operation, Field, ...)
// - extractor.rs: BaseExtractor (node text, lead and line comments)
// - tree_methods.rs: tree navigation helpers

pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{
    Enum, EnumLiteral, Field, Interface, Operation, ParseOptions, ParsedSources, Struct, TypeKind,
    Typedef,
};
