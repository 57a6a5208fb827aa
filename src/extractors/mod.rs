//! Declaration Extractors Module
//!
//! Tree-sitter based extraction of the Go declaration model.
//!
//! # Architecture
//!
//! - `base` - model types, BaseExtractor and tree navigation helpers
//! - `go` - the per-unit Go extractor (tree visitor and declaration extractors)
//! - `linker` - post-pass reconciliation over the accumulated model
//! - `manager` - ExtractorManager public API (files, sources, directories)

pub mod base;
pub mod go;
pub mod linker;
pub mod manager;

// Re-export the public API
pub use base::{
    Enum, EnumLiteral, Field, Interface, Operation, ParseOptions, ParsedSources, Struct, TypeKind,
    Typedef,
};
pub use manager::ExtractorManager;
