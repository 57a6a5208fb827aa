// Go extractor scenario tests
//
// Fixtures live in test_samples/ at the crate root.

mod imports;
mod types;

use super::GoExtractor;
use crate::extractors::base::{Field, ParsedSources};
use crate::language::new_parser;

pub(super) const MODEL_GO: &str = include_str!("../../../../test_samples/model.go");
pub(super) const ENUMS_GO: &str = include_str!("../../../../test_samples/enums.go");
pub(super) const SERVICE_GO: &str = include_str!("../../../../test_samples/service.go");

/// Run the extractor over one unit, without linking
pub(super) fn extract(filename: &str, source: &str) -> ParsedSources {
    let (sources, _) = extract_with(filename, source);
    sources
}

/// Like `extract`, also handing back the extractor for state inspection
pub(super) fn extract_with(filename: &str, source: &str) -> (ParsedSources, GoExtractor) {
    let mut parser = new_parser().expect("Go grammar should load");
    let tree = parser.parse(source, None).expect("tree-sitter should produce a tree");
    let mut extractor = GoExtractor::new(filename.to_string(), source.to_string());
    let sources = extractor.extract(&tree);
    (sources, extractor)
}

pub(super) fn field<'a>(fields: &'a [Field], name: &str) -> &'a Field {
    fields
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("field {} not found in {:?}", name, fields))
}
