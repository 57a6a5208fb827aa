//! Cross-declaration reconciliation
//!
//! Runs once over the fully accumulated model:
//! - methods are copied into the struct that owns their receiver type
//! - typedef documentation is propagated onto same-named enums

use crate::extractors::base::ParsedSources;
use std::collections::HashMap;
use tracing::trace;

/// Run both linking passes
pub fn link(sources: &mut ParsedSources) {
    embed_operations_in_structs(sources);
    embed_typedef_doc_lines_in_enums(sources);
}

/// Append every receiver-bound operation to its struct, in extraction order
///
/// Structs are keyed by `(package, name)` rather than by name alone, so
/// identically named types in two packages never share methods.
pub fn embed_operations_in_structs(sources: &mut ParsedSources) {
    let index: HashMap<(String, String), usize> = sources
        .structs
        .iter()
        .enumerate()
        .map(|(i, s)| ((s.package_name.clone(), s.name.clone()), i))
        .collect();

    for operation in &sources.operations {
        let Some(receiver) = operation.receiver_type_name() else {
            continue;
        };

        let key = (operation.package_name.clone(), receiver.to_string());
        match index.get(&key) {
            Some(&i) => sources.structs[i].operations.push(operation.clone()),
            None => trace!(
                "No struct {}.{} for method {}",
                operation.package_name,
                receiver,
                operation.name
            ),
        }
    }
}

/// Copy the doc lines of the first same-named typedef onto each enum
pub fn embed_typedef_doc_lines_in_enums(sources: &mut ParsedSources) {
    for menum in &mut sources.enums {
        if let Some(typedef) = sources.typedefs.iter().find(|t| t.name == menum.name) {
            menum.doc_lines.clone_from(&typedef.doc_lines);
        }
    }
}
