use crate::extractors::base::{Enum, EnumLiteral};
use tracing::trace;
use tree_sitter::Node;

/// Literal kinds that count as a constant's value
const BASIC_LITERAL_KINDS: &[&str] = &[
    "interpreted_string_literal",
    "raw_string_literal",
    "int_literal",
    "float_literal",
    "imaginary_literal",
    "rune_literal",
];

/// Package clause, import spec and constant group extraction
impl super::GoExtractor {
    pub(super) fn extract_package_name(&self, clause: Node) -> Option<String> {
        self.base
            .find_child_by_type(&clause, "package_identifier")
            .map(|identifier| self.base.get_node_text(&identifier))
    }

    /// Record `alias -> path` for a single import spec
    ///
    /// Without an explicit alias the last path segment is used. Blank and dot
    /// imports never qualify a type, so they are not recorded.
    pub(super) fn register_import(&mut self, spec: Node) {
        let Some(path) = self.base.get_field_text(&spec, "path") else {
            return;
        };
        let path = path.trim_matches(|c| c == '"' || c == '`').to_string();

        let alias = match spec.child_by_field_name("name") {
            Some(name) if matches!(name.kind(), "blank_identifier" | "dot") => return,
            Some(name) => self.base.get_node_text(&name),
            None => path.rsplit('/').next().unwrap_or_default().to_string(),
        };

        trace!("import {} -> {}", alias, path);
        self.imports.insert(alias, path);
    }

    /// A `const` group where some spec names a type becomes an enum
    ///
    /// Every spec of the group becomes a literal, whether or not it repeats
    /// the type.
    pub(super) fn extract_enum(&self, decl: Node) -> Option<Enum> {
        let mut specs = self.base.find_children_by_type(&decl, "const_spec");
        // Some grammar revisions wrap parenthesized groups in a list node
        for list in self.base.find_children_by_type(&decl, "const_spec_list") {
            specs.extend(self.base.find_children_by_type(&list, "const_spec"));
        }
        let name = self.extract_enum_type_name(&specs)?;

        let literals = specs
            .iter()
            .filter_map(|spec| self.extract_enum_literal(*spec))
            .collect();

        Some(Enum {
            name,
            literals,
            ..Default::default()
        })
    }

    /// The type of the first spec that declares one, if it is a bare name
    fn extract_enum_type_name(&self, specs: &[Node]) -> Option<String> {
        let type_node = specs
            .iter()
            .find_map(|spec| spec.child_by_field_name("type"))?;

        (type_node.kind() == "type_identifier").then(|| self.base.get_node_text(&type_node))
    }

    fn extract_enum_literal(&self, spec: Node) -> Option<EnumLiteral> {
        let name = self.base.get_field_text(&spec, "name")?;

        // Only the first basic literal counts; `iota` and expressions leave it empty
        let value = spec
            .child_by_field_name("value")
            .and_then(|values| {
                let mut cursor = values.walk();
                let literal = values
                    .named_children(&mut cursor)
                    .find(|value| BASIC_LITERAL_KINDS.contains(&value.kind()));
                literal
            })
            .map(|literal| self.base.get_node_text(&literal).trim_matches('"').to_string())
            .unwrap_or_default();

        Some(EnumLiteral { name, value })
    }
}
