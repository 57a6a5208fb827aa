use super::helpers::TypeDescriptor;
use crate::extractors::base::Field;
use tree_sitter::Node;

/// Field, parameter and result list extraction for Go
impl super::GoExtractor {
    /// Fields of a member list, parameter list or bare result type
    ///
    /// `x, y int` expands to one field per name. An absent list yields no
    /// fields; a bare result type (`func f() error`) yields one unnamed field.
    pub(super) fn extract_field_list(&self, list: Option<Node>) -> Vec<Field> {
        let Some(list) = list else {
            return Vec::new();
        };

        match list.kind() {
            "field_declaration_list" | "parameter_list" => {
                let mut fields = Vec::new();
                let mut cursor = list.walk();
                for child in list.named_children(&mut cursor) {
                    match child.kind() {
                        "field_declaration"
                        | "parameter_declaration"
                        | "variadic_parameter_declaration" => {
                            fields.extend(self.extract_fields(child));
                        }
                        _ => {}
                    }
                }
                fields
            }
            _ => vec![self.resolve_type(list).into_field()],
        }
    }

    /// One specification, expanded per declared name
    fn extract_fields(&self, spec: Node) -> Vec<Field> {
        let template = self.extract_field(spec);
        let names = self.base.get_field_texts(&spec, "name");

        if names.is_empty() {
            return vec![template];
        }

        names
            .into_iter()
            .map(|name| Field {
                name,
                ..template.clone()
            })
            .collect()
    }

    fn extract_field(&self, spec: Node) -> Field {
        let descriptor = match spec.kind() {
            // `args ...T` is not a shape the model describes
            "variadic_parameter_declaration" => TypeDescriptor::unresolved(spec.kind()),
            _ => match spec.child_by_field_name("type") {
                Some(type_node) if self.is_embedded_pointer(spec) => {
                    let mut descriptor = self.resolve_type(type_node);
                    descriptor.is_pointer = descriptor.kind.is_resolved();
                    descriptor
                }
                Some(type_node) => self.resolve_type(type_node),
                None => TypeDescriptor::unresolved(spec.kind()),
            },
        };

        let mut field = descriptor.into_field();
        field.tag = self.base.get_field_text(&spec, "tag").unwrap_or_default();
        field.doc_lines = self.base.find_doc_comment(&spec);
        field.comment_lines = self.base.find_line_comment(&spec);
        field
    }

    /// Embedded `*T` members keep the star outside the type node
    fn is_embedded_pointer(&self, spec: Node) -> bool {
        spec.kind() == "field_declaration" && self.base.find_child_by_type(&spec, "*").is_some()
    }
}
