use super::TypeDecl;
use crate::extractors::base::{Interface, Operation, Struct, Typedef};
use tree_sitter::Node;

/// Type declaration extraction for Go (structs, interfaces, type definitions)
impl super::GoExtractor {
    pub(super) fn extract_struct(&self, decl: &TypeDecl) -> Struct {
        let members = self
            .base
            .find_child_by_type(&decl.target, "field_declaration_list");

        Struct {
            name: self.base.get_node_text(&decl.name),
            // Doc lines sit above the `type` keyword, not the spec
            doc_lines: self.base.find_doc_comment(&decl.decl),
            fields: self.extract_field_list(members),
            ..Default::default()
        }
    }

    pub(super) fn extract_interface(&self, decl: &TypeDecl) -> Interface {
        Interface {
            name: self.base.get_node_text(&decl.name),
            doc_lines: self.base.find_doc_comment(&decl.decl),
            methods: self.extract_interface_methods(decl.target),
            ..Default::default()
        }
    }

    pub(super) fn extract_typedef(&self, decl: &TypeDecl) -> Typedef {
        Typedef {
            name: self.base.get_node_text(&decl.name),
            doc_lines: self.base.find_doc_comment(&decl.decl),
            type_name: self.base.get_node_text(&decl.target),
            ..Default::default()
        }
    }

    /// Named method elements; embedded interfaces and type sets are skipped
    fn extract_interface_methods(&self, interface_node: Node) -> Vec<Operation> {
        let mut methods = Vec::new();
        let mut cursor = interface_node.walk();

        for child in interface_node.named_children(&mut cursor) {
            if !matches!(child.kind(), "method_elem" | "method_spec") {
                continue;
            }
            let Some(name) = self.base.get_field_text(&child, "name") else {
                continue;
            };

            methods.push(Operation {
                name,
                doc_lines: self.base.find_doc_comment(&child),
                related_struct: None,
                input_args: self.extract_field_list(child.child_by_field_name("parameters")),
                output_args: self.extract_field_list(child.child_by_field_name("result")),
                ..Default::default()
            });
        }

        methods
    }
}
