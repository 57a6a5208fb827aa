use crate::extractors::base::{Field, TypeKind};
use tree_sitter::Node;

/// Semantic description of a type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub type_name: String,
    pub package_name: String,
    pub is_pointer: bool,
    pub is_slice: bool,
    pub kind: TypeKind,
}

impl TypeDescriptor {
    fn resolved(type_name: String, package_name: String, kind: TypeKind) -> Self {
        Self {
            type_name,
            package_name,
            is_pointer: false,
            is_slice: false,
            kind,
        }
    }

    /// Empty descriptor remembering which node kind was not modeled
    pub fn unresolved(node_kind: &str) -> Self {
        Self {
            type_name: String::new(),
            package_name: String::new(),
            is_pointer: false,
            is_slice: false,
            kind: TypeKind::Unresolved {
                node_kind: node_kind.to_string(),
            },
        }
    }

    fn pointer(mut self) -> Self {
        if self.kind.is_resolved() {
            self.is_pointer = true;
        }
        self
    }

    /// Slices stay slices even when the element shape is not modeled
    fn slice(mut self) -> Self {
        self.is_slice = true;
        self
    }

    /// Build an unnamed field carrying this type
    pub fn into_field(self) -> Field {
        Field {
            name: String::new(),
            type_name: self.type_name,
            package_name: self.package_name,
            is_slice: self.is_slice,
            is_pointer: self.is_pointer,
            kind: self.kind,
            tag: String::new(),
            doc_lines: Vec::new(),
            comment_lines: Vec::new(),
        }
    }
}

/// Type expression resolution for Go
impl super::GoExtractor {
    /// Resolve a type expression node against the unit's imports
    ///
    /// Pointers and slices compose (`*[]pkg.T`, `[]*pkg.T`); shapes the model
    /// does not describe come back as `TypeKind::Unresolved`.
    pub(super) fn resolve_type(&self, node: Node) -> TypeDescriptor {
        match node.kind() {
            "type_identifier" => TypeDescriptor::resolved(
                self.base.get_node_text(&node),
                String::new(),
                TypeKind::Named,
            ),
            "qualified_type" => self.resolve_qualified_type(node),
            "pointer_type" => match self.pointee(node) {
                Some(pointee) => self.resolve_type(pointee).pointer(),
                None => TypeDescriptor::unresolved(node.kind()),
            },
            // Fixed-size arrays are modeled like slices
            "slice_type" | "array_type" => match node.child_by_field_name("element") {
                Some(element) => self.resolve_slice_element(element).slice(),
                None => TypeDescriptor::unresolved(node.kind()),
            },
            "map_type" => self.resolve_map_type(node),
            other => TypeDescriptor::unresolved(other),
        }
    }

    /// Slice elements: bare name, qualified name, or a pointer to either
    fn resolve_slice_element(&self, element: Node) -> TypeDescriptor {
        match element.kind() {
            "type_identifier" | "qualified_type" => self.resolve_type(element),
            "pointer_type" => match self.pointee(element) {
                Some(pointee) if matches!(pointee.kind(), "type_identifier" | "qualified_type") => {
                    self.resolve_type(pointee).pointer()
                }
                Some(pointee) => TypeDescriptor::unresolved(pointee.kind()),
                None => TypeDescriptor::unresolved(element.kind()),
            },
            other => TypeDescriptor::unresolved(other),
        }
    }

    /// `alias.Name`; an unknown alias leaves the package empty
    fn resolve_qualified_type(&self, node: Node) -> TypeDescriptor {
        let alias = self.base.get_field_text(&node, "package");
        let name = self.base.get_field_text(&node, "name");
        match (alias, name) {
            (Some(alias), Some(name)) => {
                let package_name = self.imports.get(&alias).cloned().unwrap_or_default();
                TypeDescriptor::resolved(
                    format!("{}.{}", alias, name),
                    package_name,
                    TypeKind::Qualified,
                )
            }
            _ => TypeDescriptor::unresolved(node.kind()),
        }
    }

    /// `map[K]V` as one opaque name; key and value must be bare names
    fn resolve_map_type(&self, node: Node) -> TypeDescriptor {
        let key = node.child_by_field_name("key");
        let value = node.child_by_field_name("value");
        match (key, value) {
            (Some(key), Some(value))
                if key.kind() == "type_identifier" && value.kind() == "type_identifier" =>
            {
                TypeDescriptor::resolved(
                    format!(
                        "map[{}]{}",
                        self.base.get_node_text(&key),
                        self.base.get_node_text(&value)
                    ),
                    String::new(),
                    TypeKind::Map,
                )
            }
            _ => TypeDescriptor::unresolved(node.kind()),
        }
    }

    fn pointee<'t>(&self, pointer: Node<'t>) -> Option<Node<'t>> {
        let mut cursor = pointer.walk();
        let pointee = pointer
            .named_children(&mut cursor)
            .find(|child| child.kind() != "comment");
        pointee
    }
}
