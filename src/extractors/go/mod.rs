mod fields;
mod functions;
mod helpers;
mod specs;
mod types;

#[cfg(test)]
mod tests;

use crate::extractors::base::{BaseExtractor, ParsedSources};
use std::collections::HashMap;
use tracing::debug;
use tree_sitter::{Node, Tree};

pub use helpers::TypeDescriptor;

/// Go language extractor for one compilation unit.
///
/// Walks the syntax tree once and turns declarations into model entities:
/// - Structs, interfaces and simple type definitions
/// - Typed constant groups (enums)
/// - Functions and methods with receivers
///
/// The package name and the import aliases are scoped to the unit.
pub struct GoExtractor {
    base: BaseExtractor,
    package_name: String,
    /// Import alias -> import path
    imports: HashMap<String, String>,
}

/// A `type` declaration holding exactly one spec
#[derive(Debug, Clone, Copy)]
pub(super) struct TypeDecl<'t> {
    /// The `type_declaration` node; carries the doc comment
    pub decl: Node<'t>,
    pub name: Node<'t>,
    /// The spec's type expression
    pub target: Node<'t>,
}

/// Declaration shapes the visitor dispatches on, decided once per node
#[derive(Debug, Clone, Copy)]
pub(super) enum Declaration<'t> {
    Package(Node<'t>),
    Import(Node<'t>),
    Struct(TypeDecl<'t>),
    Interface(TypeDecl<'t>),
    Typedef(TypeDecl<'t>),
    ConstGroup(Node<'t>),
    Callable(Node<'t>),
}

impl<'t> Declaration<'t> {
    pub(super) fn classify(node: Node<'t>) -> Option<Self> {
        match node.kind() {
            "package_clause" => Some(Declaration::Package(node)),
            "import_spec" => Some(Declaration::Import(node)),
            "type_declaration" => Self::classify_type_declaration(node),
            "const_declaration" => Some(Declaration::ConstGroup(node)),
            kind if crate::language::get_function_node_kinds().contains(&kind) => {
                Some(Declaration::Callable(node))
            }
            _ => None,
        }
    }

    fn classify_type_declaration(node: Node<'t>) -> Option<Self> {
        let mut cursor = node.walk();
        let specs: Vec<Node<'t>> = node
            .named_children(&mut cursor)
            .filter(|child| matches!(child.kind(), "type_spec" | "type_alias"))
            .collect();

        // Grouped declarations with several specs are not modeled
        let [spec] = specs.as_slice() else {
            return None;
        };

        let decl = TypeDecl {
            decl: node,
            name: spec.child_by_field_name("name")?,
            target: spec.child_by_field_name("type")?,
        };

        match decl.target.kind() {
            "struct_type" => Some(Declaration::Struct(decl)),
            "interface_type" => Some(Declaration::Interface(decl)),
            "type_identifier" => Some(Declaration::Typedef(decl)),
            _ => None,
        }
    }
}

impl GoExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(file_path, content),
            package_name: String::new(),
            imports: HashMap::new(),
        }
    }

    /// Extract every declaration of the unit, in source order
    pub fn extract(&mut self, tree: &Tree) -> ParsedSources {
        let mut sources = ParsedSources::default();
        self.walk_tree(tree.root_node(), &mut sources);

        debug!(
            "Extracted {} structs, {} operations, {} interfaces, {} typedefs, {} enums from {}",
            sources.structs.len(),
            sources.operations.len(),
            sources.interfaces.len(),
            sources.typedefs.len(),
            sources.enums.len(),
            self.base.file_path
        );
        sources
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn imports(&self) -> &HashMap<String, String> {
        &self.imports
    }

    /// Pre-order walk visiting every node exactly once
    fn walk_tree(&mut self, root: Node, sources: &mut ParsedSources) {
        let mut cursor = root.walk();
        loop {
            self.visit(cursor.node(), sources);

            if cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }

    fn visit(&mut self, node: Node, sources: &mut ParsedSources) {
        let Some(declaration) = Declaration::classify(node) else {
            return;
        };

        let package_name = self.package_name.clone();
        let filename = self.base.file_path.clone();

        match declaration {
            Declaration::Package(clause) => {
                if let Some(name) = self.extract_package_name(clause) {
                    self.package_name = name;
                }
            }
            Declaration::Import(spec) => self.register_import(spec),
            Declaration::Struct(decl) => {
                let mut mstruct = self.extract_struct(&decl);
                mstruct.package_name = package_name;
                mstruct.filename = filename;
                sources.structs.push(mstruct);
            }
            Declaration::Interface(decl) => {
                let mut interface = self.extract_interface(&decl);
                for method in &mut interface.methods {
                    method.package_name.clone_from(&package_name);
                    method.filename.clone_from(&filename);
                }
                interface.package_name = package_name;
                interface.filename = filename;
                sources.interfaces.push(interface);
            }
            Declaration::Typedef(decl) => {
                let mut typedef = self.extract_typedef(&decl);
                typedef.package_name = package_name;
                typedef.filename = filename;
                sources.typedefs.push(typedef);
            }
            Declaration::ConstGroup(decl) => {
                if let Some(mut menum) = self.extract_enum(decl) {
                    menum.package_name = package_name;
                    menum.filename = filename;
                    sources.enums.push(menum);
                }
            }
            Declaration::Callable(decl) => {
                if let Some(mut operation) = self.extract_operation(decl) {
                    operation.package_name = package_name;
                    operation.filename = filename;
                    sources.operations.push(operation);
                }
            }
        }
    }
}
