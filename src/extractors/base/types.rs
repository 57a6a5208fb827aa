// Declaration model types
//
// Plain data produced by the Go extractor and consumed by code generators.
// Ownership is tree-shaped: ParsedSources owns every entity, and the only
// cross-reference (operation -> struct) is carried by name until linking.

use serde::{Deserialize, Serialize};

/// Configuration for a parse invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Log every parsed syntax tree as an S-expression at debug level
    pub dump_syntax_tree: bool,
}

impl ParseOptions {
    pub fn with_syntax_tree_dump(mut self, enabled: bool) -> Self {
        self.dump_syntax_tree = enabled;
        self
    }
}

/// How a field's type expression was understood by the resolver
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TypeKind {
    /// Bare type name (`int`, `Person`)
    #[default]
    Named,
    /// Package-qualified name (`time.Time`)
    Qualified,
    /// `map[K]V` with bare key and value names
    Map,
    /// A shape the model does not describe (channels, funcs, generics, ...)
    Unresolved {
        /// Grammar node kind that could not be modeled
        node_kind: String,
    },
}

impl TypeKind {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, TypeKind::Unresolved { .. })
    }
}

/// A struct member, function parameter, function result or method receiver
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    /// Empty for embedded members and unnamed parameters/results
    pub name: String,
    /// `Name`, `alias.Name` or `map[K]V`
    pub type_name: String,
    /// Import path behind the qualifier of a qualified type
    pub package_name: String,
    pub is_slice: bool,
    pub is_pointer: bool,
    pub kind: TypeKind,
    /// Raw tag literal including its delimiters
    pub tag: String,
    pub doc_lines: Vec<String>,
    /// Trailing comment on the same line as the member
    pub comment_lines: Vec<String>,
}

/// A callable: free function, struct method or interface method
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub package_name: String,
    pub filename: String,
    pub doc_lines: Vec<String>,
    /// The receiver; only present for methods declared on a type
    pub related_struct: Option<Field>,
    pub input_args: Vec<Field>,
    pub output_args: Vec<Field>,
}

impl Operation {
    /// Type name of the receiver, if this operation is a method
    pub fn receiver_type_name(&self) -> Option<&str> {
        self.related_struct
            .as_ref()
            .map(|receiver| receiver.type_name.as_str())
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Struct {
    pub name: String,
    pub package_name: String,
    pub filename: String,
    pub doc_lines: Vec<String>,
    pub fields: Vec<Field>,
    /// Methods whose receiver names this struct; filled by the linker
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub package_name: String,
    pub filename: String,
    pub doc_lines: Vec<String>,
    pub methods: Vec<Operation>,
}

/// `type Name Underlying` where the underlying type is a bare name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Typedef {
    pub name: String,
    pub package_name: String,
    pub filename: String,
    pub doc_lines: Vec<String>,
    pub type_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumLiteral {
    pub name: String,
    /// First basic literal assigned to the constant, unquoted; may be empty
    pub value: String,
}

/// A typed constant group
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    pub package_name: String,
    pub filename: String,
    /// Copied from the typedef of the same name during linking
    pub doc_lines: Vec<String>,
    pub literals: Vec<EnumLiteral>,
}

/// Everything extracted by one parse invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedSources {
    pub structs: Vec<Struct>,
    pub operations: Vec<Operation>,
    pub interfaces: Vec<Interface>,
    pub typedefs: Vec<Typedef>,
    pub enums: Vec<Enum>,
}

impl ParsedSources {
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
            && self.operations.is_empty()
            && self.interfaces.is_empty()
            && self.typedefs.is_empty()
            && self.enums.is_empty()
    }

    /// Append every sequence of `other`, keeping its order
    pub fn extend(&mut self, other: ParsedSources) {
        self.structs.extend(other.structs);
        self.operations.extend(other.operations);
        self.interfaces.extend(other.interfaces);
        self.typedefs.extend(other.typedefs);
        self.enums.extend(other.enums);
    }

    pub fn find_struct(&self, name: &str) -> Option<&Struct> {
        self.structs.iter().find(|s| s.name == name)
    }

    pub fn find_interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    pub fn find_typedef(&self, name: &str) -> Option<&Typedef> {
        self.typedefs.iter().find(|t| t.name == name)
    }

    pub fn find_enum(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn find_operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|o| o.name == name)
    }
}
