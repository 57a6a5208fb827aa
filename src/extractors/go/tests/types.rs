use super::{extract, field, MODEL_GO};
use crate::extractors::base::TypeKind;

const MONEY: &str = "github.com/example/shop/pkg/money";

fn person_fields() -> Vec<crate::extractors::base::Field> {
    let sources = extract("model.go", MODEL_GO);
    sources.find_struct("Person").unwrap().fields.clone()
}

#[test]
fn test_slice_and_pointer_flags() {
    let fields = person_fields();

    let tags = field(&fields, "Tags");
    assert_eq!(tags.type_name, "string");
    assert!(tags.is_slice && !tags.is_pointer);

    let orders = field(&fields, "Orders");
    assert_eq!(orders.type_name, "Order");
    assert!(orders.is_slice && orders.is_pointer, "[]*Order");
    assert_eq!(orders.package_name, "", "Local types have no package");
}

#[test]
fn test_pointer_slice_composition_both_orders() {
    let fields = person_fields();

    for name in ["Wallet", "Balance"] {
        let f = field(&fields, name);
        assert_eq!(f.type_name, "money.Amount", "{}", name);
        assert_eq!(f.package_name, MONEY, "{}", name);
        assert!(f.is_pointer, "{} should be a pointer", name);
        assert!(f.is_slice, "{} should be a slice", name);
        assert_eq!(f.kind, TypeKind::Qualified);
    }
}

#[test]
fn test_qualified_types_use_import_paths() {
    let fields = person_fields();

    let created = field(&fields, "Created");
    assert_eq!(created.type_name, "time.Time");
    assert_eq!(created.package_name, "time");
    assert!(!created.is_pointer);

    let logger = field(&fields, "Logger");
    assert_eq!(logger.type_name, "log.Logger");
    assert_eq!(logger.package_name, "github.com/sirupsen/logrus", "Explicit alias");
    assert!(logger.is_pointer);
}

#[test]
fn test_map_with_bare_key_and_value() {
    let fields = person_fields();

    let attributes = field(&fields, "Attributes");
    assert_eq!(attributes.type_name, "map[string]string");
    assert_eq!(attributes.kind, TypeKind::Map);
    assert!(!attributes.is_slice && !attributes.is_pointer);
}

#[test]
fn test_unmodeled_shapes_are_marked_unresolved() {
    let fields = person_fields();

    for (name, node_kind) in [
        ("Scores", "map_type"),
        ("Events", "channel_type"),
        ("Notify", "function_type"),
    ] {
        let f = field(&fields, name);
        assert_eq!(f.type_name, "", "{} has no type name", name);
        assert!(!f.is_pointer && !f.is_slice, "{} has no flags", name);
        assert_eq!(
            f.kind,
            TypeKind::Unresolved {
                node_kind: node_kind.to_string()
            },
            "{}",
            name
        );
    }
}

#[test]
fn test_array_is_modeled_as_slice() {
    let fields = person_fields();

    let matrix = field(&fields, "Matrix");
    assert_eq!(matrix.type_name, "int");
    assert!(matrix.is_slice);
}

#[test]
fn test_unknown_qualifier_leaves_package_empty() {
    let source = "package p\n\ntype T struct {\n\tWhen time.Time\n}\n";
    let sources = extract("t.go", source);

    let when = &sources.structs[0].fields[0];
    assert_eq!(when.type_name, "time.Time");
    assert_eq!(when.package_name, "");
    assert_eq!(when.kind, TypeKind::Qualified);
}

#[test]
fn test_slices_of_unmodeled_elements_keep_slice_flag() {
    let source = "package p\n\ntype Grid struct {\n\tCells [][]int\n\tRefs []**int\n\tRows []map[string]string\n\tHooks []func()\n\tFixed [4]chan int\n}\n";
    let sources = extract("grid.go", source);
    let fields = &sources.structs[0].fields;

    for (f, node_kind) in fields.iter().zip([
        "slice_type",
        "pointer_type",
        "map_type",
        "function_type",
        "channel_type",
    ]) {
        assert_eq!(
            f.kind,
            TypeKind::Unresolved {
                node_kind: node_kind.to_string()
            },
            "{}",
            f.name
        );
        assert!(f.is_slice, "{} is still a collection", f.name);
        assert!(!f.is_pointer, "{}", f.name);
        assert_eq!(f.type_name, "", "{}", f.name);
    }
    assert_eq!(fields.len(), 5);
}
