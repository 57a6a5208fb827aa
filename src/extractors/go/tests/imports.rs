use super::{extract_with, MODEL_GO, SERVICE_GO};

#[test]
fn test_import_aliases() {
    let (_, extractor) = extract_with("model.go", MODEL_GO);
    let imports = extractor.imports();

    assert_eq!(imports.get("time").map(String::as_str), Some("time"));
    assert_eq!(
        imports.get("log").map(String::as_str),
        Some("github.com/sirupsen/logrus")
    );
    assert_eq!(
        imports.get("money").map(String::as_str),
        Some("github.com/example/shop/pkg/money"),
        "Last path segment when no alias is given"
    );
    assert!(!imports.contains_key("_"), "Blank imports are not registered");
    assert!(!imports.contains_key("pq"));
    assert_eq!(imports.len(), 3);
}

#[test]
fn test_dot_and_raw_imports() {
    let source = "package p\n\nimport (\n\t. \"strings\"\n\t`net/http`\n)\n";
    let (_, extractor) = extract_with("p.go", source);

    assert_eq!(extractor.imports().len(), 1, "Dot import skipped");
    assert_eq!(
        extractor.imports().get("http").map(String::as_str),
        Some("net/http")
    );
}

#[test]
fn test_single_import_without_parens() {
    let source = "package p\n\nimport ctx \"context\"\n\ntype T struct {\n\tC ctx.Context\n}\n";
    let (sources, extractor) = extract_with("p.go", source);

    assert_eq!(extractor.package_name(), "p");
    assert_eq!(sources.structs[0].fields[0].package_name, "context");
}

#[test]
fn test_imports_are_scoped_to_the_unit() {
    let (_, model) = extract_with("model.go", MODEL_GO);
    let (_, service) = extract_with("service.go", SERVICE_GO);

    assert!(model.imports().contains_key("money"));
    assert!(!service.imports().contains_key("money"));
    assert!(service.imports().contains_key("m"));
    assert_eq!(service.package_name(), "shop");
}
