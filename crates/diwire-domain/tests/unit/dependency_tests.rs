//! Unit tests for dependency specifiers

use diwire_domain::{Dependency, Error, StructField, TypeKind, TypeName, TypeRef};

#[test]
fn test_parse_specifier_forms() {
    let forms = [
        "app.com/db.*Pool",
        "\"app.com/db\".*Pool",
        "*app.com/db.Pool",
    ];
    for form in forms {
        let type_ref = TypeRef::parse(form).expect(form);
        assert_eq!(type_ref.import, "app.com/db", "{form}");
        assert_eq!(type_ref.type_name, TypeName::pointer("Pool"), "{form}");
    }

    let value = TypeRef::parse("app.com/db.Pool").expect("value specifier");
    assert_eq!(value.type_name, TypeName::new("Pool"));
    assert_eq!(value.kind, TypeKind::Unknown);
}

#[test]
fn test_parse_versioned_import_path() {
    let type_ref = TypeRef::parse("gopkg.in/yaml.v3.*Node").expect("versioned path");
    assert_eq!(type_ref.import, "gopkg.in/yaml.v3");
    assert_eq!(type_ref.type_name.to_string(), "*Node");
}

#[test]
fn test_parse_builtin() {
    let type_ref = TypeRef::parse("string").expect("builtin");
    assert!(type_ref.is_builtin());
    assert_eq!(type_ref.kind, TypeKind::Builtin);
    assert_eq!(type_ref.id().as_str(), "string");
}

#[test]
fn test_parse_error_sentinel() {
    assert_eq!(Dependency::parse("error").expect("sentinel"), Dependency::Error);
    assert!(Dependency::parse("error").expect("sentinel").is_error());
}

#[test]
fn test_parse_rejects_malformed_specifiers() {
    for bad in ["", "Pool", "\"app.com/db.Pool", "\"\".Pool", "app.com/db/", "app.com/db.9"] {
        match TypeRef::parse(bad) {
            Err(Error::InvalidSpecifier { spec, .. }) => assert_eq!(spec, bad),
            other => panic!("expected InvalidSpecifier for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_field_dependency_uses_field_type_id() {
    let owner = TypeRef::parse("app.com/web.*Web").expect("owner").id();
    let field = StructField::new(
        owner.clone(),
        "DB",
        TypeRef::parse("app.com/db.*Pool").expect("field type"),
    );
    let dependency = Dependency::from(field.clone());

    assert_eq!(field.owner, owner);
    assert!(field.is_exported());
    assert_eq!(dependency.id().as_str(), "\"app.com/db\".*Pool");
    assert_eq!(dependency.import_path(), "app.com/db");
    assert_eq!(dependency.type_ref().type_name, TypeName::pointer("Pool"));
}

#[test]
fn test_from_type_ref_detects_error() {
    assert!(Dependency::from(TypeRef::builtin("error")).is_error());
    assert!(!Dependency::from(TypeRef::builtin("string")).is_error());
}
