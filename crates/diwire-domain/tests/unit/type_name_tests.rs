//! Unit tests for type descriptors and dependency IDs

use diwire_domain::{DependencyId, TypeKind, TypeName, is_exported, is_identifier};
use proptest::prelude::*;

#[test]
fn test_parse_value_and_pointer() {
    let value = TypeName::parse("Pool").expect("value type");
    assert_eq!(value.base(), "Pool");
    assert_eq!(value.pointer_depth(), 0);
    assert!(!value.is_pointer());

    let pointer = TypeName::parse("*Pool").expect("pointer type");
    assert_eq!(pointer.base(), "Pool");
    assert_eq!(pointer.pointer_depth(), 1);
    assert_eq!(pointer.to_string(), "*Pool");
    assert_eq!(pointer.elem(), value);
}

#[test]
fn test_parse_rejects_invalid_names() {
    assert!(TypeName::parse("").is_err());
    assert!(TypeName::parse("*").is_err());
    assert!(TypeName::parse("9Lives").is_err());
    assert!(TypeName::parse("db.Pool").is_err());
}

#[test]
fn test_builtin_and_exported() {
    assert!(TypeName::new("string").is_builtin());
    assert!(TypeName::pointer("int64").is_builtin());
    assert!(!TypeName::new("Pool").is_builtin());
    assert!(TypeName::new("Pool").is_exported());
    assert!(!TypeName::new("pool").is_exported());
    assert!(is_exported("DB"));
    assert!(!is_exported(""));
    assert!(is_identifier("_private1"));
    assert!(!is_identifier("go-redis"));
}

#[test]
fn test_dependency_id_keeps_single_pointer_marker() {
    let value = DependencyId::new("app.com/db", &TypeName::new("Pool"));
    let pointer = DependencyId::new("app.com/db", &TypeName::pointer("Pool"));
    let double = DependencyId::new("app.com/db", &TypeName::new("Pool").with_depth(2));

    assert_eq!(value.as_str(), "\"app.com/db\".Pool");
    assert_eq!(pointer.as_str(), "\"app.com/db\".*Pool");
    assert_ne!(value, pointer);
    assert_eq!(double, pointer);
}

#[test]
fn test_builtin_id_is_bare_name() {
    let id = DependencyId::new("", &TypeName::new("string"));
    assert_eq!(id.to_string(), "string");
}

#[test]
fn test_type_kind_display() {
    assert_eq!(TypeKind::Interface.to_string(), "interface");
    assert_eq!(TypeKind::default(), TypeKind::Unknown);
    assert!(TypeKind::Interface.is_interface());
    assert!(!TypeKind::Struct.is_interface());
}

proptest! {
    #[test]
    fn prop_rendered_type_parses_back(base in "[A-Z][A-Za-z0-9_]{0,12}", depth in 0u8..3) {
        let name = TypeName::new(base).with_depth(depth);
        let parsed = TypeName::parse(&name.to_string()).expect("rendered type parses");
        prop_assert_eq!(parsed, name);
    }
}
