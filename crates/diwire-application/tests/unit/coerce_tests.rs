//! Unit tests for reference-shape coercion

use diwire_application::emitter::coerce;
use diwire_domain::{Error, TypeKind, TypeName, Variable};

fn var(name: &str, type_name: TypeName, kind: TypeKind) -> Variable {
    Variable::new("app.com/db", name, type_name, kind)
}

#[test]
fn test_same_type_passes_through() {
    let pool = var("pool", TypeName::pointer("Pool"), TypeKind::Struct);
    let got = coerce(&TypeName::pointer("Pool"), TypeKind::Struct, &pool).expect("same type");
    assert_eq!(got, "pool");
}

#[test]
fn test_same_type_interface_wanted_takes_address() {
    let pool = var("pool", TypeName::new("Pool"), TypeKind::Struct);
    let got = coerce(&TypeName::new("Pool"), TypeKind::Interface, &pool).expect("interface");
    assert_eq!(got, "&pool");

    let logger = var("logger", TypeName::new("Logger"), TypeKind::Interface);
    let got = coerce(&TypeName::new("Logger"), TypeKind::Interface, &logger).expect("iface");
    assert_eq!(got, "logger");
}

#[test]
fn test_pointer_wanted_value_input() {
    let pool = var("pool", TypeName::new("Pool"), TypeKind::Struct);
    let got = coerce(&TypeName::pointer("Pool"), TypeKind::Struct, &pool).expect("address");
    assert_eq!(got, "&pool");
}

#[test]
fn test_value_wanted_pointer_input() {
    let pool = var("pool", TypeName::pointer("Pool"), TypeKind::Struct);
    assert_eq!(
        coerce(&TypeName::new("Pool"), TypeKind::Struct, &pool).expect("deref"),
        "*pool"
    );
    assert_eq!(
        coerce(&TypeName::new("Pool"), TypeKind::Interface, &pool).expect("interface"),
        "pool"
    );
}

#[test]
fn test_interface_satisfied_by_other_type() {
    let console = var("console", TypeName::pointer("Console"), TypeKind::Struct);
    let got = coerce(&TypeName::new("Logger"), TypeKind::Interface, &console).expect("ptr");
    assert_eq!(got, "console");

    let console = var("console", TypeName::new("Console"), TypeKind::Struct);
    let got = coerce(&TypeName::new("Logger"), TypeKind::Interface, &console).expect("value");
    assert_eq!(got, "&console");
}

#[test]
fn test_unrelated_shapes_are_internal_errors() {
    let pool = var("pool", TypeName::new("Pool").with_depth(2), TypeKind::Struct);
    assert!(matches!(
        coerce(&TypeName::new("Pool"), TypeKind::Struct, &pool),
        Err(Error::Coercion { .. })
    ));

    let cache = var("cache", TypeName::pointer("Cache"), TypeKind::Struct);
    match coerce(&TypeName::pointer("Pool"), TypeKind::Struct, &cache) {
        Err(Error::Coercion { wanted, input }) => {
            assert_eq!(wanted, "*Pool");
            assert_eq!(input, "cache *Cache");
        }
        other => panic!("expected Coercion, got {other:?}"),
    }
}
