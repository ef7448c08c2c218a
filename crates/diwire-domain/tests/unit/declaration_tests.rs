//! Unit tests for declarations and the target function model

use diwire_domain::{
    Declaration, Dependency, External, Function, FunctionProvider, Struct, TypeKind, TypeName,
    TypeRef,
};

fn pool() -> TypeRef {
    TypeRef::parse("app.com/db.*Pool").expect("pool")
}

#[test]
fn test_struct_dependencies_follow_field_order() {
    let web = Struct::new("app.com/web", TypeName::pointer("Web"))
        .with_field("DB", pool())
        .with_field("Name", TypeRef::builtin("string"));

    let deps = web.dependencies();
    assert_eq!(deps.len(), 2);
    assert_eq!(deps[0].id().as_str(), "\"app.com/db\".*Pool");
    assert_eq!(deps[1].id().as_str(), "string");
    match &deps[0] {
        Dependency::Field(field) => assert_eq!(field.owner, web.id()),
        other => panic!("expected field dependency, got {other:?}"),
    }
    assert_eq!(web.type_ref().kind, TypeKind::Struct);
}

#[test]
fn test_function_provider_slots_skip_error() {
    let provider = FunctionProvider {
        import: "app.com/db".to_string(),
        package: None,
        name: "Open".to_string(),
        params: vec![],
        results: vec![
            TypeRef::parse("app.com/db.*Pool").expect("pool"),
            TypeRef::builtin("error"),
            TypeRef::parse("app.com/db.*Stats").expect("stats"),
        ],
        provides: 2,
    };

    assert!(provider.returns_error());
    assert_eq!(provider.value_results().count(), 2);
    assert_eq!(provider.provided_slot(), 1);
    assert_eq!(provider.id().as_str(), "\"app.com/db\".*Stats");

    let declaration = Declaration::Function(provider);
    let ids: Vec<_> = declaration
        .provided_ids()
        .into_iter()
        .map(|(id, slot)| (id.to_string(), slot))
        .collect();
    assert_eq!(
        ids,
        vec![
            ("\"app.com/db\".*Pool".to_string(), 0),
            ("\"app.com/db\".*Stats".to_string(), 1),
        ]
    );
}

#[test]
fn test_external_and_error_have_no_dependencies() {
    let external = Declaration::External(External::new(pool()).with_name("db"));
    assert!(external.is_external());
    assert!(external.dependencies().is_empty());
    assert!(Declaration::Error.dependencies().is_empty());
    assert!(Declaration::Error.provided_ids().is_empty());
}

#[test]
fn test_function_builder() {
    let logger = Dependency::parse("app.com/log.Logger").expect("logger");
    let function = Function::new("Load", "app.com/gen")
        .with_param(pool())
        .with_result(TypeRef::parse("app.com/web.*Web").expect("web"))
        .with_result(Dependency::Error)
        .with_alias(&logger, TypeRef::parse("app.com/log.*Console").expect("console"))
        .with_hoist(true);

    assert_eq!(function.params.len(), 1);
    assert!(function.has_error_result());
    assert!(function.aliases.contains(&logger.id()));
    assert!(function.hoist);
}
