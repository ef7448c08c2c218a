//! Unit tests for graph resolution and the wire use case

use diwire_application::PackageSet;
use diwire_domain::source::{SourcePackage, SourceStruct};
use diwire_domain::{Declaration, Dependency, Error, External, Function, TypeName};

use crate::fixtures::{
    cyclic, dep, fallible_pool, injector, logger_interface, pair_provider, source_alias,
    source_alias_consumer, ty, type_ref, web_and_pool,
};

fn lines(provider: &diwire_application::Provider) -> Vec<String> {
    provider
        .body
        .iter()
        .flat_map(diwire_application::emitter::Statement::lines)
        .collect()
}

#[test]
fn test_wire_web_and_pool() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/web.*Web"));
    let provider = injector(web_and_pool()).wire(&function).expect("wire");

    assert_eq!(
        lines(&provider),
        vec![
            "pool := &db.Pool{}".to_string(),
            "webVar := &web.Web{DB: pool}".to_string(),
        ]
    );
    let results = provider.result_variables();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].import, "app.com/web");
    assert_eq!(results[0].name, "webVar");
    assert_eq!(results[0].type_name, TypeName::pointer("Web"));
}

#[test]
fn test_cycle_reports_full_chain() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/a.*A"));
    match injector(cyclic()).wire(&function) {
        Err(Error::Cycle { chain }) => {
            let ids: Vec<&str> = chain.ids().iter().map(|id| id.as_str()).collect();
            assert_eq!(
                ids,
                vec!["\"app.com/a\".*A", "\"app.com/b\".*B", "\"app.com/a\".*A"]
            );
        }
        other => panic!("expected Cycle, got {other:?}"),
    }
}

#[test]
fn test_unresolvable_reports_requesting_chain() {
    let packages = PackageSet::new().with_package(
        SourcePackage::new("app.com/web")
            .with_struct(SourceStruct::new("Web").with_field("DB", ty("app.com/db.*Pool"))),
    );
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/web.*Web"));
    match injector(packages).wire(&function) {
        Err(Error::Unresolvable { id, chain }) => {
            assert_eq!(id.as_str(), "\"app.com/db\".*Pool");
            let ids: Vec<&str> = chain.ids().iter().map(|id| id.as_str()).collect();
            assert_eq!(ids, vec!["\"app.com/web\".*Web", "\"app.com/db\".*Pool"]);
        }
        other => panic!("expected Unresolvable, got {other:?}"),
    }
}

#[test]
fn test_shared_dependency_constructed_once() {
    let packages = PackageSet::new()
        .with_package(SourcePackage::new("app.com/db").with_struct(SourceStruct::new("Pool")))
        .with_package(
            SourcePackage::new("app.com/web")
                .with_struct(
                    SourceStruct::new("Cache").with_field("DB", ty("app.com/db.*Pool")),
                )
                .with_struct(
                    SourceStruct::new("Web")
                        .with_field("DB", ty("app.com/db.*Pool"))
                        .with_field("Cache", ty("*Cache")),
                ),
        );
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/web.*Web"));
    let provider = injector(packages).wire(&function).expect("wire");

    assert_eq!(
        lines(&provider),
        vec![
            "pool := &db.Pool{}".to_string(),
            "cache := &web.Cache{DB: pool}".to_string(),
            "webVar := &web.Web{DB: pool, Cache: cache}".to_string(),
        ]
    );
}

#[test]
fn test_external_binds_directly() {
    let packages = web_and_pool();
    let function = Function::new("Load", "app.com/gen")
        .with_param(External::new(type_ref("app.com/db.*Pool")))
        .with_result(type_ref("app.com/web.*Web"));
    let provider = injector(packages).wire(&function).expect("wire");

    assert_eq!(provider.params.len(), 1);
    assert_eq!(provider.params[0].variable.name, "pool");
    assert_eq!(provider.params[0].type_expr, "*db.Pool");
    assert_eq!(lines(&provider), vec!["webVar := &web.Web{DB: pool}".to_string()]);
}

#[test]
fn test_external_covers_builtin_field() {
    let packages = PackageSet::new().with_package(
        SourcePackage::new("app.com/cfg")
            .with_struct(SourceStruct::new("Config").with_field("Name", ty("string"))),
    );
    let function = Function::new("Load", "app.com/gen")
        .with_param(External::new(type_ref("string")).with_name("name"))
        .with_result(type_ref("app.com/cfg.*Config"));
    let provider = injector(packages).wire(&function).expect("wire");

    assert_eq!(provider.render_signature(), "func Load(name string) *cfg.Config");
    assert_eq!(lines(&provider), vec!["config := &cfg.Config{Name: name}".to_string()]);
}

#[test]
fn test_duplicate_external_is_rejected() {
    let function = Function::new("Load", "app.com/gen")
        .with_param(External::new(type_ref("app.com/db.*Pool")))
        .with_param(External::new(type_ref("app.com/db.*Pool")))
        .with_result(type_ref("app.com/web.*Web"));
    assert!(matches!(
        injector(web_and_pool()).wire(&function),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_alias_redirects_interface_to_implementation() {
    let logger = dep("app.com/log.Logger");
    let function = Function::new("Load", "app.com/gen")
        .with_result(type_ref("app.com/web.*Web"))
        .with_alias(&logger, type_ref("app.com/log.*Console"));
    let provider = injector(logger_interface()).wire(&function).expect("wire");

    assert_eq!(
        lines(&provider),
        vec![
            "console := &log.Console{}".to_string(),
            "webVar := &web.Web{Log: console}".to_string(),
        ]
    );
}

#[test]
fn test_unaliased_interface_is_unresolvable() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/web.*Web"));
    assert!(matches!(
        injector(logger_interface()).wire(&function),
        Err(Error::Unresolvable { .. })
    ));
}

#[test]
fn test_alias_cycle_surfaces_from_wire() {
    let a = dep("app.com/x.A");
    let b = dep("app.com/x.B");
    let function = Function::new("Load", "app.com/gen")
        .with_result(a.clone())
        .with_alias(&a, b.clone())
        .with_alias(&b, a.clone());
    assert!(matches!(
        injector(PackageSet::new()).wire(&function),
        Err(Error::AliasCycle { .. })
    ));
}

#[test]
fn test_function_provider_with_error() {
    let function = Function::new("Load", "app.com/gen")
        .with_result(type_ref("app.com/web.*Web"))
        .with_result(Dependency::Error);
    let provider = injector(fallible_pool()).wire(&function).expect("wire");

    assert_eq!(
        lines(&provider),
        vec![
            "config := &db.Config{}".to_string(),
            "pool, err := db.Open(config)".to_string(),
            "if err != nil {".to_string(),
            "\treturn nil, err".to_string(),
            "}".to_string(),
            "webVar := &web.Web{DB: pool}".to_string(),
        ]
    );
}

#[test]
fn test_provider_error_without_error_result_is_unhandled() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/web.*Web"));
    match injector(fallible_pool()).wire(&function) {
        Err(Error::UnhandledError { provider, function }) => {
            assert_eq!(provider, "\"app.com/db\".Open");
            assert_eq!(function, "Load");
        }
        other => panic!("expected UnhandledError, got {other:?}"),
    }
}

#[test]
fn test_value_result_from_pointer_provider_is_dereferenced() {
    let function = Function::new("Load", "app.com/gen")
        .with_result(type_ref("app.com/db.Pool"))
        .with_result(Dependency::Error);
    let provider = injector(fallible_pool()).wire(&function).expect("wire");
    assert!(provider.render().contains("return *pool, nil"));
    assert!(provider.render().contains("return db.Pool{}, err"));
}

#[test]
fn test_source_alias_result_returns_underlying_value() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/db.*Store"));
    let provider = injector(source_alias()).wire(&function).expect("wire");

    assert_eq!(lines(&provider), vec!["pool := &db.Pool{}".to_string()]);
    let source = provider.render();
    assert!(source.contains("func Load() *db.Store {"));
    assert!(source.contains("\treturn pool\n"));
}

#[test]
fn test_source_alias_of_pointer_is_not_dereferenced() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/db.Handle"));
    let provider = injector(source_alias()).wire(&function).expect("wire");

    let source = provider.render();
    assert!(source.contains("func Load() db.Handle {"));
    assert!(source.contains("\tpool := &db.Pool{}\n\treturn pool\n"));
}

#[test]
fn test_source_alias_field_takes_underlying_value() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/web.*Web"));
    let provider = injector(source_alias_consumer())
        .wire(&function)
        .expect("wire");

    assert_eq!(
        lines(&provider),
        vec![
            "pool := &db.Pool{}".to_string(),
            "webVar := &web.Web{S: pool}".to_string(),
        ]
    );
}

#[test]
fn test_alias_wins_over_side_result_of_earlier_provider() {
    let logger = dep("app.com/x.Logger");
    let function = Function::new("Load", "app.com/gen")
        .with_result(type_ref("app.com/x.*A"))
        .with_result(logger.clone())
        .with_alias(&logger, type_ref("app.com/x.*Console"));
    let provider = injector(pair_provider()).wire(&function).expect("wire");

    assert_eq!(
        lines(&provider),
        vec![
            "a, _ := x.NewPair()".to_string(),
            "console := &x.Console{}".to_string(),
        ]
    );
    let source = provider.render();
    assert!(source.contains("func Load() (*x.A, x.Logger) {"));
    assert!(source.contains("\treturn a, console\n"));
}

#[test]
fn test_unconsumed_provider_results_are_blank() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/x.*A"));
    let provider = injector(pair_provider()).wire(&function).expect("wire");

    assert_eq!(lines(&provider), vec!["a, _ := x.NewPair()".to_string()]);
    assert_eq!(provider.result_variables()[0].name, "a");
}

#[test]
fn test_consumed_side_result_is_named() {
    let function = Function::new("Load", "app.com/gen")
        .with_result(type_ref("app.com/x.*A"))
        .with_result(type_ref("app.com/x.Logger"));
    let provider = injector(pair_provider()).wire(&function).expect("wire");

    assert_eq!(lines(&provider), vec!["a, logger := x.NewPair()".to_string()]);
    assert!(provider.render().contains("\treturn a, logger\n"));
}

#[test]
fn test_resolve_exposes_graph() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/web.*Web"));
    let graph = injector(web_and_pool()).resolve(&function).expect("resolve");

    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.order(), &[0, 1]);
    assert!(matches!(
        graph.node(1).map(|n| &n.declaration),
        Some(Declaration::Struct(_))
    ));
    assert_eq!(graph.node(1).map(|n| n.inputs.len()), Some(1));
}

#[test]
fn test_injector_is_shareable_across_threads() {
    let injector = std::sync::Arc::new(injector(web_and_pool()));
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/web.*Web"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let injector = std::sync::Arc::clone(&injector);
            let function = function.clone();
            std::thread::spawn(move || injector.wire(&function).expect("wire").render())
        })
        .collect();
    let rendered: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread"))
        .collect();
    assert!(rendered.windows(2).all(|w| w[0] == w[1]));
}
