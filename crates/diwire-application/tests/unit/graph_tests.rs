//! Unit tests for hoisting and graph inspection

use diwire_application::PackageSet;
use diwire_domain::source::{SourcePackage, SourceStruct};
use diwire_domain::{External, Function};

use crate::fixtures::{injector, ty, type_ref, web_and_pool};

/// `Web{DB *Pool, Svc *Service}` where `Service{Log *log.Logger}` and the
/// logger is a parameter
fn hoistable() -> PackageSet {
    PackageSet::new()
        .with_package(SourcePackage::new("app.com/db").with_struct(SourceStruct::new("Pool")))
        .with_package(
            SourcePackage::new("app.com/svc").with_struct(
                SourceStruct::new("Service").with_field("Log", ty("app.com/log.*Logger")),
            ),
        )
        .with_package(
            SourcePackage::new("app.com/web").with_struct(
                SourceStruct::new("Web")
                    .with_field("DB", ty("app.com/db.*Pool"))
                    .with_field("Svc", ty("app.com/svc.*Service")),
            ),
        )
}

fn function(hoist: bool) -> Function {
    Function::new("Load", "app.com/gen")
        .with_param(External::new(type_ref("app.com/log.*Logger")))
        .with_result(type_ref("app.com/web.*Web"))
        .with_hoist(hoist)
}

fn statements(hoist: bool) -> Vec<String> {
    injector(hoistable())
        .wire(&function(hoist))
        .expect("wire")
        .body
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_without_hoist_emits_post_order() {
    assert_eq!(
        statements(false),
        vec![
            "pool := &db.Pool{}".to_string(),
            "service := &svc.Service{Log: logger}".to_string(),
            "webVar := &web.Web{DB: pool, Svc: service}".to_string(),
        ]
    );
}

#[test]
fn test_hoist_moves_externally_derived_nodes_first() {
    assert_eq!(
        statements(true),
        vec![
            "service := &svc.Service{Log: logger}".to_string(),
            "pool := &db.Pool{}".to_string(),
            "webVar := &web.Web{DB: pool, Svc: service}".to_string(),
        ]
    );
}

#[test]
fn test_hoisted_flags() {
    let graph = injector(hoistable()).resolve(&function(true)).expect("resolve");
    let hoisted: Vec<bool> = graph.order().iter().map(|&i| graph.nodes()[i].hoisted).collect();
    assert_eq!(hoisted, vec![false, true, false]);

    let graph = injector(hoistable()).resolve(&function(false)).expect("resolve");
    assert!(graph.nodes().iter().all(|n| !n.hoisted));
}

#[test]
fn test_display_and_dot() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/web.*Web"));
    let graph = injector(web_and_pool()).resolve(&function).expect("resolve");

    let text = graph.to_string();
    assert!(text.contains("n0: struct \"app.com/db\".*Pool"));
    assert!(text.contains("n1: struct \"app.com/web\".*Web <- n0.0"));
    assert!(text.contains("result \"app.com/web\".*Web <- n1.0"));

    let dot = graph.to_dot();
    assert!(dot.starts_with("digraph Wire {"));
    assert!(dot.contains("n0 -> n1;"));
    assert!(dot.trim_end().ends_with('}'));
}
