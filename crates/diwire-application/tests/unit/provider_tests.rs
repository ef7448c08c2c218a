//! Unit tests for provider rendering

use diwire_application::PackageSet;
use diwire_domain::source::{SourcePackage, SourceStruct};
use diwire_domain::{Dependency, Function};
use proptest::prelude::*;

use crate::fixtures::{fallible_pool, injector, type_ref, web_and_pool};

#[test]
fn test_render_web_and_pool() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/web.*Web"));
    let provider = injector(web_and_pool()).wire(&function).expect("wire");

    let expected = "\
import (
\tdb \"app.com/db\"
\tweb \"app.com/web\"
)

func Load() *web.Web {
\tpool := &db.Pool{}
\twebVar := &web.Web{DB: pool}
\treturn webVar
}
";
    assert_eq!(provider.render(), expected);
    assert_eq!(provider.to_string(), expected);
}

#[test]
fn test_render_error_slot_returns_nil() {
    let function = Function::new("Load", "app.com/gen")
        .with_result(type_ref("app.com/web.*Web"))
        .with_result(Dependency::Error);
    let provider = injector(fallible_pool()).wire(&function).expect("wire");

    assert_eq!(provider.render_signature(), "func Load() (*web.Web, error)");
    assert!(provider.render_function().ends_with("\treturn webVar, nil\n}\n"));
}

#[test]
fn test_target_package_is_not_imported() {
    let packages = PackageSet::new()
        .with_package(SourcePackage::new("app.com/gen").with_struct(SourceStruct::new("Pool")));
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/gen.*Pool"));
    let provider = injector(packages).wire(&function).expect("wire");

    assert!(provider.imports.is_empty());
    assert_eq!(provider.render_imports(), "");
    assert_eq!(
        provider.render(),
        "func Load() *Pool {\n\tpool := &Pool{}\n\treturn pool\n}\n"
    );
}

#[test]
fn test_empty_function_renders_without_return() {
    let provider = injector(PackageSet::new())
        .wire(&Function::new("Noop", "app.com/gen"))
        .expect("wire");
    assert_eq!(provider.render(), "func Noop() {\n}\n");
}

#[test]
fn test_imports_are_sorted_by_path() {
    let function = Function::new("Load", "app.com/gen").with_result(type_ref("app.com/web.*Web"));
    let provider = injector(web_and_pool()).wire(&function).expect("wire");
    let paths: Vec<&str> = provider.imports.iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, vec!["app.com/db", "app.com/web"]);
}

proptest! {
    #[test]
    fn prop_wire_is_deterministic(hoist in any::<bool>(), with_error in any::<bool>()) {
        let mut function = Function::new("Load", "app.com/gen")
            .with_result(type_ref("app.com/web.*Web"))
            .with_hoist(hoist);
        if with_error {
            function = function.with_result(Dependency::Error);
        }
        let first = injector(web_and_pool()).wire(&function).expect("wire").render();
        let second = injector(web_and_pool()).wire(&function).expect("wire").render();
        prop_assert_eq!(first, second);
    }
}
