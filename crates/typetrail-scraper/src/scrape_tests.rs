use indoc::indoc;

use typetrail_core::{Origin, TypeSource};

use crate::ScrapeError;
use crate::scrape::scrape;

#[test]
fn trace_without_recognized_events_builds_an_empty_model() {
    let trace = indoc! {"
        GC: starting collection
        some unrelated diagnostic output
        [infer]
    "};

    let model = scrape(trace).unwrap();
    assert!(model.typesets().is_empty());
    assert!(model.constraints().is_empty());
    assert_eq!(model.path_of("T1", "int"), None);
}

#[test]
fn construction_is_deterministic() {
    let trace = indoc! {"
        typeSet T2 0x10
        typeSet T1 0x20
        addConstraint T2 C1 inherits
        addType T1 string
        resolve C1 string
        addType T1 int
        addType T2 int
        analyze foo.js:3
    "};

    let first = scrape(trace).unwrap();
    let second = scrape(trace).unwrap();
    assert_eq!(first, second);

    let ids: Vec<_> = first.typesets().keys().cloned().collect();
    assert_eq!(ids, vec!["T2", "T1"]);
}

#[test]
fn resolve_with_a_single_pending_add_binds_the_constraint() {
    let trace = indoc! {"
        typeSet T1 0x10
        typeSet T2 0x20
        addConstraint T2 C1 inherits
        addType T1 string
        resolve C1 string
    "};

    let model = scrape(trace).unwrap();
    assert_eq!(
        model.typeset("T1").unwrap().type_from("string"),
        Some(&TypeSource::Constraint("C1".into()))
    );

    let prov = model.path_of("T1", "string").unwrap();
    assert_eq!(prov.path[0].kind, "inherits");
    assert_eq!(prov.path[0].source, "T2");
    assert_eq!(prov.origin, Origin::Unknown);
}

#[test]
fn resolve_with_multiple_pending_binds_nothing() {
    // With several adds in flight, attribution is ambiguous and the
    // resolve is dropped on the floor. Existing behavior, kept as-is.
    let trace = indoc! {"
        typeSet T1 0x10
        typeSet T2 0x20
        addConstraint T2 C1 inherits
        addType T1 string
        addType T1 int
        resolve C1 string
    "};

    let model = scrape(trace).unwrap();
    assert_eq!(model.path_of("T1", "string"), None);
    assert_eq!(model.path_of("T1", "int"), None);
}

#[test]
fn resolve_with_no_pending_adds_is_a_noop() {
    let trace = indoc! {"
        typeSet T1 0x10
        typeSet T2 0x20
        addConstraint T2 C1 inherits
        resolve C1 string
        addType T1 string
    "};

    let model = scrape(trace).unwrap();
    assert_eq!(model.path_of("T1", "string"), None);
}

#[test]
fn analyze_drains_all_pending_adds_as_static() {
    let trace = indoc! {"
        typeSet T1 0x10
        addType T1 int
        addType T1 string
        addType T1 object
        analyze foo.js:3
    "};

    let model = scrape(trace).unwrap();
    for ty in ["int", "string", "object"] {
        let prov = model.path_of("T1", ty).unwrap();
        assert!(prov.path.is_empty());
        assert_eq!(prov.origin, Origin::Static);
    }
}

#[test]
fn bytecode_type_drains_all_pending_adds_as_dynamic() {
    let trace = indoc! {"
        typeSet T1 0x10
        addType T1 number
        bytecodeType foo.js:7: number
    "};

    let model = scrape(trace).unwrap();
    let prov = model.path_of("T1", "number").unwrap();
    assert!(prov.path.is_empty());
    assert_eq!(prov.origin, Origin::Dynamic);
}

#[test]
fn unexplained_adds_remain_untracked() {
    let trace = indoc! {"
        typeSet T1 0x10
        addType T1 int
        addType T1 string
    "};

    let model = scrape(trace).unwrap();
    assert!(model.typeset_exists("T1"));
    assert_eq!(model.path_of("T1", "int"), None);
    assert_eq!(model.path_of("T1", "string"), None);
}

#[test]
fn explaining_events_only_cover_preceding_adds() {
    let trace = indoc! {"
        typeSet T1 0x10
        addType T1 int
        analyze foo.js:3
        addType T1 string
        bytecodeType foo.js:9: string
    "};

    let model = scrape(trace).unwrap();
    assert_eq!(
        model.path_of("T1", "int").unwrap().origin,
        Origin::Static
    );
    assert_eq!(
        model.path_of("T1", "string").unwrap().origin,
        Origin::Dynamic
    );
}

#[test]
fn later_bindings_overwrite_earlier_ones() {
    let trace = indoc! {"
        typeSet T1 0x10
        addType T1 int
        analyze foo.js:3
        addType T1 int
        bytecodeType foo.js:9: int
    "};

    let model = scrape(trace).unwrap();
    assert_eq!(model.path_of("T1", "int").unwrap().origin, Origin::Dynamic);
}

#[test]
fn add_type_to_undeclared_typeset_fails_construction() {
    let trace = indoc! {"
        addType T1 int
        analyze foo.js:3
    "};

    assert_eq!(
        scrape(trace),
        Err(ScrapeError::UnknownTypeset {
            line: 1,
            typeset: "T1".into(),
        })
    );
}

#[test]
fn resolve_of_undeclared_constraint_fails_construction() {
    let trace = indoc! {"
        typeSet T1 0x10
        addType T1 string
        resolve C9 string
    "};

    assert_eq!(
        scrape(trace),
        Err(ScrapeError::UnknownConstraint {
            line: 3,
            constraint: "C9".into(),
        })
    );
}

#[test]
fn constraint_from_undeclared_typeset_fails_construction() {
    let trace = indoc! {"
        typeSet T1 0x10
        addConstraint T9 C1 inherits
    "};

    assert_eq!(
        scrape(trace),
        Err(ScrapeError::UnknownConstraintSource {
            constraint: "C1".into(),
            typeset: "T9".into(),
        })
    );
}

#[test]
fn constraint_source_may_be_declared_later_in_the_trace() {
    let trace = indoc! {"
        addConstraint T2 C1 inherits
        typeSet T1 0x10
        typeSet T2 0x20
        addType T1 string
        resolve C1 string
    "};

    let model = scrape(trace).unwrap();
    assert_eq!(model.path_of("T1", "string").unwrap().path[0].source, "T2");
}

#[test]
fn typeset_redeclaration_collapses_to_one_allocation() {
    // Allocation all happens before any binding, so a redeclared typeset
    // still receives the bindings attributed to its identifier.
    let trace = indoc! {"
        typeSet T1 0x10
        addType T1 int
        analyze foo.js:3
        typeSet T1 0x20
    "};

    let model = scrape(trace).unwrap();
    assert_eq!(model.typesets().len(), 1);
    assert_eq!(model.path_of("T1", "int").unwrap().origin, Origin::Static);
}

#[test]
fn raw_spew_dialect_scrapes_like_the_bare_form() {
    let trace = indoc! {"
        [infer] typeSet: T1 0x10
        [infer] addType: T1 number
        [infer] bytecodeType: foo.js:7: number
    "};

    let model = scrape(trace).unwrap();
    assert_eq!(model.path_of("T1", "number").unwrap().origin, Origin::Dynamic);
}

#[test]
fn error_messages_name_the_offending_line() {
    let err = scrape("addType T1 int").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"line 1: adding type to nonexistent typeset `T1`"
    );

    let err = scrape("typeSet T1 0x10\naddType T1 x\nresolve C9 x").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"line 3: resolving nonexistent constraint `C9`"
    );
}

/// The worked end-to-end chain: a type propagates into T1 through C1 from
/// T2, and T2 itself has no record for it.
#[test]
fn end_to_end_constraint_chain_with_cold_trail() {
    let trace = indoc! {"
        typeSet T1 0x10
        typeSet T2 0x20
        addConstraint T2 C1 inherits
        addType T1 string
        resolve C1 string
    "};

    let model = scrape(trace).unwrap();
    let prov = model.path_of("T1", "string").unwrap();

    let hops: Vec<_> = prov
        .path
        .iter()
        .map(|c| (c.kind.as_str(), c.source.as_str()))
        .collect();
    assert_eq!(hops, vec![("inherits", "T2")]);
    assert_eq!(prov.origin, Origin::Unknown);
}

#[test]
fn end_to_end_two_hop_chain_reaches_the_origin() {
    let trace = indoc! {"
        typeSet T1 0x10
        typeSet T2 0x20
        typeSet T3 0x30
        addConstraint T3 C2 subset
        addType T2 int
        resolve C2 int
        addConstraint T2 C1 inherits
        addType T1 int
        resolve C1 int
        addType T3 int
        bytecodeType foo.js:12: int
    "};

    let model = scrape(trace).unwrap();
    let prov = model.path_of("T1", "int").unwrap();

    let hops: Vec<_> = prov
        .path
        .iter()
        .map(|c| (c.kind.as_str(), c.source.as_str()))
        .collect();
    assert_eq!(hops, vec![("inherits", "T2"), ("subset", "T3")]);
    assert_eq!(prov.origin, Origin::Dynamic);
}
