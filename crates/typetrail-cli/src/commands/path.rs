use serde_json::json;

use typetrail_core::Provenance;

use crate::cli::TraceArgs;
use crate::util;

pub fn run(args: &TraceArgs, typeset: &str, ty: &str, json: bool) {
    let model = util::load_model(args);

    // "No trail" is a distinct answer, not an error and not an unknown
    // origin: this pair was never traced at all.
    match model.path_of(typeset, ty) {
        Some(prov) if json => println!("{}", render_json(Some(&prov))),
        Some(prov) => print!("{}", render_text(typeset, ty, &prov)),
        None if json => println!("{}", render_json(None)),
        None => println!("no trail for `{ty}` in `{typeset}`"),
    }
}

fn render_text(typeset: &str, ty: &str, prov: &Provenance<'_>) -> String {
    let mut out = format!("{typeset} : {ty}\n");
    for constraint in &prov.path {
        out.push_str(&format!("  ⊇ {} via {}\n", constraint.source, constraint.kind));
    }
    out.push_str(&format!("…{}\n", prov.origin.explain()));
    out
}

fn render_json(prov: Option<&Provenance<'_>>) -> String {
    match prov {
        Some(prov) => json!({
            "found": true,
            "path": &prov.path,
            "origin": prov.origin,
        })
        .to_string(),
        None => json!({ "found": false }).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use indoc::indoc;
    use typetrail_scraper::scrape;

    fn prov_model() -> typetrail_core::Model {
        let trace = indoc! {"
            typeSet T1 0x10
            typeSet T2 0x20
            addConstraint T2 C1 inherits
            addType T1 string
            resolve C1 string
            addType T2 int
            bytecodeType a.js:4: int
        "};
        scrape(trace).unwrap()
    }

    #[test]
    fn text_renders_each_hop_and_the_origin() {
        let model = prov_model();
        let prov = model.path_of("T1", "string").unwrap();
        assert_eq!(
            render_text("T1", "string", &prov),
            "T1 : string\n  ⊇ T2 via inherits\n…and the trail runs cold\n"
        );
    }

    #[test]
    fn text_renders_a_direct_origin_without_hops() {
        let model = prov_model();
        let prov = model.path_of("T2", "int").unwrap();
        assert_eq!(
            render_text("T2", "int", &prov),
            "T2 : int\n…which was determined dynamically\n"
        );
    }

    #[test]
    fn json_carries_path_and_origin() {
        let model = prov_model();
        let prov = model.path_of("T1", "string").unwrap();
        assert_eq!(
            render_json(Some(&prov)),
            r#"{"found":true,"origin":"unknown","path":[{"kind":"inherits","source":"T2"}]}"#
        );
    }

    #[test]
    fn json_no_information() {
        assert_eq!(render_json(None), r#"{"found":false}"#);
    }
}
