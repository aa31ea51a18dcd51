use serde_json::json;

use typetrail_core::Model;

use crate::cli::TraceArgs;
use crate::util;

pub fn run(args: &TraceArgs, types: bool, json: bool) {
    let model = util::load_model(args);
    if json {
        println!("{}", render_json(&model, types));
    } else {
        print!("{}", render_text(&model, types));
    }
}

fn render_text(model: &Model, types: bool) -> String {
    let mut out = String::new();
    for (id, typeset) in model.typesets() {
        out.push_str(id);
        out.push('\n');
        if types {
            for ty in typeset.type_names() {
                out.push_str("  ");
                out.push_str(ty);
                out.push('\n');
            }
        }
    }
    out
}

fn render_json(model: &Model, types: bool) -> String {
    let value = if types {
        let mut map = serde_json::Map::new();
        for (id, typeset) in model.typesets() {
            map.insert(id.clone(), json!(typeset.type_names().collect::<Vec<_>>()));
        }
        serde_json::Value::Object(map)
    } else {
        json!(model.typesets().keys().collect::<Vec<_>>())
    };
    value.to_string()
}
