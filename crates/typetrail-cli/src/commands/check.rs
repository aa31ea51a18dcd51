use typetrail_core::Model;

use crate::cli::TraceArgs;
use crate::util;

pub fn run(args: &TraceArgs) {
    let model = util::load_model(args);
    println!("{}", summarize(&model));
}

fn summarize(model: &Model) -> String {
    let tracked: usize = model.typesets().values().map(|ts| ts.len()).sum();
    format!(
        "{} typesets, {} constraints, {} tracked types",
        model.typesets().len(),
        model.constraints().len(),
        tracked,
    )
}
