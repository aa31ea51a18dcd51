use std::fs;
use std::io::{self, Read};
use std::process;

use typetrail_core::Model;
use typetrail_scraper::scrape;

use crate::cli::TraceArgs;

/// Read the trace (file or stdin) and build the model, exiting on failure.
pub fn load_model(args: &TraceArgs) -> Model {
    let path = &args.trace_file;

    let trace = if path.as_os_str() == "-" {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: failed to read stdin: {e}");
            process::exit(1);
        }
        buf
    } else {
        match fs::read_to_string(path) {
            Ok(trace) => trace,
            Err(e) => {
                eprintln!("error: failed to read {}: {e}", path.display());
                process::exit(1);
            }
        }
    };

    match scrape(&trace) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
