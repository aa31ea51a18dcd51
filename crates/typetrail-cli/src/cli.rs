use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "typetrail", bin_name = "typetrail")]
#[command(about = "Reconstruct type provenance from inference-engine traces")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a trace and report what the built model contains
    #[command(after_help = r#"EXAMPLES:
  typetrail check -t spew.log
  cat spew.log | typetrail check -t -"#)]
    Check {
        #[command(flatten)]
        trace: TraceArgs,
    },

    /// List the typesets tracked by a trace
    Typesets {
        #[command(flatten)]
        trace: TraceArgs,

        /// Also list each typeset's member types
        #[arg(long)]
        types: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Trace a type in a typeset back to its origin
    #[command(after_help = r#"EXAMPLES:
  typetrail path -t spew.log -s T42 -y int
  cat spew.log | typetrail path -t - -s T42 -y 'Array<int>' --json"#)]
    Path {
        #[command(flatten)]
        trace: TraceArgs,

        /// Typeset to query
        #[arg(short = 's', long = "typeset", value_name = "ID")]
        typeset: String,

        /// Type name to trace
        #[arg(short = 'y', long = "type", value_name = "TYPE")]
        ty: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct TraceArgs {
    /// Trace file (use "-" for stdin)
    #[arg(short = 't', long = "trace", value_name = "FILE")]
    pub trace_file: PathBuf,
}
