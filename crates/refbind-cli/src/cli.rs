use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "refbind", bin_name = "refbind")]
#[command(about = "Storage-type normalization for inference-built containers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize argument descriptors to storage types
    #[command(after_help = r#"EXAMPLES:
  refbind normalize -d '{"type": "int"}'
  refbind normalize -d '{"binding": "lvalue", "ref_mark": {"type": "int"}}'
  refbind normalize --descriptor-file args.json --json"#)]
    Normalize {
        #[command(flatten)]
        input: DescriptorArgs,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Plan container elements: storage types plus forwarding modes
    #[command(after_help = r#"EXAMPLES:
  refbind elements -d '[{"type": "int"}, {"ref_mark": {"type": "double"}}]'
  refbind elements --descriptor-file args.json --json"#)]
    Elements {
        #[command(flatten)]
        input: DescriptorArgs,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate descriptor JSON without producing a report
    Check {
        #[command(flatten)]
        input: DescriptorArgs,
    },
}

#[derive(Args)]
#[group(id = "descriptor_input", multiple = false)]
pub struct DescriptorArgs {
    /// Descriptors as inline JSON (a single object or an array)
    #[arg(short = 'd', long = "descriptor", value_name = "JSON")]
    pub descriptor_text: Option<String>,

    /// Descriptor JSON from file (use "-" for stdin)
    #[arg(long = "descriptor-file", value_name = "FILE")]
    pub descriptor_file: Option<PathBuf>,
}
