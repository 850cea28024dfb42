use crate::cli::DescriptorArgs;

use super::input;

pub fn run(args: &DescriptorArgs) {
    if let Err(msg) = input::validate(args) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }

    let src = input::load(args);
    match input::parse_args(&src) {
        Ok(params) => {
            println!("ok: {} descriptor(s)", params.len());
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
