use refbind_lib::{Storage, element_types};

use crate::cli::DescriptorArgs;

use super::input;

pub fn run(args: &DescriptorArgs, json: bool) {
    if let Err(msg) = input::validate(args) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }

    let src = input::load(args);
    let params = input::parse_args(&src).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let storages = element_types(&params);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&storages).expect("report serialization")
        );
    } else {
        print!("{}", render(&storages));
    }
}

fn render(storages: &[Storage]) -> String {
    let mut out = String::new();
    for storage in storages {
        out.push_str(&storage.to_string());
        out.push('\n');
    }
    out
}
