//! Shared descriptor loading for all subcommands.

use std::fs;
use std::io::{self, Read};

use refbind_core::{ModelError, Param, parse_param, parse_params};

use crate::cli::DescriptorArgs;

pub fn validate(args: &DescriptorArgs) -> Result<(), &'static str> {
    if args.descriptor_text.is_none() && args.descriptor_file.is_none() {
        return Err("descriptor input required: -d/--descriptor or --descriptor-file");
    }
    Ok(())
}

pub fn load(args: &DescriptorArgs) -> String {
    if let Some(ref text) = args.descriptor_text {
        return text.clone();
    }
    if let Some(ref path) = args.descriptor_file {
        if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .expect("failed to read stdin");
            return buf;
        }
        return fs::read_to_string(path).expect("failed to read descriptor file");
    }
    unreachable!()
}

/// Parse either a single descriptor object or a descriptor array into an
/// ordered argument list.
pub fn parse_args(src: &str) -> Result<Vec<Param>, ModelError> {
    if src.trim_start().starts_with('[') {
        parse_params(src)
    } else {
        parse_param(src).map(|param| vec![param])
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn single_object_becomes_one_element_list() {
        let params = parse_args(r#"{"type": "int"}"#).unwrap();
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn array_keeps_arity() {
        let params = parse_args(indoc! {r#"
            [
                {"type": "int"},
                {"ref_mark": {"type": "double"}}
            ]
        "#})
        .unwrap();
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn leading_whitespace_does_not_confuse_detection() {
        let params = parse_args("  \n [{\"type\": \"int\"}]").unwrap();
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn model_errors_propagate() {
        let err = parse_args(r#"{"const": true}"#).unwrap_err();
        assert!(matches!(err, ModelError::MissingKind));
    }
}
