use refbind_lib::{Element, construction_plan};

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

    let plan = construction_plan(&params);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&plan).expect("report serialization")
        );
    } else {
        print!("{}", render(&plan));
    }
}

fn render(plan: &[Element]) -> String {
    let mut out = String::new();
    for (i, element) in plan.iter().enumerate() {
        out.push_str(&format!(
            "{}: {} ({})\n",
            i, element.storage, element.forward
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use refbind_lib::{Param, Ty, construction_plan};

    use super::*;

    #[test]
    fn renders_index_storage_and_forwarding() {
        let plan = construction_plan(&[
            Param::rvalue(Ty::named("int")),
            Param::direct(Ty::ref_mark(Ty::named("double"))),
        ]);
        assert_eq!(render(&plan), "0: value int (move)\n1: alias double (bind)\n");
    }
}
