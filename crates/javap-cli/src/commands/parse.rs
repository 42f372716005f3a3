//! Parse input and print the tree, or the class record as JSON.

use javap_core::{Colors, LineIndex};
use javap_lib::ClassRecord;

use super::input::{InputArgs, Prepared, fail, report_mismatch};

pub struct ParseArgs {
    pub input: InputArgs,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: ParseArgs) {
    let Prepared {
        input,
        grammar,
        rule,
    } = args.input.prepare().unwrap_or_else(|msg| fail(msg));

    let outcome = args.input.parser(grammar).parse_rule(rule, &input.text);
    let tree = match outcome.into_result() {
        Ok(tree) => tree,
        Err(mismatch) => {
            report_mismatch(&mismatch, &input, args.color);
            std::process::exit(1);
        }
    };

    if tree.end() < input.text.len() {
        let position = LineIndex::new(&input.text).position(tree.end());
        eprintln!("warning: match ended at {position}, the rest of the input was not parsed");
    }

    if !args.json {
        print!(
            "{}",
            tree.root()
                .dump_colored(&input.text, Colors::new(args.color))
        );
        return;
    }

    let json = if args.input.is_transcript() {
        ClassRecord::from_tree(&tree, &input.text)
            .map_err(|e| e.to_string())
            .and_then(|record| serde_json::to_string_pretty(&record).map_err(|e| e.to_string()))
    } else {
        serde_json::to_string_pretty(&tree).map_err(|e| e.to_string())
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(msg) => fail(msg),
    }
}
