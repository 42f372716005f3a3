//! Print a built-in grammar.

use javap_lib::grammar_by_name;

use super::input::fail;

pub struct GrammarArgs {
    pub grammar: String,
    pub json: bool,
}

pub fn run(args: GrammarArgs) {
    let Some(grammar) = grammar_by_name(&args.grammar) else {
        fail(format!("unknown grammar '{}'", args.grammar));
    };

    if !args.json {
        print!("{grammar}");
        return;
    }

    match serde_json::to_string_pretty(grammar) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(e),
    }
}
