mod cli;
mod commands;

use cli::{ConvertParams, GrammarParams, ParseParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("parse", m)) => {
            let params = ParseParams::from_matches(m);
            commands::parse::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        Some(("grammar", m)) => {
            let params = GrammarParams::from_matches(m);
            commands::grammar::run(params.into());
        }
        Some(("convert", m)) => {
            let params = ConvertParams::from_matches(m);
            commands::convert::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
