//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but hold raw CLI choices
//! (color mode, verbosity count); the `From` impls resolve them.

use std::path::PathBuf;

use clap::ArgMatches;
use javap_peg::Verbosity;

use super::ColorChoice;
use crate::commands::convert::ConvertArgs;
use crate::commands::grammar::GrammarArgs;
use crate::commands::input::InputArgs;
use crate::commands::parse::ParseArgs;
use crate::commands::trace::TraceArgs;

pub struct ParseParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub grammar: String,
    pub rule: Option<String>,
    pub json: bool,
    pub fuel: u64,
    pub memoize: bool,
    pub color: ColorChoice,
}

impl ParseParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            grammar: parse_grammar(m),
            rule: m.get_one::<String>("rule").cloned(),
            json: m.get_flag("json"),
            fuel: parse_fuel(m),
            memoize: !m.get_flag("no_memo"),
            color: parse_color(m),
        }
    }
}

impl From<ParseParams> for ParseArgs {
    fn from(p: ParseParams) -> Self {
        Self {
            input: InputArgs {
                source_path: p.source_path,
                source_text: p.source_text,
                grammar: p.grammar,
                rule: p.rule,
                fuel: p.fuel,
                memoize: p.memoize,
            },
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub grammar: String,
    pub rule: Option<String>,
    pub verbosity: Verbosity,
    pub fuel: u64,
    pub memoize: bool,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            grammar: parse_grammar(m),
            rule: m.get_one::<String>("rule").cloned(),
            verbosity: parse_verbosity(m),
            fuel: parse_fuel(m),
            memoize: !m.get_flag("no_memo"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            input: InputArgs {
                source_path: p.source_path,
                source_text: p.source_text,
                grammar: p.grammar,
                rule: p.rule,
                fuel: p.fuel,
                memoize: p.memoize,
            },
            verbosity: p.verbosity,
            color: p.color.should_colorize(),
        }
    }
}

pub struct GrammarParams {
    pub grammar: String,
    pub json: bool,
}

impl GrammarParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar: parse_grammar(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<GrammarParams> for GrammarArgs {
    fn from(p: GrammarParams) -> Self {
        Self {
            grammar: p.grammar,
            json: p.json,
        }
    }
}

pub struct ConvertParams {
    pub classes_dir: PathBuf,
    pub output_dir: PathBuf,
    pub javap: String,
    pub color: ColorChoice,
}

impl ConvertParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            classes_dir: m
                .get_one::<PathBuf>("classes_dir")
                .cloned()
                .unwrap_or_default(),
            output_dir: m
                .get_one::<PathBuf>("output_dir")
                .cloned()
                .unwrap_or_default(),
            javap: m
                .get_one::<String>("javap")
                .cloned()
                .unwrap_or_else(|| "javap".to_owned()),
            color: parse_color(m),
        }
    }
}

impl From<ConvertParams> for ConvertArgs {
    fn from(p: ConvertParams) -> Self {
        Self {
            classes_dir: p.classes_dir,
            output_dir: p.output_dir,
            javap: p.javap,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_grammar(m: &ArgMatches) -> String {
    m.get_one::<String>("grammar")
        .cloned()
        .unwrap_or_else(|| "javap".to_owned())
}

fn parse_fuel(m: &ArgMatches) -> u64 {
    m.get_one::<u64>("fuel").copied().unwrap_or(10_000_000)
}

fn parse_verbosity(m: &ArgMatches) -> Verbosity {
    match m.get_count("verbose") {
        0 => Verbosity::Default,
        1 => Verbosity::Verbose,
        _ => Verbosity::VeryVerbose,
    }
}
