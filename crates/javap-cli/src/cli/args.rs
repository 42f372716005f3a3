//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so commands compose the same
//! definitions.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Transcript or Java source file (positional, "-" for stdin).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("source_text")
        .help("Input file to parse (\"-\" for stdin)")
}

/// Inline input text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline input text")
}

/// Grammar to parse with (-g/--grammar).
pub fn grammar_arg() -> Arg {
    Arg::new("grammar")
        .short('g')
        .long("grammar")
        .value_name("GRAMMAR")
        .default_value("javap")
        .value_parser(["java", "javap"])
        .help("Grammar: javap transcripts or plain Java")
}

/// Grammar name for the grammar command (positional).
pub fn grammar_name_arg() -> Arg {
    Arg::new("grammar")
        .value_name("GRAMMAR")
        .default_value("javap")
        .value_parser(["java", "javap"])
        .help("Grammar to print")
}

/// Start rule (--rule).
pub fn rule_arg() -> Arg {
    Arg::new("rule")
        .long("rule")
        .value_name("NAME")
        .help("Rule to match from (default: the grammar's root)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON (class record for javap transcripts, parse tree otherwise)")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("10000000")
        .value_parser(value_parser!(u64))
        .help("Evaluation step limit")
}

/// Disable memoization (--no-memo).
pub fn no_memo_arg() -> Arg {
    Arg::new("no_memo")
        .long("no-memo")
        .action(ArgAction::SetTrue)
        .help("Evaluate every rule call instead of reusing memoized results")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for every rule, -vv to include matched text)")
}

/// Directory of compiled classes (positional).
pub fn classes_dir_arg() -> Arg {
    Arg::new("classes_dir")
        .value_name("CLASSES")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Directory searched for .class files")
}

/// Output directory (positional).
pub fn output_dir_arg() -> Arg {
    Arg::new("output_dir")
        .value_name("OUTPUT")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Directory receiving one .json file per class")
}

/// Disassembler program (--javap).
pub fn javap_arg() -> Arg {
    Arg::new("javap")
        .long("javap")
        .value_name("PROGRAM")
        .default_value("javap")
        .help("Disassembler to run as `<PROGRAM> -l <Class>`")
}
