//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("javap-json")
        .about("Convert javap -l class disassembly into JSON")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(parse_command())
        .subcommand(trace_command())
        .subcommand(grammar_command())
        .subcommand(convert_command())
}

/// Parse input and print the tree or its JSON projection.
pub fn parse_command() -> Command {
    Command::new("parse")
        .about("Parse a javap transcript or Java source and print the result")
        .override_usage(
            "\
  javap-json parse <FILE>
  javap-json parse -s <TEXT> [-g <GRAMMAR>]",
        )
        .after_help(
            r#"EXAMPLES:
  javap -l Foo | javap-json parse -          # parse tree of a transcript
  javap-json parse Foo.txt --json            # class record as JSON
  javap-json parse -g java Foo.java          # Java source tree
  javap-json parse -g java --rule Expression -s 'a + b * c'"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(grammar_arg())
        .arg(rule_arg())
        .arg(json_arg())
        .arg(fuel_arg())
        .arg(no_memo_arg())
        .arg(color_arg())
}

/// Trace rule evaluation for debugging grammars.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace rule evaluation for debugging")
        .override_usage(
            "\
  javap-json trace <FILE> [-v|-vv]
  javap-json trace -s <TEXT> [-g <GRAMMAR>] [--rule <NAME>]",
        )
        .after_help(
            r#"EXAMPLES:
  javap-json trace Foo.txt                   # rules that build nodes
  javap-json trace Foo.txt -v                # every rule and memo hit
  javap-json trace -g java --rule Literal -s '0x1p3' -vv"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(grammar_arg())
        .arg(rule_arg())
        .arg(verbose_arg())
        .arg(fuel_arg())
        .arg(no_memo_arg())
        .arg(color_arg())
}

/// Print a built-in grammar.
pub fn grammar_command() -> Command {
    Command::new("grammar")
        .about("Print a built-in grammar in PEG notation")
        .arg(grammar_name_arg())
        .arg(json_arg().help("Print the rule set as JSON"))
}

/// Convert a directory of compiled classes.
pub fn convert_command() -> Command {
    Command::new("convert")
        .about("Disassemble every class in a directory and write JSON records")
        .after_help(
            r#"EXAMPLES:
  javap-json convert target/classes target/javap-json
  javap-json convert build/classes out --javap /opt/jdk6/bin/javap"#,
        )
        .arg(classes_dir_arg())
        .arg(output_dir_arg())
        .arg(javap_arg())
        .arg(color_arg())
}
