//! Trace rule evaluation for debugging.

use javap_core::Colors;
use javap_peg::{PrintTracer, Verbosity};

use super::input::{InputArgs, Prepared, fail, report_mismatch};

pub struct TraceArgs {
    pub input: InputArgs,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let Prepared {
        input,
        grammar,
        rule,
    } = args.input.prepare().unwrap_or_else(|msg| fail(msg));

    let parser = args.input.parser(grammar);
    let mut tracer = PrintTracer::new(grammar, &input.text)
        .verbosity(args.verbosity)
        .colored(args.color);
    let outcome = parser.parse_rule_with(rule, &input.text, &mut tracer);
    tracer.print();

    let colors = Colors::new(args.color);
    let stats = outcome.stats();
    println!("{}---{}", colors.dim, colors.reset);
    println!(
        "{} rule evaluations, {} memo hits, {} memo entries, {} steps, max depth {}",
        stats.rule_evaluations, stats.memo_hits, stats.memo_entries, stats.steps, stats.max_depth
    );

    if let Some(mismatch) = outcome.mismatch() {
        report_mismatch(mismatch, &input, args.color);
        std::process::exit(1);
    }
}
