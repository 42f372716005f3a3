//! Input loading and grammar selection shared by `parse` and `trace`.

use std::fmt::Display;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use javap_lib::{MismatchPrinter, grammar_by_name};
use javap_peg::{Grammar, Mismatch, Parser, RuleId};

pub struct InputArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub grammar: String,
    pub rule: Option<String>,
    pub fuel: u64,
    pub memoize: bool,
}

/// Input text plus the name diagnostics show for it.
pub struct Input {
    pub text: String,
    pub name: Option<String>,
}

pub struct Prepared {
    pub input: Input,
    pub grammar: &'static Grammar,
    pub rule: RuleId,
}

impl InputArgs {
    pub fn prepare(&self) -> Result<Prepared, String> {
        let grammar = grammar_by_name(&self.grammar)
            .ok_or_else(|| format!("unknown grammar '{}' (expected java or javap)", self.grammar))?;
        let rule = resolve_rule(grammar, self.rule.as_deref())?;
        let input = load_input(self.source_path.as_deref(), self.source_text.as_deref())?;
        Ok(Prepared {
            input,
            grammar,
            rule,
        })
    }

    pub fn parser(&self, grammar: &'static Grammar) -> Parser<'static> {
        Parser::builder(grammar)
            .exec_fuel(self.fuel)
            .memoize(self.memoize)
            .build()
    }

    /// Whether the parse covers a whole transcript, so it can be projected.
    pub fn is_transcript(&self) -> bool {
        self.grammar.eq_ignore_ascii_case("javap") && self.rule.is_none()
    }
}

pub fn load_input(path: Option<&Path>, text: Option<&str>) -> Result<Input, String> {
    if let Some(text) = text {
        return Ok(Input {
            text: text.to_owned(),
            name: None,
        });
    }

    let Some(path) = path else {
        return Err("input is required: use a positional FILE or -s/--source".to_string());
    };

    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        return Ok(Input {
            text,
            name: Some("<stdin>".to_owned()),
        });
    }

    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(Input {
        text,
        name: Some(path.display().to_string()),
    })
}

pub fn resolve_rule(grammar: &Grammar, name: Option<&str>) -> Result<RuleId, String> {
    match name {
        None => Ok(grammar.root()),
        Some(name) => grammar
            .rule_id(name)
            .ok_or_else(|| format!("unknown rule '{}'", name)),
    }
}

pub fn report_mismatch(mismatch: &Mismatch, input: &Input, color: bool) {
    let mut printer = MismatchPrinter::new(mismatch, &input.text).colored(color);
    if let Some(name) = &input.name {
        printer = printer.path(name);
    }
    eprint!("{}", printer.render());
}

pub fn fail(msg: impl Display) -> ! {
    eprintln!("error: {}", msg);
    std::process::exit(1);
}
