//! Java 6 grammar.
//!
//! Rules follow the syntax chapter of the JLS (third edition), reshaped
//! for ordered choice. Tokens consume trailing whitespace and comments, so
//! every rule starts at a significant character.

mod declarations;
mod expressions;
mod lexical;
mod statements;
mod types;

#[cfg(test)]
mod java_tests;

use std::sync::LazyLock;

use javap_peg::expr::r;
use javap_peg::{Expr, Grammar, GrammarBuilder};

/// Rule that matches a whole source file.
pub const ROOT: &str = "CompilationUnit";

/// Adds every Java rule to `b`.
///
/// Returns the handle extensions use to refer to Java rules.
pub fn define(b: &mut GrammarBuilder) -> JavaRules {
    lexical::define(b);
    types::define(b);
    expressions::define(b);
    statements::define(b);
    declarations::define(b);
    JavaRules { _defined: () }
}

/// Java grammar rooted at [`ROOT`].
pub fn grammar() -> &'static Grammar {
    static GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| {
        let mut b = GrammarBuilder::new();
        define(&mut b);
        b.root(ROOT);
        b.build().expect("Java grammar is well-formed")
    });
    &GRAMMAR
}

/// Java rules an extension grammar may call.
///
/// Only [`define`] creates one, so holding it proves the rules exist in the
/// builder the extension adds to.
#[derive(Clone, Copy, Debug)]
pub struct JavaRules {
    _defined: (),
}

impl JavaRules {
    /// Whitespace and comments, newlines included.
    pub fn spacing(&self) -> Expr {
        r("Spacing")
    }

    pub fn keyword(&self) -> Expr {
        r("Keyword")
    }

    pub fn letter(&self) -> Expr {
        r("Letter")
    }

    pub fn letter_or_digit(&self) -> Expr {
        r("LetterOrDigit")
    }

    pub fn modifier(&self) -> Expr {
        r("Modifier")
    }

    pub fn basic_type(&self) -> Expr {
        r("BasicType")
    }

    pub fn dim(&self) -> Expr {
        r("Dim")
    }

    pub fn type_parameters(&self) -> Expr {
        r("TypeParameters")
    }

    pub fn type_arguments(&self) -> Expr {
        r("TypeArguments")
    }

    pub fn string_literal(&self) -> Expr {
        r("StringLiteral")
    }

    pub fn decimal_numeral(&self) -> Expr {
        r("DecimalNumeral")
    }

    /// Keyword or operator terminal by rule name (`CLASS`, `THROWS`, `DOT`,
    /// `LPAR`, ...). Terminals produce no nodes and end in [`Self::spacing`].
    pub fn terminal(&self, name: &str) -> Expr {
        r(name)
    }
}
