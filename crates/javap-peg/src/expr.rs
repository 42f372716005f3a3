//! Parsing expressions: the authoring form of rule bodies.
//!
//! Rule bodies are plain values. References to other rules are by name and
//! are resolved when the grammar is built, so mutually recursive rules can be
//! declared in any order.
//!
//! ```
//! use javap_peg::{choice, seq, expr::{plus, r, range}};
//!
//! let digits = plus(range('0', '9'));
//! let signed = seq![choice!["+", "-"], r("Digits")];
//! assert_eq!(digits.to_string(), "[0-9]+");
//! assert_eq!(signed.to_string(), "(\"+\" / \"-\") Digits");
//! ```

use std::fmt;

use javap_core::text::escape;
use serde::Serialize;

/// Single-character predicate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    Char(char),
    /// Inclusive range.
    Range(char, char),
    AnyOf(String),
    NoneOf(String),
    /// Java identifier start: alphabetic, `_` or `$`.
    JavaLetter,
    /// Java identifier part: a [`CharClass::JavaLetter`] or an alphanumeric.
    JavaLetterOrDigit,
}

impl CharClass {
    pub fn matches(&self, c: char) -> bool {
        match self {
            CharClass::Char(expected) => c == *expected,
            CharClass::Range(lo, hi) => (*lo..=*hi).contains(&c),
            CharClass::AnyOf(set) => set.contains(c),
            CharClass::NoneOf(set) => !set.contains(c),
            CharClass::JavaLetter => is_java_letter(c),
            CharClass::JavaLetterOrDigit => is_java_letter(c) || c.is_alphanumeric(),
        }
    }
}

fn is_java_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Char(c) => write!(f, "'{}'", escape(&c.to_string())),
            CharClass::Range(lo, hi) => write!(f, "[{}-{}]", escape_set(lo), escape_set(hi)),
            CharClass::AnyOf(set) => write!(f, "[{}]", escape_class(set)),
            CharClass::NoneOf(set) => write!(f, "[^{}]", escape_class(set)),
            CharClass::JavaLetter => f.write_str("[:letter:]"),
            CharClass::JavaLetterOrDigit => f.write_str("[:letter-or-digit:]"),
        }
    }
}

fn escape_set(c: &char) -> String {
    escape_class(&c.to_string())
}

fn escape_class(set: &str) -> String {
    let mut out = String::new();
    for c in set.chars() {
        match c {
            ']' | '-' | '^' => {
                out.push('\\');
                out.push(c);
            }
            '"' => out.push('"'),
            c => out.push_str(&escape(&c.to_string())),
        }
    }
    out
}

/// A parsing expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Exact string, case sensitive.
    Literal(String),
    Class(CharClass),
    /// Any single character.
    Any,
    /// End of input. Consumes nothing.
    Eoi,
    Seq(Vec<Expr>),
    /// Ordered choice: the first alternative that matches wins.
    Choice(Vec<Expr>),
    ZeroOrMore(Box<Expr>),
    OneOrMore(Box<Expr>),
    Optional(Box<Expr>),
    /// Positive lookahead. Consumes nothing.
    And(Box<Expr>),
    /// Negative lookahead. Consumes nothing.
    Not(Box<Expr>),
    /// Call to a named rule.
    Ref(String),
}

impl Expr {
    /// Whether this expression tests input directly rather than composing.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Expr::Literal(_) | Expr::Class(_) | Expr::Any | Expr::Eoi
        )
    }

    /// Human-readable description used in expected-sets of mismatches.
    ///
    /// Returns `None` for non-terminals.
    pub fn expectation(&self) -> Option<String> {
        match self {
            Expr::Literal(text) => Some(format!("\"{}\"", escape(text))),
            Expr::Class(class) => Some(class.to_string()),
            Expr::Any => Some("any character".to_owned()),
            Expr::Eoi => Some("end of input".to_owned()),
            _ => None,
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Choice(alts) if alts.len() > 1 => 0,
            Expr::Seq(items) if items.len() > 1 => 1,
            Expr::Seq(items) if items.is_empty() => 4,
            Expr::Seq(items) | Expr::Choice(items) => items.first().map_or(4, Expr::precedence),
            Expr::And(_) | Expr::Not(_) => 2,
            Expr::ZeroOrMore(_) | Expr::OneOrMore(_) | Expr::Optional(_) => 3,
            _ => 4,
        }
    }

    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        match self {
            Expr::Seq(items) | Expr::Choice(items) if items.len() == 1 => {
                return items[0].fmt_at(f, min);
            }
            _ => {}
        }
        if self.precedence() < min {
            f.write_str("(")?;
            self.fmt_at(f, 0)?;
            return f.write_str(")");
        }
        match self {
            Expr::Literal(text) => write!(f, "\"{}\"", escape(text)),
            Expr::Class(class) => write!(f, "{class}"),
            Expr::Any => f.write_str("."),
            Expr::Eoi => f.write_str("EOI"),
            Expr::Seq(items) if items.is_empty() => f.write_str("()"),
            Expr::Seq(items) => write_joined(f, items, " ", 2),
            Expr::Choice(alts) => write_joined(f, alts, " / ", 1),
            Expr::ZeroOrMore(body) => write_suffixed(f, body, '*'),
            Expr::OneOrMore(body) => write_suffixed(f, body, '+'),
            Expr::Optional(body) => write_suffixed(f, body, '?'),
            Expr::And(body) => {
                f.write_str("&")?;
                body.fmt_at(f, 3)
            }
            Expr::Not(body) => {
                f.write_str("!")?;
                body.fmt_at(f, 3)
            }
            Expr::Ref(name) => f.write_str(name),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Expr], sep: &str, min: u8) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        item.fmt_at(f, min)?;
    }
    Ok(())
}

fn write_suffixed(f: &mut fmt::Formatter<'_>, body: &Expr, suffix: char) -> fmt::Result {
    body.fmt_at(f, 4)?;
    write!(f, "{suffix}")
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

impl From<&str> for Expr {
    fn from(text: &str) -> Self {
        Expr::Literal(text.to_owned())
    }
}

impl From<String> for Expr {
    fn from(text: String) -> Self {
        Expr::Literal(text)
    }
}

impl From<char> for Expr {
    fn from(c: char) -> Self {
        Expr::Class(CharClass::Char(c))
    }
}

impl From<CharClass> for Expr {
    fn from(class: CharClass) -> Self {
        Expr::Class(class)
    }
}

/// Sequence of expressions. Items convert with `Into<Expr>`.
#[macro_export]
macro_rules! seq {
    ($($item:expr),* $(,)?) => {
        $crate::Expr::Seq(vec![$($crate::Expr::from($item)),*])
    };
}

/// Ordered choice of expressions. Items convert with `Into<Expr>`.
#[macro_export]
macro_rules! choice {
    ($($alt:expr),* $(,)?) => {
        $crate::Expr::Choice(vec![$($crate::Expr::from($alt)),*])
    };
}

/// Reference to the rule called `name`.
pub fn r(name: &str) -> Expr {
    Expr::Ref(name.to_owned())
}

pub fn lit(text: &str) -> Expr {
    Expr::Literal(text.to_owned())
}

pub fn ch(c: char) -> Expr {
    Expr::Class(CharClass::Char(c))
}

pub fn range(lo: char, hi: char) -> Expr {
    Expr::Class(CharClass::Range(lo, hi))
}

pub fn any_of(set: &str) -> Expr {
    Expr::Class(CharClass::AnyOf(set.to_owned()))
}

pub fn none_of(set: &str) -> Expr {
    Expr::Class(CharClass::NoneOf(set.to_owned()))
}

pub fn java_letter() -> Expr {
    Expr::Class(CharClass::JavaLetter)
}

pub fn java_letter_or_digit() -> Expr {
    Expr::Class(CharClass::JavaLetterOrDigit)
}

pub fn any() -> Expr {
    Expr::Any
}

pub fn eoi() -> Expr {
    Expr::Eoi
}

pub fn opt(body: impl Into<Expr>) -> Expr {
    Expr::Optional(Box::new(body.into()))
}

pub fn star(body: impl Into<Expr>) -> Expr {
    Expr::ZeroOrMore(Box::new(body.into()))
}

pub fn plus(body: impl Into<Expr>) -> Expr {
    Expr::OneOrMore(Box::new(body.into()))
}

pub fn and(body: impl Into<Expr>) -> Expr {
    Expr::And(Box::new(body.into()))
}

pub fn not(body: impl Into<Expr>) -> Expr {
    Expr::Not(Box::new(body.into()))
}
