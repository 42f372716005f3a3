//! Java and `javap -l` grammars, and projection of disassembler transcripts
//! into serializable class records.
//!
//! # Example
//!
//! ```
//! use indoc::indoc;
//! use javap_lib::{parse_transcript, record::MemberKind};
//!
//! let transcript = indoc! {r#"
//!     Compiled from "Greeter.java"
//!     public class demo.Greeter extends java.lang.Object{
//!     public demo.Greeter();
//!       LineNumberTable:
//!        line 3: 0
//!
//!       LocalVariableTable:
//!        Start  Length  Slot  Name   Signature
//!        0      5      0    this       Ldemo/Greeter;
//!
//!
//!     }
//! "#};
//!
//! let class = parse_transcript(transcript).expect("valid transcript");
//! assert_eq!(class.internal_name, "demo/Greeter");
//! assert_eq!(class.members[0].kind, MemberKind::Constructor);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod java;
pub mod javap;
pub mod record;

pub use diagnostics::MismatchPrinter;
pub use record::{ClassRecord, ProjectError};

use javap_peg::{Grammar, Mismatch, Parser};

/// Errors from turning a transcript into a [`ClassRecord`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Mismatch(#[from] Mismatch),

    #[error(transparent)]
    Project(#[from] ProjectError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Built-in grammar by name: `java` or `javap`.
pub fn grammar_by_name(name: &str) -> Option<&'static Grammar> {
    match name.to_ascii_lowercase().as_str() {
        "java" => Some(java::grammar()),
        "javap" => Some(javap::grammar()),
        _ => None,
    }
}

/// Parses a complete `javap -l` transcript and projects it.
pub fn parse_transcript(source: &str) -> Result<ClassRecord> {
    let tree = Parser::new(javap::grammar()).parse(source).into_result()?;
    Ok(ClassRecord::from_tree(&tree, source)?)
}
