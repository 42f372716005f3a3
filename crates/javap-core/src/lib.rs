#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared primitives for the javap-json crates.
//!
//! - [`Span`]: byte range into an input text
//! - [`LineIndex`]: byte offset to line/column translation
//! - [`Colors`]: ANSI palette used by tracers and tree dumps
//! - [`text`]: helpers for previewing input text in diagnostics

mod colors;
mod span;
pub mod text;


pub use colors::Colors;
pub use span::{LineIndex, Position, Span};
