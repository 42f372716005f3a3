//! Rendering of parse mismatches for people.

mod printer;

#[cfg(test)]
mod tests;

pub use printer::MismatchPrinter;
