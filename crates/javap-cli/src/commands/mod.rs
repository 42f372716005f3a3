pub mod convert;
pub mod grammar;
pub mod input;
pub mod parse;
pub mod trace;

#[cfg(test)]
mod convert_tests;
#[cfg(test)]
mod input_tests;
