// Common utilities shared by the derive macros
//
// - parse_utils: capability list parsing and validation

mod parse_utils;

pub use parse_utils::*;
