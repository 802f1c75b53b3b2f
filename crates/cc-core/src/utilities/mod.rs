//! Utilities sub-module: string parsers and formatters.

pub mod data_formatters;
pub mod data_parsers;
