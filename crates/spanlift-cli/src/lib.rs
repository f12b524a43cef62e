//! spanlift CLI library.
//!
//! Wires the extraction pipeline together: read the input file, invoke the
//! extractor, persist the records, render the HTML report, and print a
//! per-span summary.

pub mod cli;
pub mod error;
pub mod fewshot;
pub mod output;
pub mod pipeline;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use output::Formatter;
