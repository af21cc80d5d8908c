//! pocketcalc CLI library
//!
//! Command-line front end for the pocket calculator: the interactive terminal
//! UI and a batch mode that feeds key sequences and prints the display.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod runner;

pub use commands::{Cli, ColorArg, Commands, ConfigArgs, KeysArgs, PolicyArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::Surface;
pub use output::{OutputFormat, Printer};
pub use runner::{tokenize, BatchRun, KeyRunner, Step};
