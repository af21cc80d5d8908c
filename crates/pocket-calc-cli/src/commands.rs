//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use pocket_calc::core::ErrorPolicy;
use std::path::PathBuf;

use crate::config::ColorChoice;
use crate::output::OutputFormat;

/// pocketcalc: a four-function pocket calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "pocketcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// YAML configuration file
    #[arg(long, global = true, value_name = "FILE", env = "POCKETCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// What operators and equals do while the display shows "Error"
    #[arg(long, global = true)]
    pub error_policy: Option<PolicyArg>,

    /// Write logs to this file (the terminal UI never logs to the screen)
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive terminal calculator
    Tui,

    /// Feed a key sequence to the calculator and print the display
    Keys(KeysArgs),

    /// Show the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the keys command
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Keys to press, e.g. "12.5+2.5=" or "6*7<Enter>"; `<Esc>` clears
    pub sequence: String,

    /// Print the display after every key
    #[arg(short, long)]
    pub trace: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print the built-in defaults instead of the effective configuration
    #[arg(long)]
    pub defaults: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Error-policy argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyArg {
    /// Ignore operators and equals until a number or clear is entered
    Ignore,
    /// Read the error marker as zero
    TreatAsZero,
}

impl From<PolicyArg> for ErrorPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Ignore => Self::Ignore,
            PolicyArg::TreatAsZero => Self::TreatAsZero,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_tui() {
        let cli = parse(&["pocketcalc", "tui"]);
        assert!(matches!(cli.command, Commands::Tui));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.color.is_none());
    }

    #[test]
    fn test_parse_keys_defaults() {
        let cli = parse(&["pocketcalc", "keys", "1+1="]);
        let Commands::Keys(args) = cli.command else {
            panic!("expected keys");
        };
        assert_eq!(args.sequence, "1+1=");
        assert!(!args.trace);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_keys_options() {
        let cli = parse(&["pocketcalc", "keys", "--trace", "-f", "json", "9"]);
        let Commands::Keys(args) = cli.command else {
            panic!("expected keys");
        };
        assert!(args.trace);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = parse(&[
            "pocketcalc",
            "config",
            "-vv",
            "--color",
            "never",
            "--error-policy",
            "treat-as-zero",
            "--log-file",
            "calc.log",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorArg::Never));
        assert_eq!(cli.error_policy, Some(PolicyArg::TreatAsZero));
        assert_eq!(cli.log_file, Some(PathBuf::from("calc.log")));
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["pocketcalc", "--error-policy", "zero", "tui"]).is_err());
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Cli::try_parse_from(["pocketcalc"]).is_err());
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }

    #[test]
    fn test_policy_arg_conversion() {
        assert_eq!(ErrorPolicy::from(PolicyArg::Ignore), ErrorPolicy::Ignore);
        assert_eq!(ErrorPolicy::from(PolicyArg::TreatAsZero), ErrorPolicy::TreatAsZero);
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
