//! pocketcalc: pocket calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc tui                        # Interactive calculator
//! pocketcalc keys "12.5+2.5="           # Prints 15
//! pocketcalc keys --trace "3+4*5<Enter>"
//! pocketcalc --config calc.yaml config  # Show effective configuration
//! ```

use clap::Parser;
use pocket_calc::tui::{self, CalculatorApp};
use pocket_calc_cli::{
    logging, Cli, CliConfig, CliResult, Commands, ConfigArgs, KeyRunner, KeysArgs, Printer,
    Surface, Verbosity,
};
use std::process::ExitCode;
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let surface = match cli.command {
        Commands::Tui => Surface::Tui,
        _ => Surface::Batch,
    };
    logging::init(&config, surface)?;

    match cli.command {
        Commands::Tui => run_tui(&config),
        Commands::Keys(args) => run_keys(&config, &args),
        Commands::Config(args) => run_config(&config, &args),
    }
}

/// Defaults, then the YAML file, then flags
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };

    if cli.quiet || cli.verbose > 0 {
        config = config.with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose));
    }
    if let Some(color) = cli.color {
        config = config.with_color(color.into());
    }
    if let Some(policy) = cli.error_policy {
        config = config.with_error_policy(policy.into());
    }
    if let Some(path) = &cli.log_file {
        config = config.with_log_file(path);
    }
    Ok(config)
}

fn run_tui(config: &CliConfig) -> CliResult<()> {
    info!(policy = %config.error_policy, "starting terminal UI");
    let mut app = CalculatorApp::with_policy(config.error_policy);
    tui::run(&mut app)?;
    Ok(())
}

fn run_keys(config: &CliConfig, args: &KeysArgs) -> CliResult<()> {
    let run = KeyRunner::new(config.error_policy).run(&args.sequence)?;
    let printer = Printer::new(config.color.should_color(), config.verbosity.is_quiet())
        .with_verbose(config.verbosity.is_verbose());
    printer.batch(&run, args.format, args.trace)
}

fn run_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    let shown = if args.defaults {
        CliConfig::new()
    } else {
        config.clone()
    };
    Printer::default().raw(&shown.to_yaml()?)
}
