//! Output formatting for batch runs

use clap::ValueEnum;
use console::{Style, Term};
use pocket_calc::core::ERROR_MARKER;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;
use crate::runner::BatchRun;

/// Output format for batch results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Writes batch results to stdout
#[derive(Debug)]
pub struct Printer {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
    /// Verbose mode: label the trace columns
    pub verbose: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Printer {
    /// Create a printer writing to stdout
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
            quiet,
            verbose: false,
        }
    }

    /// Set verbose mode
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn paint(&self, text: &str, style: &Style) -> String {
        if self.use_color {
            style.clone().force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Styles a display value: red for the error marker, green otherwise
    #[must_use]
    pub fn display_value(&self, display: &str) -> String {
        let style = if display == ERROR_MARKER {
            Style::new().red().bold()
        } else {
            Style::new().green().bold()
        };
        self.paint(display, &style)
    }

    /// Renders a batch run as text lines
    #[must_use]
    pub fn render_text(&self, run: &BatchRun, trace: bool) -> Vec<String> {
        let mut lines = Vec::new();
        if trace && !self.quiet {
            let dim = Style::new().dim();
            if self.verbose {
                lines.push(self.paint(&format!("{:>3} {:<6} {}", "#", "key", "display"), &dim));
            }
            for (i, step) in run.steps.iter().enumerate() {
                lines.push(format!(
                    "{} {:<6} {}",
                    self.paint(&format!("{:>3}", i + 1), &dim),
                    step.key,
                    self.display_value(&step.display)
                ));
            }
        }
        lines.push(self.display_value(run.display()));
        lines
    }

    /// Renders a batch run as JSON; `trace` keeps the per-key steps
    pub fn render_json(&self, run: &BatchRun, trace: bool) -> CliResult<String> {
        let value = if trace {
            serde_json::to_string_pretty(run)?
        } else {
            serde_json::to_string_pretty(&run.snapshot)?
        };
        Ok(value)
    }

    /// Prints a batch run in the chosen format
    pub fn batch(&self, run: &BatchRun, format: OutputFormat, trace: bool) -> CliResult<()> {
        match format {
            OutputFormat::Text => {
                for line in self.render_text(run, trace) {
                    self.term.write_line(&line)?;
                }
            }
            OutputFormat::Json => self.term.write_line(&self.render_json(run, trace)?)?,
        }
        Ok(())
    }

    /// Prints raw text, such as a YAML document
    pub fn raw(&self, text: &str) -> CliResult<()> {
        self.term.write_str(text)?;
        Ok(())
    }
}
