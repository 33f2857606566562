use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};
use crate::report::DEFAULT_MAX_REPORTS;
use crate::runner::RunOptions;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "src-sweep")]
#[command(author, version, about = "Sweep a source tree for style problems and fix the safe ones")]
#[command(long_about = "Walks the given files and directories, reports style violations, \
    rewrites files in place for the rules that are safe to fix, flags duplicate files and \
    normalizes a few file names.\n\n\
    Exit codes:\n  \
    0 - Sweep completed\n  \
    1 - Invocation error\n  \
    2 - At least one file could not be read or written")]
pub struct Cli {
    /// Report every diagnostic, disabling per-rule throttling
    #[arg(short, long)]
    pub verbose: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Word list used for spell checking string literals
    #[arg(long, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Disable spell checking
    #[arg(long)]
    pub no_spell: bool,

    /// Diagnostics printed per rule and file before throttling
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_REPORTS)]
    pub max_reports: usize,

    /// Files or directories to sweep
    pub paths: Vec<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn into_options(self) -> RunOptions {
        RunOptions {
            paths: self.paths,
            verbose: self.verbose,
            max_reports: self.max_reports,
            format: self.format,
            color: self.color.into(),
            dict: self.dict,
            no_spell: self.no_spell,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
