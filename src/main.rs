use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use src_sweep::cli::Cli;
use src_sweep::output::{ColorMode, Status};
use src_sweep::runner::run;
use src_sweep::{EXIT_USAGE, SweepError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                err.print().ok();
                std::process::exit(EXIT_USAGE);
            }
        },
    };
    init_tracing();

    if cli.paths.is_empty() {
        let mode = ColorMode::from(cli.color);
        eprintln!(
            "{} Usage: src-sweep [-v] path...",
            Status::Fatal.prefix(use_stderr_colors(mode))
        );
        std::process::exit(EXIT_USAGE);
    }

    let exit_code = match run(&cli.into_options()) {
        Ok(summary) => summary.exit_code(),
        Err(e) => report_fatal(&e),
    };
    std::process::exit(exit_code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn use_stderr_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::env::var_os("NO_COLOR").is_none()
                && std::io::IsTerminal::is_terminal(&std::io::stderr())
        }
    }
}

fn report_fatal(error: &SweepError) -> i32 {
    eprintln!("Error: {}", error.chain());
    EXIT_USAGE
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
