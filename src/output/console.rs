use std::io::{self, Write};

use serde::Serialize;

use super::{ColorMode, OutputFormat, ansi};
use crate::report::{Diagnostic, Rule};

/// Severity of a status line, rendered as a colored glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// A rename or fix was applied.
    Success,
    /// Something worth a look that did not stop the run.
    Warning,
    /// The run (or one file) could not proceed.
    Fatal,
}

impl Status {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Success => "[+]",
            Self::Warning => "[-]",
            Self::Fatal => "[!]",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Self::Success => ansi::GREEN,
            Self::Warning => ansi::YELLOW,
            Self::Fatal => ansi::RED,
        }
    }

    /// Renders the glyph, colored when requested.
    #[must_use]
    pub fn prefix(self, use_colors: bool) -> String {
        if use_colors {
            format!("{}{}{}", self.color(), self.glyph(), ansi::RESET)
        } else {
            self.glyph().to_string()
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Record<'a> {
    Diagnostic {
        path: String,
        line: usize,
        rule: Rule,
        message: &'static str,
        auto_fix: bool,
        detail: Option<&'a str>,
    },
    Status {
        status: Status,
        message: &'a str,
    },
}

/// Line-oriented writer for everything the sweep prints.
pub struct Console<W: Write> {
    out: W,
    format: OutputFormat,
    use_colors: bool,
}

impl Console<io::Stdout> {
    #[must_use]
    pub fn stdout(format: OutputFormat, mode: ColorMode) -> Self {
        let use_colors = format == OutputFormat::Text && mode.use_colors();
        Self::new(io::stdout(), format, use_colors)
    }
}

impl<W: Write> Console<W> {
    #[must_use]
    pub const fn new(out: W, format: OutputFormat, use_colors: bool) -> Self {
        Self {
            out,
            format,
            use_colors,
        }
    }

    pub fn status(&mut self, status: Status, message: &str) {
        match self.format {
            OutputFormat::Text => {
                let prefix = status.prefix(self.use_colors);
                // A closed stdout must not abort the sweep mid-file
                writeln!(self.out, "{prefix} {message}").ok();
            }
            OutputFormat::Json => self.write_record(&Record::Status { status, message }),
        }
    }

    pub fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "{}", diagnostic.render()).ok();
            }
            OutputFormat::Json => self.write_record(&Record::Diagnostic {
                path: diagnostic.path.display().to_string(),
                line: diagnostic.line,
                rule: diagnostic.rule,
                message: diagnostic.rule.description(),
                auto_fix: diagnostic.auto_fix,
                detail: diagnostic.detail.as_deref(),
            }),
        }
    }

    fn write_record(&mut self, record: &Record<'_>) {
        if let Ok(line) = serde_json::to_string(record) {
            writeln!(self.out, "{line}").ok();
        }
    }

    pub fn flush(&mut self) {
        self.out.flush().ok();
    }

    /// Consumes the console, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
