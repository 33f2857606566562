use serde::Serialize;

/// Every kind of violation the check engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    AlignMultiLineMacro,
    DoubleSpace,
    EmptyFile,
    EmptyLineBegin,
    EmptyLineEnd,
    ExplicitNonZero,
    ExplicitZero,
    IndentSpace,
    MallocCast,
    MissingVoid,
    NewLineEof,
    RecursiveInclude,
    SpaceBrace,
    SpaceParenthesis,
    SpaceComma,
    SpaceCond,
    SpaceEol,
    SpaceOperator,
    SeveralSemicolon,
    Spelling,
    WindowsCarriage,
}

impl Rule {
    /// Human-readable description printed after `path:line - `.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AlignMultiLineMacro => "alignment in multi-line macro",
            Self::DoubleSpace => "double space",
            Self::EmptyFile => "empty file",
            Self::EmptyLineBegin => "empty line at the beginning of file",
            Self::EmptyLineEnd => "empty line at the end of file",
            Self::ExplicitNonZero => "explicit non-zero condition",
            Self::ExplicitZero => "explicit zero condition",
            Self::IndentSpace => "indented with space",
            Self::MallocCast => "explicit cast result of calloc/malloc/realloc",
            Self::MissingVoid => "missing void in prototype",
            Self::NewLineEof => "no new line at EOF",
            Self::RecursiveInclude => {
                "non standard / missing protection to prevent recursive include"
            }
            Self::SpaceBrace => "no space before / after brace",
            Self::SpaceParenthesis => {
                "unintended space after opening parenthesis or before closing parenthesis"
            }
            Self::SpaceComma => "no space after comma",
            Self::SpaceCond => "no space before condition",
            Self::SpaceEol => "space(s) / tab(s) at EOL",
            Self::SpaceOperator => "no space around operator",
            Self::SeveralSemicolon => "several semi-column",
            Self::Spelling => "spell check",
            Self::WindowsCarriage => "Windows carriage return",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
