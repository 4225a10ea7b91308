// ABOUTME: Run configuration for relpath: input/output paths and quote pairing mode.
// ABOUTME: OptionsBuilder provides a fluent API for overriding the fixed default file names.

use std::path::{Path, PathBuf};

use crate::rewrite::QuoteMode;

/// File read when no input path is given.
pub const DEFAULT_INPUT: &str = "index.html";
/// File written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "output.html";

/// Configuration for a single [`run`](crate::run::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub quote_mode: QuoteMode,
}

impl Default for Options {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl Options {
    /// `dir/index.html` rewritten into `dir/output.html`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input: dir.join(DEFAULT_INPUT),
            output: dir.join(DEFAULT_OUTPUT),
            quote_mode: QuoteMode::default(),
        }
    }

    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }
}

/// Builder for [`Options`]. Explicit paths win over the directory defaults.
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    dir: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    quote_mode: QuoteMode,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the default file names.
    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn quote_mode(mut self, mode: QuoteMode) -> Self {
        self.quote_mode = mode;
        self
    }

    pub fn build(self) -> Options {
        let base = Options::in_dir(self.dir.unwrap_or_else(|| PathBuf::from(".")));
        Options {
            input: self.input.unwrap_or(base.input),
            output: self.output.unwrap_or(base.output),
            quote_mode: self.quote_mode,
        }
    }
}
