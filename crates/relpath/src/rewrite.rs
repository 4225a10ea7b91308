// ABOUTME: The path rewrite rule: turns root-relative src/href values into ./-relative ones.
// ABOUTME: Provides QuoteMode, Relativizer, Rewrite, and the convert_to_relative shortcut.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Opening and closing quote must be the same character.
static STRICT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<attr>src|href)=(?:"/[^"\r\n\x{2028}\x{2029}]*"|'/[^'\r\n\x{2028}\x{2029}]*')"#).unwrap()
});

// Either quote at either end, so `src="/a'` matches.
static LOOSE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?P<attr>src|href)=["']/[^\r\n\x{2028}\x{2029}]*?["']"#).unwrap()
});

static DEFAULT_RELATIVIZER: Lazy<Relativizer> = Lazy::new(Relativizer::default);

/// How the quote characters around an attribute value are paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteMode {
    /// `"..."` or `'...'` only.
    #[default]
    Strict,
    /// Any mix of `"` and `'` as delimiters, e.g. `"...'`.
    Loose,
}

impl fmt::Display for QuoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuoteMode::Strict => "strict",
            QuoteMode::Loose => "loose",
        };
        write!(f, "{}", s)
    }
}

/// Result of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Number of attribute values that were rewritten.
    pub rewritten: usize,
}

/// Rewrites `src="/..."` and `href="/..."` values to `./...`.
///
/// Matching is textual and case-sensitive. The attribute name is not anchored
/// to a word boundary, so `data-src="/x"` is rewritten as well. Values never
/// span a line terminator (`\r`, `\n`, U+2028, U+2029).
#[derive(Debug, Clone, Copy)]
pub struct Relativizer {
    mode: QuoteMode,
    pattern: &'static Regex,
}

impl Default for Relativizer {
    fn default() -> Self {
        Self::new(QuoteMode::default())
    }
}

impl Relativizer {
    pub fn new(mode: QuoteMode) -> Self {
        let pattern = match mode {
            QuoteMode::Strict => &*STRICT_RE,
            QuoteMode::Loose => &*LOOSE_RE,
        };
        Self { mode, pattern }
    }

    pub fn mode(&self) -> QuoteMode {
        self.mode
    }

    /// Rewrites every qualifying occurrence in `input` and counts them.
    pub fn convert(&self, input: &str) -> Rewrite {
        let mut rewritten = 0;
        let content = self
            .pattern
            .replace_all(input, |caps: &Captures<'_>| {
                rewritten += 1;
                let whole = &caps[0];
                // attr name, '=', opening quote; the value's '/' follows
                let split = caps["attr"].len() + 2;
                format!("{}.{}", &whole[..split], &whole[split..])
            })
            .into_owned();

        Rewrite { content, rewritten }
    }

    /// Like [`Relativizer::convert`] but returns only the text.
    pub fn convert_str(&self, input: &str) -> String {
        self.convert(input).content
    }
}

/// Rewrites root-relative `src`/`href` values using strict quote pairing.
pub fn convert_to_relative(input: &str) -> String {
    DEFAULT_RELATIVIZER.convert_str(input)
}
