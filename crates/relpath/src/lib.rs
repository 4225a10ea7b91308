// ABOUTME: Main library entry point for the relpath HTML path rewriter.
// ABOUTME: Re-exports the public API: Relativizer, QuoteMode, Options, run, RelativizeError.

//! relpath - rewrites root-relative `src`/`href` values in HTML to relative ones.
//!
//! The rewrite works on raw text with a single regular expression, not on a
//! parsed DOM. `src="/img/a.png"` becomes `src="./img/a.png"`; every other byte
//! of the document is left alone.
//!
//! # Example
//!
//! ```
//! use relpath::convert_to_relative;
//!
//! let html = r#"<img src="/images/logo.png"><a href="https://example.com">x</a>"#;
//! assert_eq!(
//!     convert_to_relative(html),
//!     r#"<img src="./images/logo.png"><a href="https://example.com">x</a>"#
//! );
//! ```

pub mod error;
pub mod options;
pub mod rewrite;
pub mod run;

pub use crate::error::RelativizeError;
pub use crate::options::{Options, OptionsBuilder, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use crate::rewrite::{convert_to_relative, QuoteMode, Relativizer, Rewrite};
pub use crate::run::{read_document, run, write_document, Summary};
