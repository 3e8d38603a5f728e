//! Pure text transforms
//!
//! Each submodule is a stateless function (plus its option types) from an
//! input string to an output string or list. None of them can fail for any
//! string input.

pub mod indent;
pub mod newline;
pub mod split;
pub mod truncate;

pub use indent::{convert_indentation, IndentDirection};
pub use newline::{convert_newlines, NewlineStyle};
pub use split::split_text;
pub use truncate::{truncate_text, TruncateMode, DEFAULT_SUFFIX};
