//! Terminal output as a sequence of commands.
//!
//! - [`catalog`] - named control sequences (introducer, terminator, glyph)
//! - [`Command`] - one literal character or one control sequence
//! - [`Tokenizer`] - character stream to commands, losslessly
//!
//! The round-trip law holds for every input:
//!
//! ```
//! use scriptcut::ansi::{serialize, tokenize};
//!
//! let text = "$ ls\r\n\x1b[01;34msrc\x1b[0m\r\n";
//! assert_eq!(serialize(&tokenize(text)), text);
//! ```

pub mod catalog;
mod command;
mod tokenizer;

pub use catalog::{Category, ControlCode, Introducer, Terminator, BEL, ESC};
pub use command::{serialize, total_len, Command};
pub use tokenizer::{tokenize, Tokenizer};
