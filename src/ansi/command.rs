//! Tokenized content units.

use std::fmt;

use super::catalog::{Category, ControlCode, Terminator};

/// One unit of capture content: a character, a classified control
/// sequence, or the unterminated tail of one.
///
/// A command always prints back to exactly the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Any character that does not start an escape sequence
    Literal(char),
    /// A control sequence with its catalog row and raw parameter text
    Control { code: ControlCode, params: String },
    /// An escape sequence cut short by the end of input, kept verbatim
    Raw(String),
}

impl Command {
    pub fn control(code: ControlCode, params: impl Into<String>) -> Self {
        Command::Control {
            code,
            params: params.into(),
        }
    }

    /// Serialized length in bytes, without building the string.
    pub fn byte_len(&self) -> usize {
        match self {
            Command::Literal(c) => c.len_utf8(),
            Command::Control { code, params } => code.framing_len() + params.len(),
            Command::Raw(text) => text.len(),
        }
    }

    /// Append the serialized form to `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Command::Literal(c) => out.push(*c),
            Command::Control { code, params } => {
                out.push_str(code.introducer.as_str());
                out.push_str(params);
                match code.terminator {
                    Terminator::Char(c) => out.push(c),
                    terminator => out.push_str(&terminator.to_string()),
                }
            }
            Command::Raw(text) => out.push_str(text),
        }
    }

    pub fn is_control(&self) -> bool {
        matches!(self, Command::Control { .. })
    }

    pub fn code(&self) -> Option<&ControlCode> {
        match self {
            Command::Control { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Parameter text of a control sequence, empty for anything else.
    pub fn params(&self) -> &str {
        match self {
            Command::Control { params, .. } => params,
            _ => "",
        }
    }

    /// Summary bucket for this command; literals have none.
    pub fn category(&self) -> Option<Category> {
        match self {
            Command::Literal(_) => None,
            Command::Control { code, .. } => Some(code.category),
            Command::Raw(_) => Some(Category::Unknown),
        }
    }

    /// Single-cell picture of the command for listings.
    ///
    /// Control characters inside literals are shown as `?` so they never
    /// act on the terminal printing the listing.
    pub fn glyph(&self) -> String {
        match self {
            Command::Literal(c) => printable(*c).to_string(),
            Command::Control { code, .. } => code.glyph.to_string(),
            Command::Raw(_) => "…".to_string(),
        }
    }

    /// Human readable description, parameters in parentheses.
    pub fn describe(&self) -> String {
        match self {
            Command::Literal(c) => format!("Character {} ({:x})", printable(*c), *c as u32),
            Command::Control { code, params } => {
                let mut text = if code.is_unknown() {
                    format!("{} ({:?})", code.explanation, code.terminator.to_string())
                } else {
                    format!("{} {}", code.mnemonic, code.explanation)
                };
                if !params.is_empty() {
                    text.push_str(&format!(" ({})", params.escape_debug()));
                }
                text
            }
            Command::Raw(text) => format!("truncated sequence ({})", text.escape_debug()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.byte_len());
        self.write_to(&mut out);
        f.write_str(&out)
    }
}

fn printable(c: char) -> char {
    if c.is_control() {
        '?'
    } else {
        c
    }
}

/// Concatenate the serialized form of every command.
pub fn serialize(commands: &[Command]) -> String {
    let mut out = String::with_capacity(total_len(commands));
    for command in commands {
        command.write_to(&mut out);
    }
    out
}

/// Sum of serialized lengths.
pub fn total_len(commands: &[Command]) -> usize {
    commands.iter().map(Command::byte_len).sum()
}
