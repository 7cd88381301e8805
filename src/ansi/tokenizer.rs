//! Lossless escape-sequence tokenizer.
//!
//! Turns a character stream into [`Command`]s. Every input character ends
//! up in exactly one command, so serializing the output reproduces the
//! input:
//!
//! - unknown CSI finals and unknown standalone/charset designators become
//!   unknown catalog rows that keep their terminator;
//! - a sequence cut short by the end of input becomes [`Command::Raw`].

use super::catalog::{self, Introducer, BEL, ESC, OSC, OSC_ST};
use super::command::Command;

/// Streaming tokenizer over any character iterator.
///
/// ```
/// use scriptcut::ansi::{Command, Tokenizer};
///
/// let commands: Vec<Command> = Tokenizer::new("a\x1b[1mb".chars()).collect();
/// assert_eq!(commands.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<I> {
    input: I,
}

impl<I: Iterator<Item = char>> Tokenizer<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    fn escape(&mut self) -> Command {
        let Some(c) = self.input.next() else {
            return Command::Raw(ESC.to_string());
        };

        match c {
            '[' => self.csi(),
            ']' => self.osc(),
            '(' => self.designator(Introducer::G0),
            ')' => self.designator(Introducer::G1),
            '%' => self.designator(Introducer::Encoding),
            other => Command::control(catalog::lookup(Introducer::Standalone, other), ""),
        }
    }

    /// Parameters run until the first character in `0x40..=0x7E`.
    fn csi(&mut self) -> Command {
        let mut params = String::new();
        loop {
            match self.input.next() {
                Some(c) if is_csi_final(c) => {
                    return Command::control(catalog::lookup(Introducer::Csi, c), params);
                }
                Some(c) => params.push(c),
                None => return truncated(Introducer::Csi, &params),
            }
        }
    }

    fn osc(&mut self) -> Command {
        let mut text = String::new();
        loop {
            match self.input.next() {
                Some(BEL) => return Command::control(OSC, text),
                Some(ESC) => match self.input.next() {
                    Some('\\') => return Command::control(OSC_ST, text),
                    Some(BEL) => {
                        text.push(ESC);
                        return Command::control(OSC, text);
                    }
                    Some(c) => {
                        text.push(ESC);
                        text.push(c);
                    }
                    None => {
                        text.push(ESC);
                        return truncated(Introducer::Osc, &text);
                    }
                },
                Some(c) => text.push(c),
                None => return truncated(Introducer::Osc, &text),
            }
        }
    }

    fn designator(&mut self, introducer: Introducer) -> Command {
        match self.input.next() {
            Some(c) => Command::control(catalog::lookup(introducer, c), ""),
            None => truncated(introducer, ""),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for Tokenizer<I> {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        let c = self.input.next()?;
        if c == ESC {
            Some(self.escape())
        } else {
            Some(Command::Literal(c))
        }
    }
}

fn is_csi_final(c: char) -> bool {
    ('\x40'..='\x7e').contains(&c)
}

fn truncated(introducer: Introducer, body: &str) -> Command {
    tracing::debug!(introducer = ?introducer, "sequence truncated by end of input");
    Command::Raw(format!("{}{}", introducer.as_str(), body))
}

/// Tokenize a whole string.
pub fn tokenize(input: &str) -> Vec<Command> {
    Tokenizer::new(input.chars()).collect()
}
