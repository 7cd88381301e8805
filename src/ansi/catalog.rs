//! Static catalog of the control sequences the tokenizer classifies.
//!
//! Each row carries everything needed to print a command back (introducer
//! and terminator) and to show it to a user (mnemonic, explanation, glyph).
//! Commands embed a copy of their row, so nothing ever points back into
//! these tables.

use std::fmt;

/// Escape character that starts every control sequence.
pub const ESC: char = '\x1b';

/// Bell, the classic OSC terminator.
pub const BEL: char = '\x07';

/// How a control sequence is introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Introducer {
    /// `ESC [` control sequence introducer
    Csi,
    /// `ESC ]` operating system command
    Osc,
    /// `ESC (` G0 character set designation
    G0,
    /// `ESC )` G1 character set designation
    G1,
    /// `ESC %` character set encoding selection
    Encoding,
    /// `ESC <final>` with nothing in between
    Standalone,
}

impl Introducer {
    /// The exact text written before the parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Introducer::Csi => "\x1b[",
            Introducer::Osc => "\x1b]",
            Introducer::G0 => "\x1b(",
            Introducer::G1 => "\x1b)",
            Introducer::Encoding => "\x1b%",
            Introducer::Standalone => "\x1b",
        }
    }

    fn table(&self) -> &'static [ControlCode] {
        match self {
            Introducer::Csi => CSI_CODES,
            Introducer::Osc => OSC_CODES,
            Introducer::G0 => G0_CODES,
            Introducer::G1 => G1_CODES,
            Introducer::Encoding => ENCODING_CODES,
            Introducer::Standalone => STANDALONE_CODES,
        }
    }
}

/// What ends a control sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// A single final character (CSI finals, designators, standalone codes)
    Char(char),
    /// `BEL`
    Bel,
    /// String terminator `ESC \`
    St,
}

impl Terminator {
    /// Serialized length in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            Terminator::Char(c) => c.len_utf8(),
            Terminator::Bel => 1,
            Terminator::St => 2,
        }
    }
}

impl fmt::Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminator::Char(c) => write!(f, "{}", c),
            Terminator::Bel => write!(f, "{}", BEL),
            Terminator::St => write!(f, "{}\\", ESC),
        }
    }
}

/// Broad family of a control code, used for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Cursor,
    Erase,
    Edit,
    Scroll,
    Rendition,
    Device,
    Mode,
    Tab,
    Charset,
    Osc,
    State,
    Unknown,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cursor => "cursor movement",
            Category::Erase => "erase",
            Category::Edit => "insert/delete",
            Category::Scroll => "scroll region",
            Category::Rendition => "graphic rendition",
            Category::Device => "device status",
            Category::Mode => "modes",
            Category::Tab => "tab stops",
            Category::Charset => "character sets",
            Category::Osc => "operating system command",
            Category::State => "reset/save/restore",
            Category::Unknown => "unknown",
        }
    }
}

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCode {
    pub introducer: Introducer,
    pub terminator: Terminator,
    pub category: Category,
    pub mnemonic: &'static str,
    pub explanation: &'static str,
    pub glyph: &'static str,
}

const UNKNOWN_MNEMONIC: &str = "?";

impl ControlCode {
    const fn new(
        introducer: Introducer,
        terminator: Terminator,
        category: Category,
        mnemonic: &'static str,
        explanation: &'static str,
        glyph: &'static str,
    ) -> Self {
        Self {
            introducer,
            terminator,
            category,
            mnemonic,
            explanation,
            glyph,
        }
    }

    const fn csi(
        final_char: char,
        category: Category,
        mnemonic: &'static str,
        explanation: &'static str,
        glyph: &'static str,
    ) -> Self {
        Self::new(
            Introducer::Csi,
            Terminator::Char(final_char),
            category,
            mnemonic,
            explanation,
            glyph,
        )
    }

    const fn single(
        introducer: Introducer,
        final_char: char,
        category: Category,
        mnemonic: &'static str,
        explanation: &'static str,
    ) -> Self {
        Self::new(
            introducer,
            Terminator::Char(final_char),
            category,
            mnemonic,
            explanation,
            "☓",
        )
    }

    /// Row for a sequence whose terminator is not in the catalog.
    ///
    /// It still remembers the terminator so the command prints back verbatim.
    pub fn unknown(introducer: Introducer, terminator: Terminator) -> Self {
        Self::new(
            introducer,
            terminator,
            Category::Unknown,
            UNKNOWN_MNEMONIC,
            "unknown sequence",
            "☓",
        )
    }

    pub fn is_unknown(&self) -> bool {
        self.category == Category::Unknown
    }

    /// Serialized length of introducer plus terminator, in bytes.
    pub fn framing_len(&self) -> usize {
        self.introducer.as_str().len() + self.terminator.byte_len()
    }
}

/// Find the row for `final_char` after `introducer`.
///
/// Misses are not errors: they come back as an unknown row carrying the
/// final character.
pub fn lookup(introducer: Introducer, final_char: char) -> ControlCode {
    let terminator = Terminator::Char(final_char);
    introducer
        .table()
        .iter()
        .find(|code| code.terminator == terminator)
        .copied()
        .unwrap_or_else(|| {
            tracing::debug!(
                introducer = ?introducer,
                terminator = ?final_char,
                "unrecognized control sequence"
            );
            ControlCode::unknown(introducer, terminator)
        })
}

use Category::*;

pub static CSI_CODES: &[ControlCode] = &[
    ControlCode::csi('@', Edit, "ICH", "insert blank characters", "░"),
    ControlCode::csi('A', Cursor, "CUU", "move cursor up", "↑"),
    ControlCode::csi('B', Cursor, "CUD", "move cursor down", "↓"),
    ControlCode::csi('C', Cursor, "CUF", "move cursor right", "→"),
    ControlCode::csi('D', Cursor, "CUB", "move cursor left", "←"),
    ControlCode::csi('E', Cursor, "CNL", "move cursor down and to column 1", "↲"),
    ControlCode::csi('F', Cursor, "CPL", "move cursor up and to column 1", "↰"),
    ControlCode::csi('G', Cursor, "CHA", "move cursor to column in current row", "⇹"),
    ControlCode::csi('H', Cursor, "CUP", "move cursor to row, column", "⇱"),
    ControlCode::csi('J', Erase, "ED", "erase display", "⌧"),
    ControlCode::csi('K', Erase, "EL", "erase line", "E"),
    ControlCode::csi('L', Edit, "IL", "insert blank lines", "⋮"),
    ControlCode::csi('M', Edit, "DL", "delete lines", "⟠"),
    ControlCode::csi('P', Edit, "DCH", "delete characters on current line", "⇻"),
    ControlCode::csi('S', Scroll, "SU", "scroll up", "⇞"),
    ControlCode::csi('T', Scroll, "SD", "scroll down", "⇟"),
    ControlCode::csi('X', Erase, "ECH", "erase characters on current line", "⇸"),
    ControlCode::csi('a', Cursor, "HPR", "move cursor right", "→"),
    ControlCode::csi('b', Edit, "REP", "repeat preceding character", "↻"),
    ControlCode::csi('c', Device, "DA", "device attributes", "D"),
    ControlCode::csi('d', Cursor, "VPA", "move to row (current column)", "↕"),
    ControlCode::csi('e', Cursor, "VPR", "move cursor down", "↓"),
    ControlCode::csi('f', Cursor, "HVP", "move cursor to row, column", "⇲"),
    ControlCode::csi('g', Tab, "TBC", "clear tab stop", "↯"),
    ControlCode::csi('h', Mode, "SM", "set mode", "⊕"),
    ControlCode::csi('l', Mode, "RM", "reset mode", "⊖"),
    ControlCode::csi('m', Rendition, "SGR", "set graphic rendition", "·"),
    ControlCode::csi('n', Device, "DSR", "device status report", "⎙"),
    ControlCode::csi('r', Scroll, "DECSTBM", "set scrolling region to (top, bottom) rows", "≡"),
    ControlCode::csi('s', State, "SCP", "save cursor position", "⇅"),
    ControlCode::csi('t', Device, "XTWINOPS", "window manipulation", "▭"),
    ControlCode::csi('u', State, "RCP", "restore cursor position", "⟲"),
    ControlCode::csi('`', Cursor, "HPA", "move cursor to column in current row", "↔"),
];

/// OSC terminated by `BEL`.
pub const OSC: ControlCode = ControlCode::new(
    Introducer::Osc,
    Terminator::Bel,
    Osc,
    "OSC",
    "operating system command",
    "☓",
);

/// OSC terminated by `ESC \`.
pub const OSC_ST: ControlCode = ControlCode::new(
    Introducer::Osc,
    Terminator::St,
    Osc,
    "OSC",
    "operating system command",
    "☓",
);

static OSC_CODES: &[ControlCode] = &[OSC, OSC_ST];

pub static STANDALONE_CODES: &[ControlCode] = &[
    ControlCode::single(Introducer::Standalone, 'c', State, "RIS", "reset"),
    ControlCode::single(Introducer::Standalone, 'D', Scroll, "IND", "line feed"),
    ControlCode::single(Introducer::Standalone, 'E', Cursor, "NEL", "new line"),
    ControlCode::single(Introducer::Standalone, 'H', Tab, "HTS", "set tab stop"),
    ControlCode::single(Introducer::Standalone, 'M', Scroll, "RI", "reverse line feed"),
    ControlCode::single(Introducer::Standalone, 'Z', Device, "DECID", "DEC private identification"),
    ControlCode::single(
        Introducer::Standalone,
        '7',
        State,
        "DECSC",
        "save current state (cursor, attributes, character sets)",
    ),
    ControlCode::single(
        Introducer::Standalone,
        '8',
        State,
        "DECRC",
        "restore state (cursor, attributes, character sets)",
    ),
    ControlCode::single(Introducer::Standalone, '>', Mode, "DECPNM", "set numeric keypad mode"),
    ControlCode::single(Introducer::Standalone, '=', Mode, "DECPAM", "set application keypad mode"),
];

pub static ENCODING_CODES: &[ControlCode] = &[
    ControlCode::single(
        Introducer::Encoding,
        '@',
        Charset,
        "ISO8859",
        "select default (ISO 646 / ISO 8859-1)",
    ),
    ControlCode::single(Introducer::Encoding, 'G', Charset, "UTF8", "select UTF-8"),
    ControlCode::single(Introducer::Encoding, '8', Charset, "UTF8", "select UTF-8 (obsolete)"),
];

pub static G0_CODES: &[ControlCode] = &[
    ControlCode::single(Introducer::G0, 'B', Charset, "G0", "G0 select default (ISO 8859-1 mapping)"),
    ControlCode::single(Introducer::G0, '0', Charset, "G0", "G0 select VT100 graphics mapping"),
    ControlCode::single(Introducer::G0, 'U', Charset, "G0", "G0 select null mapping"),
    ControlCode::single(Introducer::G0, 'K', Charset, "G0", "G0 select user mapping"),
];

pub static G1_CODES: &[ControlCode] = &[
    ControlCode::single(Introducer::G1, 'B', Charset, "G1", "G1 select default (ISO 8859-1 mapping)"),
    ControlCode::single(Introducer::G1, '0', Charset, "G1", "G1 select VT100 graphics mapping"),
    ControlCode::single(Introducer::G1, 'U', Charset, "G1", "G1 select null mapping"),
    ControlCode::single(Introducer::G1, 'K', Charset, "G1", "G1 select user mapping"),
];
