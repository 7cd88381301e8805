//! scriptcut - browse, cut and replay terminal sessions recorded with script(1)
//!
//! A capture is the pair of files `script --timing` writes: the raw
//! terminal output and a timing file that paces it. This crate tokenizes
//! the output into [`ansi::Command`]s, keeps the timing in step with every
//! edit, and replays the result.
//!
//! ```
//! use scriptcut::Session;
//!
//! let mut session = Session::from_text("ab\x1b[1mcd", "0.1 2\n0.2 4\n0.3 2\n").unwrap();
//! session.delete_region(2, 3);
//! assert_eq!(session.content_string(), "abcd");
//! assert_eq!(session.timing_string(), "0.100000 2\n0.300000 2\n");
//! ```

pub mod ansi;
pub mod capture;
pub mod config;
pub mod player;
pub mod session;
pub mod theme;
pub mod timing;

pub use capture::{Capture, CaptureError, CapturePaths};
pub use config::Config;
pub use session::{Cursor, MarkRange, Session};
pub use timing::{TimingEntry, TimingError, TimingTrack};
