//! Property tests for tokenizing, cursor conversion and deletion

use proptest::prelude::*;
use proptest::sample::Index;

use scriptcut::ansi::{serialize, tokenize, total_len};
use scriptcut::Session;

/// Pieces that combine into well-formed, truncated and unknown sequences.
const FRAGMENTS: &[&str] = &[
    "a", "Z", " ", "é", "界", "\r\n", "\t", "\x1b", "\x1b[", "\x1b]", "\x1b(", "\x1b)", "\x1b%",
    "\x07", "\\", "m", "H", "A", "q", "G", "7", "1;31", "?25", "0;title", "2 ",
];

fn content() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..48).prop_map(|parts| parts.concat())
}

/// Timing text splitting `len` bytes into chunks, with some empty entries.
fn timing_for(len: usize, chunks: &[(usize, u32)]) -> String {
    let mut text = String::new();
    let mut covered = 0;
    for &(size, millis) in chunks {
        if covered >= len {
            break;
        }
        let size = size.min(len - covered);
        text.push_str(&format!("{:.3} {}\n", f64::from(millis) / 1000.0, size));
        covered += size;
    }
    if covered < len {
        text.push_str(&format!("0.100 {}\n", len - covered));
    }
    text
}

fn session() -> impl Strategy<Value = Session> {
    (content(), prop::collection::vec((0usize..12, 0u32..2000), 1..24)).prop_map(
        |(text, chunks)| {
            let timing = timing_for(text.len(), &chunks);
            Session::from_text(&text, &timing).expect("generated timing parses")
        },
    )
}

proptest! {
    #[test]
    fn serialize_inverts_tokenize(text in content()) {
        prop_assert_eq!(serialize(&tokenize(&text)), text);
    }

    #[test]
    fn serialize_inverts_tokenize_for_any_string(text in any::<String>()) {
        prop_assert_eq!(serialize(&tokenize(&text)), text);
    }

    #[test]
    fn generated_sessions_are_consistent(session in session()) {
        prop_assert!(session.is_consistent());
    }

    #[test]
    fn position_and_offset_are_inverse(session in session()) {
        for position in 0..session.len() {
            let offset = session.position_to_byte_offset(position).unwrap();
            prop_assert_eq!(session.byte_offset_to_position(offset), Some(position));
        }
        prop_assert_eq!(session.position_to_byte_offset(session.len()), Some(session.total_bytes()));
    }

    #[test]
    fn locate_elapsed_is_monotonic(session in session()) {
        let mut previous = 0.0;
        for offset in 0..=session.total_bytes() + 2 {
            let elapsed = session.locate_timing(offset).elapsed;
            prop_assert!(elapsed >= previous);
            previous = elapsed;
        }
    }

    #[test]
    fn deletions_keep_timing_in_step(
        mut session in session(),
        cuts in prop::collection::vec((any::<Index>(), any::<Index>()), 1..8),
    ) {
        for (a, b) in cuts {
            let len = session.len();
            let (x, y) = (a.index(len + 1), b.index(len + 1));
            let (from, to) = (x.min(y), x.max(y));

            let bytes_before = session.total_bytes();
            let duration_before = session.total_duration();
            let expected = total_len(&session.commands()[from..to]);

            prop_assert_eq!(session.delete_region(from, to), Some(expected));
            prop_assert_eq!(session.len(), len - (to - from));
            prop_assert_eq!(session.total_bytes(), bytes_before - expected);
            prop_assert!(session.is_consistent());
            prop_assert!(session.total_duration() <= duration_before + 1e-9);
            prop_assert!(session.cursor().position <= session.len());
        }
    }

    #[test]
    fn boundary_navigation_stays_on_command_starts(mut session in session()) {
        while session.advance_to_next_timing_boundary() {
            let cursor = session.cursor();
            prop_assert!(cursor.position < session.len());
            prop_assert_eq!(session.position_to_byte_offset(cursor.position), Some(cursor.offset));
        }
        while session.retreat_to_previous_timing_boundary() {
            let cursor = session.cursor();
            prop_assert_eq!(session.position_to_byte_offset(cursor.position), Some(cursor.offset));
        }
    }
}
