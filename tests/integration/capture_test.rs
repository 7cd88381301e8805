//! Integration tests for loading and saving captures

use std::fs;

use super::helpers::{
    demo_content, load_fixture, temp_fixture, DEMO_BYTES, DEMO_COMMANDS, DEMO_ENTRIES,
};
use scriptcut::capture::backup_path;
use scriptcut::config::CaptureConfig;
use scriptcut::{Capture, CapturePaths};

#[test]
fn demo_fixture_loads() {
    let capture = load_fixture("demo");
    let session = &capture.session;

    assert_eq!(session.len(), DEMO_COMMANDS);
    assert_eq!(session.total_bytes(), DEMO_BYTES);
    assert!(session.is_consistent());
    assert_eq!(session.timings().len(), DEMO_ENTRIES + 1);
    assert!((session.total_duration() - 4.714).abs() < 1e-6);
    assert!(capture.trailer.starts_with("\nScript done on"));
}

#[test]
fn demo_content_matches_file() {
    let capture = load_fixture("demo");
    assert_eq!(capture.session.content_string(), demo_content());
}

#[test]
fn unedited_save_keeps_content_and_timing() {
    let (_dir, base) = temp_fixture("demo");
    let config = CaptureConfig::default();
    let paths = CapturePaths::from_base(&base, &config);
    let original_timing = fs::read_to_string(&paths.timing).unwrap();

    let capture = Capture::load(paths.clone()).unwrap();
    capture.save(&config).unwrap();

    let saved = fs::read_to_string(&paths.session).unwrap();
    assert!(saved.starts_with("Script edited by scriptcut\n"));
    assert!(saved.ends_with("[COMMAND_EXIT_CODE=\"0\"]\n"));
    assert_eq!(fs::read_to_string(&paths.timing).unwrap(), original_timing);
}

#[test]
fn edited_save_reloads_identically() {
    let (_dir, base) = temp_fixture("demo");
    let config = CaptureConfig::default();
    let paths = CapturePaths::from_base(&base, &config);

    let mut capture = Capture::load(paths.clone()).unwrap();
    capture.session.delete_region(7, 27);
    capture.session.delete_region(0, 1);
    capture.save(&config).unwrap();

    let reloaded = Capture::load(paths.clone()).unwrap();
    assert_eq!(reloaded.session.commands(), capture.session.commands());
    assert_eq!(reloaded.session.timings(), capture.session.timings());
    assert!(reloaded.session.is_consistent());
    assert_eq!(reloaded.trailer, capture.trailer);

    assert!(backup_path(&paths.session, &config.backup_suffix).exists());
    assert!(backup_path(&paths.timing, &config.backup_suffix).exists());
}

#[test]
fn second_save_replaces_backup() {
    let (_dir, base) = temp_fixture("demo");
    let config = CaptureConfig::default();
    let paths = CapturePaths::from_base(&base, &config);

    let mut capture = Capture::load(paths.clone()).unwrap();
    capture.session.delete_region(0, 1);
    capture.save(&config).unwrap();
    let first_save = fs::read_to_string(&paths.session).unwrap();

    capture.session.delete_region(0, 1);
    capture.save(&config).unwrap();

    let backup = fs::read_to_string(backup_path(&paths.session, &config.backup_suffix)).unwrap();
    assert_eq!(backup, first_save);
}

#[test]
fn custom_header_is_written() {
    let (_dir, base) = temp_fixture("demo");
    let config = CaptureConfig {
        header: "edited".to_string(),
        keep_backups: false,
        ..CaptureConfig::default()
    };
    let paths = CapturePaths::from_base(&base, &config);

    Capture::load(paths.clone()).unwrap().save(&config).unwrap();

    let saved = fs::read_to_string(&paths.session).unwrap();
    assert!(saved.starts_with("edited\n\x1b]0;"));
}
