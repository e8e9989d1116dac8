//! End-to-end tests: config file in, demos run, transcript out.

use kidcalc_common::{InstantPacer, Level, LogLine, NullSink, Session};
use kidcalc_runner::{demos, run_demos, select, write_transcript, ConfigError, RunnerConfig, RunnerError};
use std::io::Write;

fn quiet_session() -> Session {
    Session::new(Box::new(NullSink), Box::new(InstantPacer::new()))
}

#[test]
fn test_config_file_drives_demo_inputs() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "addition:\n  eggs_have: 20\n  eggs_new: 22\n  examples: []\nshopping:\n  people: 2"
    )
    .unwrap();

    let config = RunnerConfig::from_file(file.path()).expect("config should load");
    let selected = select(
        demos(&config),
        &["addition".to_string(), "shopping".to_string()],
    )
    .unwrap();

    let mut session = quiet_session();
    let summary = run_demos(&selected, &mut session);

    assert_eq!(summary.runs.len(), 2);
    assert!(session.find("Mom has 42 eggs today").is_some());
    // 280.34 split two ways
    assert!(session.find("140.17 baht/person").is_some());
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RunnerConfig::from_file(dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_unknown_demo_is_an_error() {
    let err = select(demos(&RunnerConfig::default()), &["fractions".to_string()]).err();
    assert!(matches!(err, Some(RunnerError::UnknownDemo { .. })));
}

#[test]
fn test_transcript_round_trip() {
    let mut session = quiet_session();
    let selected = select(demos(&RunnerConfig::default()), &["error-handling".to_string()]).unwrap();
    run_demos(&selected, &mut session);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.json");
    write_transcript(&path, session.transcript()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<LogLine> = serde_json::from_str(&text).unwrap();
    assert_eq!(lines, session.transcript());

    let errors = lines.iter().filter(|l| l.level == Some(Level::Error)).count();
    assert_eq!(errors, 7);
    assert!(lines.iter().all(|l| l.tag == "ERROR_HANDLING"));
}

#[test]
fn test_timestamps_never_go_backwards() {
    let mut session = quiet_session();
    run_demos(&demos(&RunnerConfig::default()), &mut session);

    let stamps: Vec<u64> = session.transcript().iter().map(|l| l.timestamp_ms).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*stamps.last().unwrap(), session.elapsed_ms());
}
