//! Script files executed end to end through `ScriptRunner::run_file`.

use std::io::Write;

use citegraph_cli::{CliError, Outcome, ScriptRunner, Value};

fn write_script(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_run_file_multi_parent_survival() {
    let script = write_script(
        "# root -> A, root -> B, C cites both\n\
         create A R\n\
         create B R\n\
         create C A B\n\
         remove A\n\
         exists C\n\
         parents C\n",
    );

    let mut runner = ScriptRunner::new("R".into());
    let reports = runner.run_file(script.path()).unwrap();

    assert_eq!(reports.len(), 6);
    assert!(reports.iter().all(|r| !r.is_error()));
    assert_eq!(
        reports[4].outcome,
        Outcome::Ok {
            value: Some(Value::Flag(true))
        }
    );
    assert_eq!(
        reports[5].outcome,
        Outcome::Ok {
            value: Some(Value::Ids(vec!["B".into()]))
        }
    );
}

#[test]
fn test_run_file_atomic_create_failure() {
    let script = write_script("create A R\ncreate C A missing\nexists C\nchildren A\n");

    let mut runner = ScriptRunner::new("R".into());
    let reports = runner.run_file(script.path()).unwrap();

    assert!(reports[1].is_error());
    assert_eq!(reports[1].to_string(), "2: create failed: PublicationNotFound (missing)");
    assert_eq!(reports[2].to_string(), "3: exists false");
    assert_eq!(reports[3].to_string(), "4: children []");
    assert_eq!(runner.failures(), 1);
}

#[test]
fn test_run_file_parse_error_runs_nothing() {
    let script = write_script("create A R\nfrobnicate A\n");

    let mut runner = ScriptRunner::new("R".into());
    let err = runner.run_file(script.path()).unwrap_err();

    assert!(matches!(err, CliError::Parse { line: 2, .. }));
    assert!(!runner.graph().exists(&"A".into()));
}

#[test]
fn test_run_file_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut runner = ScriptRunner::new("R".into());
    let err = runner.run_file(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, CliError::Io(_)));
}
