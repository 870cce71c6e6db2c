use planet_driver::{check_file, CheckError};
use std::io::Write;

#[test]
fn test_check_file_reports_planets() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "earth orbits the sun").unwrap();
    writeln!(file, "Neptune is fine, neptune is not").unwrap();

    let output = check_file(file.path()).unwrap();

    assert_eq!(output.sink.warning_count(), 2);
    let spans: Vec<_> = output
        .sink
        .diagnostics()
        .iter()
        .map(|d| d.span.clone())
        .collect();
    for span in spans {
        assert!(output.source[span].chars().all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn test_check_file_invalid_utf8() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"mars \xff\xfe venus").unwrap();

    let output = check_file(file.path()).unwrap();

    assert_eq!(output.sink.len(), 2);
    assert!(output.source.contains('\u{FFFD}'));
}

#[test]
fn test_check_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let err = check_file(&missing).unwrap_err();

    assert!(matches!(err, CheckError::Io { .. }));
    assert!(err.to_string().contains("missing.txt"));
}
