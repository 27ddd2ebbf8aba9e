use super::*;
use crate::sandbox::SandboxRoot;
use crate::stat::{FileType, UnixtimeUs};
use chrono::DateTime;
use std::fs;

fn lines(buf: &[u8]) -> Vec<serde_json::Value> {
    std::str::from_utf8(buf)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

/// Accepts `limit` bytes, then fails every write
struct FailingWriter {
    accepted: Vec<u8>,
    limit: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.accepted.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.accepted.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_one_object_per_line() {
    let stats = vec![
        Ok(BasicStat::new("a", 1, UnixtimeUs(0), FileType::Regular)),
        Ok(BasicStat::new("b", 2, UnixtimeUs(0), FileType::Symlink)),
    ];
    let mut buf = Vec::new();

    let count = JsonlEncoder::new().encode(&mut buf, stats).unwrap();
    assert_eq!(count, 2);

    let text = String::from_utf8(buf.clone()).unwrap();
    assert!(text.ends_with('\n'));
    assert!(!text.starts_with('['));

    let values = lines(&buf);
    assert_eq!(values.len(), 2);
    assert_eq!(values[0]["path"], "a");
    assert_eq!(values[1]["file_type"], "symbolic link");
}

#[test]
fn test_field_names() {
    let stats = vec![Ok(BasicStat::new("x", 0, UnixtimeUs(0), FileType::Pipe))];
    let mut buf = Vec::new();
    JsonlEncoder::new().encode(&mut buf, stats).unwrap();

    let value = &lines(&buf)[0];
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    for key in ["path", "size", "modified_time", "file_type"] {
        assert!(keys.contains(&key), "missing {}", key);
    }
    assert_eq!(keys.len(), 4);
}

#[test]
fn test_known_directory_record() {
    let micros = 1_234_567_890_123_456;
    let stats = vec![Ok(BasicStat::new(
        "dir",
        42,
        UnixtimeUs(micros),
        FileType::Directory,
    ))];
    let mut buf = Vec::new();
    JsonlEncoder::new().encode(&mut buf, stats).unwrap();

    let value = &lines(&buf)[0];
    assert_eq!(value["size"], 42);
    assert_eq!(value["file_type"], "directory");
    let modified = DateTime::parse_from_rfc3339(value["modified_time"].as_str().unwrap()).unwrap();
    assert_eq!(modified.timestamp_micros(), micros);
}

#[test]
fn test_upstream_error_stops_and_keeps_written_lines() {
    let stats = vec![
        Ok(BasicStat::new("a", 1, UnixtimeUs(0), FileType::Regular)),
        Err(StatError::NameNotFound {
            name: "b".to_string(),
        }),
        Ok(BasicStat::new("c", 3, UnixtimeUs(0), FileType::Regular)),
    ];
    let mut buf = Vec::new();

    let err = JsonlEncoder::new().encode(&mut buf, stats).unwrap_err();
    assert!(matches!(err, StatError::NameNotFound { ref name } if name == "b"));

    let values = lines(&buf);
    assert_eq!(values.len(), 1);
    assert_eq!(values[0]["path"], "a");
}

#[test]
fn test_write_failure_is_encode_failure() {
    let stats = (0..1000).map(|i| {
        Ok(BasicStat::new(
            format!("file-{i}"),
            i,
            UnixtimeUs(0),
            FileType::Regular,
        ))
    });
    let mut sink = FailingWriter {
        accepted: Vec::new(),
        limit: 64,
    };

    let err = JsonlEncoder::new().encode(&mut sink, stats).unwrap_err();
    assert!(matches!(err, StatError::EncodeFailure(_)));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_out_of_range_time_is_encode_failure() {
    let stats = vec![Ok(BasicStat::new(
        "far",
        0,
        UnixtimeUs(i64::MIN),
        FileType::Regular,
    ))];
    let mut buf = Vec::new();
    let err = JsonlEncoder::new().encode(&mut buf, stats).unwrap_err();
    assert!(matches!(err, StatError::EncodeFailure(_)));
}

#[test]
fn test_custom_labels_are_used() {
    let labels = FileTypeLabels::default().with(FileType::Regular, "file");
    let stats = vec![Ok(BasicStat::new("a", 1, UnixtimeUs(0), FileType::Regular))];
    let mut buf = Vec::new();

    JsonlEncoder::with_labels(labels).encode(&mut buf, stats).unwrap();
    assert_eq!(lines(&buf)[0]["file_type"], "file");
}

#[test]
fn test_encode_from_stat_stream_stops_at_failing_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a"), b"aaaa").unwrap();
    fs::write(dir.path().join("c"), b"c").unwrap();
    let root = SandboxRoot::open(dir.path()).unwrap();
    let mut buf = Vec::new();

    let err = JsonlEncoder::new()
        .encode(&mut buf, root.stats(["a", "b", "c"]))
        .unwrap_err();
    assert!(matches!(err, StatError::NameNotFound { ref name } if name == "b"));

    let values = lines(&buf);
    assert_eq!(values.len(), 1);
    assert_eq!(values[0]["path"], "a");
    assert_eq!(values[0]["size"], 4);
    assert_eq!(values[0]["file_type"], "regular file");
}

#[test]
fn test_empty_stream_writes_nothing() {
    let mut buf = Vec::new();
    let count = JsonlEncoder::new()
        .encode(&mut buf, std::iter::empty())
        .unwrap();
    assert_eq!(count, 0);
    assert!(buf.is_empty());
}
