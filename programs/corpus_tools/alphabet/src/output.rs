use crate::error::NormalizeError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Truncates `path` and writes one entry per line. Returns the line count.
pub fn write_entries<'a, I>(path: &Path, entries: I) -> Result<usize, NormalizeError>
where
    I: IntoIterator<Item = &'a str>,
{
    let failed = |source: io::Error| NormalizeError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut wtr = BufWriter::new(File::create(path).map_err(failed)?);
    let mut count = 0;
    for entry in entries {
        wtr.write_all(entry.as_bytes()).map_err(failed)?;
        wtr.write_all(b"\n").map_err(failed)?;
        count += 1;
    }
    wtr.flush().map_err(failed)?;
    Ok(count)
}

#[test]
fn test_write_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    std::fs::write(&path, "stale contents that should go away\n").unwrap();

    let count = write_entries(&path, vec!["", "அ", "b"]).unwrap();
    assert_eq!(count, 3);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "\nஅ\nb\n");

    write_entries(&path, Vec::new()).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"");
}

#[test]
fn test_write_into_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("out.txt");
    match write_entries(&path, vec!["a"]) {
        Err(NormalizeError::Write { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected a write error, got {:?}", other),
    }
}
