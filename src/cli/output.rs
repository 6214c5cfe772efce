//! Output destination for generated documents

use std::io::Write;
use std::path::Path;

use super::error::CliError;

/// Write the document to `path`, or to stdout when no path is given
///
/// A trailing newline is appended in both cases.
pub fn write_output(document: &[u8], path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(path) => {
            let mut content = document.to_vec();
            content.push(b'\n');
            std::fs::write(path, content)
                .map_err(|e| CliError::OutputWrite(path.to_path_buf(), e.to_string()))?;
            eprintln!("Schema written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(document)
                .and_then(|_| handle.write_all(b"\n"))
                .and_then(|_| handle.flush())
                .map_err(|e| CliError::OutputWrite("<stdout>".into(), e.to_string()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");

        write_output(br#"{"type":"object"}"#, Some(&path)).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "{\"type\":\"object\"}\n"
        );
    }

    #[test]
    fn test_write_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("schema.json");

        let err = write_output(b"{}", Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::OutputWrite(p, _) if p == path));
    }
}
