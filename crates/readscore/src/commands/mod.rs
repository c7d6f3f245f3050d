//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Check the size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn write_tmp(contents: &str) -> (TempDir, Utf8PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("input.txt")).unwrap();
        std::fs::write(&path, contents).unwrap();
        (tmp, path)
    }

    #[test]
    fn reads_within_limit() {
        let (_tmp, path) = write_tmp("Short text.");
        assert_eq!(read_input_file(&path, Some(100)).unwrap(), "Short text.");
        assert_eq!(read_input_file(&path, None).unwrap(), "Short text.");
    }

    #[test]
    fn rejects_over_limit() {
        let (_tmp, path) = write_tmp("This text is longer than ten bytes.");
        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_input_file(Utf8Path::new("/nonexistent/readscore.txt"), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/readscore.txt"));
    }
}
