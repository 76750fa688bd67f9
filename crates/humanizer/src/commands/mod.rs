//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod expand;
pub mod humanize;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Check the size before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read from `reader`, failing once more than `max_bytes` arrive.
pub fn read_limited(reader: impl Read, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    match max_bytes {
        Some(max) => {
            let cap = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(cap)
                .read_to_string(&mut content)
                .context("failed to read standard input")?;
            if content.len() > max {
                anyhow::bail!("input too large: standard input exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_string(&mut content)
                .context("failed to read standard input")?;
        }
    }
    Ok(content)
}

/// Read a file, or standard input when `path` is `None` or `-`.
pub fn read_input(path: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_str() != "-" => read_input_file(path, max_bytes),
        _ => read_limited(std::io::stdin().lock(), max_bytes),
    }
}

/// Write `content` to `path`, or print it when `path` is `None`.
pub fn write_output(path: Option<&Utf8Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => std::fs::write(path.as_std_path(), content)
            .with_context(|| format!("failed to write {path}")),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_limited_accepts_input_at_limit() {
        let input = "a".repeat(16);
        assert_eq!(read_limited(input.as_bytes(), Some(16)).unwrap(), input);
    }

    #[test]
    fn read_limited_rejects_oversized_input() {
        let input = "a".repeat(17);
        let err = read_limited(input.as_bytes(), Some(16)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn read_limited_without_limit() {
        let input = "a".repeat(1024);
        assert_eq!(read_limited(input.as_bytes(), None).unwrap().len(), 1024);
    }

    #[test]
    fn read_input_file_rejects_oversized_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("big.txt");
        std::fs::write(&path, "x".repeat(64)).unwrap();
        let path = camino::Utf8PathBuf::try_from(path).unwrap();

        assert!(read_input_file(&path, Some(63)).is_err());
        assert_eq!(read_input_file(&path, Some(64)).unwrap().len(), 64);
        assert_eq!(read_input(Some(&path), None).unwrap().len(), 64);
    }
}
