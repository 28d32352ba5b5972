//! Java-style properties file parsing
//!
//! Android projects keep build-time secrets in plain `key=value` files
//! next to the Gradle scripts (conventionally `key.properties`, kept out
//! of version control). This is a minimal reader for that format: one
//! pair per line, `#` and `!` comments, later duplicates win.

use crate::error::{ConfigError, Result};
use std::collections::HashMap;
use std::path::Path;

/// An immutable set of key-value pairs loaded from a properties file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySource {
    entries: HashMap<String, String>,
}

impl PropertySource {
    /// Load a properties file.
    ///
    /// A missing file is not an error: it yields an empty source, so
    /// every lookup falls back to the empty string. An existing file
    /// that cannot be read or parsed is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::MalformedLine {
                    path: path.to_path_buf(),
                    line: idx + 1,
                });
            };

            // java.util.Properties keeps the last value for duplicate keys
            entries.insert(key.trim().to_string(), value.trim().to_string());
        }

        Ok(Self { entries })
    }

    /// Look up a key, defaulting to the empty string when absent
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or("")
    }

    /// Whether the source holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries in the source
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_props(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_basic_pairs() {
        let file = write_props("keyAlias=upload\nstoreFile=upload.jks\n");
        let props = PropertySource::load(file.path()).unwrap();

        assert_eq!(props.get("keyAlias"), "upload");
        assert_eq!(props.get("storeFile"), "upload.jks");
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_missing_file_is_empty_source() {
        let props = PropertySource::load(Path::new("/nonexistent/key.properties")).unwrap();
        assert!(props.is_empty());
        assert_eq!(props.get("keyAlias"), "");
    }

    #[test]
    fn test_absent_key_defaults_to_empty_string() {
        let file = write_props("keyAlias=upload\n");
        let props = PropertySource::load(file.path()).unwrap();
        assert_eq!(props.get("storePassword"), "");
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let file = write_props("# release keystore\n\n! legacy comment\nkeyAlias=upload\n");
        let props = PropertySource::load(file.path()).unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("keyAlias"), "upload");
    }

    #[test]
    fn test_whitespace_trimmed_around_key_and_value() {
        let file = write_props("  keyAlias =  upload  \n");
        let props = PropertySource::load(file.path()).unwrap();
        assert_eq!(props.get("keyAlias"), "upload");
    }

    #[test]
    fn test_duplicate_key_keeps_last_value() {
        let file = write_props("keyAlias=first\nkeyAlias=second\n");
        let props = PropertySource::load(file.path()).unwrap();
        assert_eq!(props.get("keyAlias"), "second");
    }

    #[test]
    fn test_value_may_contain_equals_sign() {
        let file = write_props("storePassword=a=b=c\n");
        let props = PropertySource::load(file.path()).unwrap();
        assert_eq!(props.get("storePassword"), "a=b=c");
    }

    #[test]
    fn test_empty_value_is_kept() {
        let file = write_props("storeFile=\n");
        let props = PropertySource::load(file.path()).unwrap();
        assert_eq!(props.get("storeFile"), "");
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_line_without_separator_is_fatal() {
        let file = write_props("keyAlias=upload\nthis is not a pair\n");
        let err = PropertySource::load(file.path()).unwrap_err();

        match err {
            ConfigError::MalformedLine { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }
}
