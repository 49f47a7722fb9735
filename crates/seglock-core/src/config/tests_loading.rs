//! Loading-focused tests for configuration

#[cfg(test)]
mod loading_tests {
    use std::io::Write;

    use serial_test::serial;

    use crate::config::{load_config, load_toml_file, Config, LockLimits};
    use crate::{Error, Result};

    fn write_config(contents: &str) -> Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()
            .map_err(|e| Error::io_error(format!("Failed to create temp file: {e}")))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| Error::io_error(format!("Failed to write temp file: {e}")))?;
        Ok(file)
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let file = write_config("[limits]\nmax_segments = 5\n")?;
        let config = load_toml_file(file.path())?;

        assert_eq!(config.limits.max_segments, 5);
        assert_eq!(config.limits.min_segments, 2);
        assert_eq!(config.logging.level, "info");
        Ok(())
    }

    #[test]
    fn test_malformed_toml_returns_parse_error() -> Result<()> {
        let file = write_config("[limits\nmax_segments = ")?;
        let result = load_toml_file(file.path());
        assert!(matches!(result, Err(Error::ParseError(_))));
        Ok(())
    }

    #[test]
    fn test_directory_path_is_rejected() -> Result<()> {
        let dir = tempfile::tempdir()
            .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
        let result = load_toml_file(dir.path());
        assert!(matches!(result, Err(Error::IoError(_))));
        Ok(())
    }

    #[test]
    fn test_merge_prefers_non_default_values() {
        let base = Config {
            limits: LockLimits {
                max_segments: 5,
                ..LockLimits::default()
            },
            ..Config::default()
        };
        let other = Config {
            limits: LockLimits {
                max_segment_length: 3,
                ..LockLimits::default()
            },
            ..Config::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.limits.max_segments, 5);
        assert_eq!(merged.limits.max_segment_length, 3);
    }

    #[test]
    #[serial]
    fn test_explicit_file_is_applied() -> Result<()> {
        let file = write_config("[logging]\nlevel = \"debug\"\n")?;
        let config = load_config(Some(file.path()))?;
        assert_eq!(config.logging.level, "debug");
        Ok(())
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_file() -> Result<()> {
        let file = write_config("[limits]\nmax_segments = 5\n")?;
        std::env::set_var("SEGLOCK_MAX_SEGMENTS", "4");
        let result = load_config(Some(file.path()));
        std::env::remove_var("SEGLOCK_MAX_SEGMENTS");

        assert_eq!(result?.limits.max_segments, 4);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_env_var_cannot_widen_segment_count() {
        std::env::set_var("SEGLOCK_MAX_SEGMENTS", "8");
        let result = load_config(None);
        std::env::remove_var("SEGLOCK_MAX_SEGMENTS");

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    #[serial]
    fn test_file_cannot_widen_segment_length() -> Result<()> {
        let file = write_config("[limits]\nmax_segment_length = 8\n")?;
        let result = load_config(Some(file.path()));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_file_cannot_disable_lock_flags() -> Result<()> {
        let file = write_config("[limits]\nmax_lock_flags = 0\n")?;
        let result = load_config(Some(file.path()));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_unparsable_env_var_is_rejected() {
        std::env::set_var("SEGLOCK_MAX_SEGMENT_LENGTH", "four");
        let result = load_config(None);
        std::env::remove_var("SEGLOCK_MAX_SEGMENT_LENGTH");

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
