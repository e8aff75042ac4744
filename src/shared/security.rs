use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of collaborator output accepted (100 MB)
pub const MAX_COLLABORATOR_OUTPUT: usize = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// A path that does not exist is accepted; callers writing new files rely on this.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => anyhow::bail!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        ),
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates collaborator output size is within acceptable limits
///
/// # Errors
/// Returns an error if the output exceeds `max_size` bytes
pub fn validate_output_size(size: usize, source: &str, max_size: usize) -> Result<()> {
    if size > max_size {
        anyhow::bail!(
            "Security: output of {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            source,
            size,
            max_size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "test").unwrap();

        let result = validate_not_symlink(&file_path, "write");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent_is_allowed() {
        let path = PathBuf::from("/nonexistent/file.txt");
        let result = validate_not_symlink(&path, "write");
        assert!(result.is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_not_symlink_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "test").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_not_symlink(&link, "write");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_output_size_within_limit() {
        let result = validate_output_size(1000, "pip list", MAX_COLLABORATOR_OUTPUT);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_output_size_exceeds_limit() {
        let result = validate_output_size(11, "pip list", 10);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
