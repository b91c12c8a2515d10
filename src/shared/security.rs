use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a single persisted value (5 MiB)
pub const MAX_VALUE_SIZE: u64 = 5 * 1024 * 1024;

/// Maximum length of a store key
const MAX_KEY_LENGTH: usize = 64;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata: {}",
            file_description,
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates that a stored value fits in the storage quota
///
/// # Errors
/// Returns an error if `size` exceeds `max_size`
pub fn validate_value_size(size: u64, key: &str, max_size: u64) -> Result<()> {
    if size > max_size {
        anyhow::bail!(
            "Quota exceeded: value for '{}' is {} bytes. Maximum allowed size is {} bytes.",
            key,
            size,
            max_size
        );
    }
    Ok(())
}

/// Validates a store key before it is turned into a file name
///
/// # Security
/// Only ASCII alphanumerics, '-' and '_' are accepted, which rules out path
/// separators and `..` segments.
pub fn validate_store_key(key: &str) -> Result<()> {
    if key.is_empty() {
        anyhow::bail!("Store key cannot be empty");
    }

    if key.len() > MAX_KEY_LENGTH {
        anyhow::bail!(
            "Store key is too long ({} bytes). Maximum allowed: {} bytes",
            key.len(),
            MAX_KEY_LENGTH
        );
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        anyhow::bail!(
            "Security: store key '{}' contains invalid characters. Only alphanumeric, hyphens and underscores are allowed.",
            key
        );
    }

    Ok(())
}
