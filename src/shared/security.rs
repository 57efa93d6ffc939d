use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum config file size (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum length of a system identifier accepted into a request path
const MAX_PATH_SEGMENT_LENGTH: usize = 128;

/// Validates a value before it is placed into a URL path segment.
///
/// # Security
/// System identifiers come from the listing response and are echoed back
/// into detail/errata URLs. Path separators, parent references and URL
/// delimiters would let a hostile response redirect those requests.
///
/// # Errors
/// Returns an error if the component is empty, too long, or contains
/// `/`, `\`, `..`, `#`, `?` or `@`.
pub fn validate_path_segment(component: &str, component_type: &str) -> Result<()> {
    if component.is_empty() {
        anyhow::bail!("{} must not be empty", component_type);
    }

    if component.len() > MAX_PATH_SEGMENT_LENGTH {
        anyhow::bail!(
            "{} is too long ({} bytes). Maximum allowed: {} bytes",
            component_type,
            component.len(),
            MAX_PATH_SEGMENT_LENGTH
        );
    }

    if component.contains('/') || component.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            component_type
        );
    }

    if component.contains("..") {
        anyhow::bail!(
            "Security: {} contains '..' which is not allowed",
            component_type
        );
    }

    if component.contains('#') || component.contains('?') || component.contains('@') {
        anyhow::bail!(
            "Security: {} contains URL-unsafe characters",
            component_type
        );
    }

    Ok(())
}

/// Validates that a config path is a regular file of reasonable size.
///
/// Uses `symlink_metadata()` so a symbolic link is rejected rather than
/// followed.
pub fn validate_config_file(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read metadata for {}: {}", path.display(), e)
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

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_CONFIG_FILE_SIZE
        );
    }

    Ok(())
}
