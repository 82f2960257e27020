use crate::types::Settings;
use std::fs;
use std::path::Path;
use thiserror::Error;

const MAX_TIMEOUT_SECS: u64 = 3600;

/// Validation errors for settings values
#[derive(Debug, Error)]
pub enum SecurityError {
    #[error("Executable path must not be empty")]
    EmptyExecutable,

    #[error("Executable path contains control characters")]
    InvalidExecutable,

    #[error("Timeout must be between 1 and 3600 seconds, got {0}")]
    InvalidTimeout(u64),
}

/// Validate the executable used to produce reports
///
/// The path is passed straight to the OS as a program name, never through a
/// shell, so only emptiness and control characters are rejected.
pub fn validate_executable(path: &str) -> Result<(), SecurityError> {
    if path.trim().is_empty() {
        return Err(SecurityError::EmptyExecutable);
    }

    if path.chars().any(|c| c.is_control()) {
        return Err(SecurityError::InvalidExecutable);
    }

    Ok(())
}

/// Validate the report command timeout
pub fn validate_timeout(secs: u64) -> Result<(), SecurityError> {
    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(SecurityError::InvalidTimeout(secs));
    }
    Ok(())
}

/// Validate every field of `settings`
pub fn validate_settings(settings: &Settings) -> Result<(), SecurityError> {
    validate_executable(&settings.deno_path)?;
    validate_timeout(settings.timeout_secs)?;
    Ok(())
}

/// Set restrictive permissions on config file (Unix only)
#[cfg(unix)]
pub fn set_config_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o600); // rw-------
    fs::set_permissions(path, perms)?;
    Ok(())
}

/// Set config permissions (no-op on Windows for now)
#[cfg(not(unix))]
pub fn set_config_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
