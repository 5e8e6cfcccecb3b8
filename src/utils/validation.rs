use crate::utils::error::{FetchError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> FetchError {
    FetchError::InvalidConfig {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Only absolute `http`/`https` URLs can be fetched.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        Err(invalid(field_name, path, "Path cannot be empty"))
    } else if path.contains('\0') {
        Err(invalid(field_name, path, "Path contains null bytes"))
    } else {
        Ok(())
    }
}

/// A bare file name: no separators, not `.` or `..`.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    let mut components = std::path::Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(invalid(
            field_name,
            name,
            "Expected a plain file name without directories",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("url", "https://example.com/dummy.pdf").is_ok());
        assert!(validate_url("url", "http://127.0.0.1:8080/a.pdf").is_ok());
        assert!(validate_url("url", "").is_err());
        assert!(validate_url("url", "not a url").is_err());
        assert!(validate_url("url", "ftp://example.com/a.pdf").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_dir", "inputs").is_ok());
        assert!(validate_path("output_dir", "").is_err());
        assert!(validate_path("output_dir", "   ").is_err());
        assert!(validate_path("output_dir", "in\0puts").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("file_name", "bray_sample.pdf").is_ok());
        assert!(validate_file_name("file_name", "sub/bray_sample.pdf").is_err());
        assert!(validate_file_name("file_name", "..").is_err());
        assert!(validate_file_name("file_name", ".").is_err());
    }
}
