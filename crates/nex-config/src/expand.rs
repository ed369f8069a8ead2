//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_string());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_string(),
            }),
        }
    })
    .map(|cow| cow.into_owned())
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_string(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NEX_TEST_VAR_SIMPLE", "hello");
        }
        let result = expand_env("${NEX_TEST_VAR_SIMPLE}", "notion.token").unwrap();
        assert_eq!(result, "hello");
        unsafe {
            std::env::remove_var("NEX_TEST_VAR_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NEX_UNSET_VAR_TEST");
        }
        let result = expand_env("${NEX_UNSET_VAR_TEST:-fallback}", "notion.token").unwrap();
        assert_eq!(result, "fallback");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("NEX_MISSING_VAR_TEST");
        }
        let err = expand_env("${NEX_MISSING_VAR_TEST}", "notion.token").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("NEX_MISSING_VAR_TEST"));
        assert!(err.to_string().contains("notion.token"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("secret_abc123", "notion.token").unwrap();
        assert_eq!(result, "secret_abc123");
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("$VAR", "notion.token").unwrap();
        assert_eq!(result, "$VAR");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("NEX_HOST_TEST", "api.example.com");
        }
        let result = expand_env("https://${NEX_HOST_TEST}/v1", "notion.base_url").unwrap();
        assert_eq!(result, "https://api.example.com/v1");
        unsafe {
            std::env::remove_var("NEX_HOST_TEST");
        }
    }
}
