//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Credential fields are optional: an unset variable there leaves the field
//! absent so that only the command needing it reports it missing.

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces), so
/// tokens that happen to contain a dollar sign pass through untouched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Expand an optional value in place; an unset variable clears it.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) {
    if let Some(v) = value.as_deref() {
        *value = expand_env(v, field).ok();
    }
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
            std::env::set_var("LANDER_TEST_SPACE", "space123");
        }
        let result = expand_env("${LANDER_TEST_SPACE}", "contentful.space_id").unwrap();
        assert_eq!(result, "space123");
        unsafe {
            std::env::remove_var("LANDER_TEST_SPACE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LANDER_UNSET_ENVIRONMENT");
        }
        let result =
            expand_env("${LANDER_UNSET_ENVIRONMENT:-master}", "contentful.environment").unwrap();
        assert_eq!(result, "master");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LANDER_MISSING_TOKEN");
        }
        let err = expand_env("${LANDER_MISSING_TOKEN}", "contentful.access_token").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("LANDER_MISSING_TOKEN"));
        assert!(err.to_string().contains("contentful.access_token"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("literal-token", "test.field").unwrap();
        assert_eq!(result, "literal-token");
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("tok$en", "test.field").unwrap();
        assert_eq!(result, "tok$en");
    }

    #[test]
    fn test_expand_opt_none_stays_none() {
        let mut value: Option<String> = None;
        expand_opt(&mut value, "test.field");
        assert!(value.is_none());
    }

    #[test]
    fn test_expand_opt_unset_var_clears_value() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LANDER_UNSET_OPTIONAL");
        }
        let mut value = Some("${LANDER_UNSET_OPTIONAL}".to_owned());
        expand_opt(&mut value, "contentful.management_token");
        assert!(value.is_none());
    }
}
