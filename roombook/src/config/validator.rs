//! Configuration validation.

use crate::config::schema::{AdminConfig, Config, MAX_RESET_CODE_TTL_MINUTES};
use crate::error::{Error, Result};

/// Validates merged configuration before it is used.
///
/// # Examples
///
/// ```
/// use roombook::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let broken = Config { reset_code_ttl_minutes: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&broken).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a zero timeout, a lifetime that is
    /// zero or longer than a week, or an admin field that is set but empty.
    pub fn validate(config: &Config) -> Result<()> {
        if config.busy_timeout_seconds == Some(0) {
            return Err(Error::Validation {
                field: "busy_timeout_seconds".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        if config.reset_code_ttl_minutes == Some(0) {
            return Err(Error::Validation {
                field: "reset_code_ttl_minutes".into(),
                message: "Reset codes must live at least one minute".into(),
            });
        }

        if let Some(minutes) = config.reset_code_ttl_minutes {
            if minutes > MAX_RESET_CODE_TTL_MINUTES {
                return Err(Error::Validation {
                    field: "reset_code_ttl_minutes".into(),
                    message: format!(
                        "Reset codes may live at most {MAX_RESET_CODE_TTL_MINUTES} minutes"
                    ),
                });
            }
        }

        if let Some(ref admin) = config.admin {
            Self::validate_admin(admin)?;
        }

        Ok(())
    }

    fn validate_admin(admin: &AdminConfig) -> Result<()> {
        for (field, value) in [
            ("admin.email", &admin.email),
            ("admin.full_name", &admin.full_name),
            ("admin.password", &admin.password),
        ] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(Error::Validation {
                    field: field.into(),
                    message: "Cannot be empty or only whitespace".into(),
                });
            }
        }

        if let Some(ref email) = admin.email {
            if !email.contains('@') {
                return Err(Error::Validation {
                    field: "admin.email".into(),
                    message: format!("Not an email address: '{email}'"),
                });
            }
        }

        Ok(())
    }
}
