//! Configuration merging and precedence handling.

use crate::config::schema::{AdminConfig, Config};

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use roombook::config::{Config, ConfigMerger};
///
/// let low = Config { busy_timeout_seconds: Some(1), ..Default::default() };
/// let high = Config { busy_timeout_seconds: Some(9), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.busy_timeout_seconds, Some(9));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge source config into target (source overwrites target).
    ///
    /// Scalar fields are replaced when set in `source`; the admin block is
    /// merged field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.busy_timeout_seconds.is_some() {
            target.busy_timeout_seconds = source.busy_timeout_seconds;
        }

        if source.reset_code_ttl_minutes.is_some() {
            target.reset_code_ttl_minutes = source.reset_code_ttl_minutes;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_admin) = source.admin {
            target.admin = Some(match &target.admin {
                Some(target_admin) => Self::merge_admin(target_admin, source_admin),
                None => source_admin.clone(),
            });
        }
    }

    fn merge_admin(target: &AdminConfig, source: &AdminConfig) -> AdminConfig {
        AdminConfig {
            email: source.email.clone().or_else(|| target.email.clone()),
            full_name: source.full_name.clone().or_else(|| target.full_name.clone()),
            password: source.password.clone().or_else(|| target.password.clone()),
        }
    }
}
