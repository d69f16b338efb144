//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{AdminConfig, Config, OutputFormat};
use proptest::prelude::*;

fn admin_strategy() -> impl Strategy<Value = AdminConfig> {
    (
        prop::option::of("[a-z]{1,8}@[a-z]{1,8}\\.test"),
        prop::option::of("[A-Z][a-z]{1,12}"),
        prop::option::of("[a-zA-Z0-9]{1,16}"),
    )
        .prop_map(|(email, full_name, password)| AdminConfig {
            email,
            full_name,
            password,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(1u64..3600),
        prop::option::of(1u64..1440),
        prop::option::of(admin_strategy()),
        prop::option::of(prop_oneof![
            Just(OutputFormat::Table),
            Just(OutputFormat::Json),
            Just(OutputFormat::Csv),
            Just(OutputFormat::Tsv),
        ]),
    )
        .prop_map(|(busy, ttl, admin, output_format)| Config {
            busy_timeout_seconds: busy,
            reset_code_ttl_minutes: ttl,
            admin,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Set fields in the higher layer always win
    #[test]
    fn higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(
            result.busy_timeout_seconds,
            high.busy_timeout_seconds.or(low.busy_timeout_seconds)
        );
        prop_assert_eq!(
            result.reset_code_ttl_minutes,
            high.reset_code_ttl_minutes.or(low.reset_code_ttl_minutes)
        );
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));

        let high_email = high.admin.as_ref().and_then(|a| a.email.clone());
        let low_email = low.admin.as_ref().and_then(|a| a.email.clone());
        let merged_email = result.admin.as_ref().and_then(|a| a.email.clone());
        prop_assert_eq!(merged_email, high_email.or(low_email));
    }

    #[test]
    fn merging_default_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    #[test]
    fn merging_is_idempotent(low in config_strategy(), high in config_strategy()) {
        let mut once = low;
        ConfigMerger::merge_into(&mut once, &high);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &high);
        prop_assert_eq!(once, twice);
    }
}
