//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use proptest::prelude::*;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Human), Just(OutputFormat::Json)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(output_format_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(prop_oneof![
            Just("quiet".to_string()),
            Just("normal".to_string()),
            Just("verbose".to_string()),
        ]),
    )
        .prop_map(|(output_format, confirm_merges, strict_identity, log_mode)| Config {
            output_format,
            confirm_merges,
            strict_identity,
            log_mode,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher source always win, unset ones never clear
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.confirm_merges, high.confirm_merges.or(low.confirm_merges));
        prop_assert_eq!(merged.strict_identity, high.strict_identity.or(low.strict_identity));
        prop_assert_eq!(merged.log_mode, high.log_mode.or(low.log_mode));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // YAML encoding is lossless
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let decoded: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(decoded, config);
    }
}
