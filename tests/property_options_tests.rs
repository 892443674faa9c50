use chart_config_rs::options::{BaseChartOptions, OpenEnum};
use chart_config_rs::{validate_for_kind, ChartConfig, ChartKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_string_is_a_valid_theme(theme in ".*") {
        let value = serde_json::json!({ "theme": theme.clone() });
        let base: BaseChartOptions =
            serde_json::from_value(value).expect("string themes always parse");
        match base.theme.expect("theme present") {
            OpenEnum::Known(_) => prop_assert!(
                ["white", "g10", "g90", "g100"].contains(&theme.as_str())
            ),
            OpenEnum::Custom(custom) => prop_assert_eq!(custom, theme),
        }
    }

    #[test]
    fn any_group_selection_is_valid_and_preserved(
        groups in proptest::collection::vec(".*", 0..8)
    ) {
        let value = serde_json::json!({ "data": { "selectedGroups": groups.clone() } });
        let config = validate_for_kind(ChartKind::Pie, &value).expect("selection always valid");
        prop_assert_eq!(config.base().selected_groups(), groups.as_slice());
    }

    #[test]
    fn nonstring_gauge_types_are_always_rejected(kind_number in proptest::num::i64::ANY) {
        let value = serde_json::json!({ "gauge": { "type": kind_number } });
        prop_assert!(validate_for_kind(ChartKind::Gauge, &value).is_err());
    }

    #[test]
    fn sparse_bar_configs_revalidate_after_serialization(
        title in ".*",
        max_width in 0.5f64..512.0,
        animations in proptest::bool::ANY
    ) {
        let value = serde_json::json!({
            "title": title.clone(),
            "animationsEnabled": animations,
            "bars": { "maxWidth": max_width }
        });
        let config = validate_for_kind(ChartKind::Bar, &value).expect("bar config valid");
        let serialized = serde_json::to_value(&config).expect("serialize");
        let reparsed = validate_for_kind(ChartKind::Bar, &serialized).expect("revalidate");
        prop_assert_eq!(reparsed.base().title.as_deref(), Some(title.as_str()));
        prop_assert_eq!(reparsed.base().animations(), animations);
    }
}
