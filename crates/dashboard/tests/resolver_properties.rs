use opsboard_dashboard::ChartDescriptor;
use opsboard_dashboard::Row;
use opsboard_dashboard::chart::ChartDirective;
use opsboard_dashboard::chart::MAX_VISIBLE_TICKS;
use opsboard_dashboard::chart::compute_tick_stride;
use opsboard_dashboard::chart::format_label;
use opsboard_dashboard::chart::resolve;
use opsboard_dashboard::chart::resolve_chart_type;
use proptest::prelude::*;
use proptest::test_runner::Config;
use serde_json::Value;

fn any_field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 _-]{0,12}".prop_map(Value::from),
        "20[0-9]{2}-[01][0-9]-[0-3][0-9]".prop_map(Value::from),
    ]
}

fn any_row() -> impl Strategy<Value = Row> {
    prop::collection::vec(("[a-z]{1,6}", any_field_value()), 0..5)
        .prop_map(|fields| fields.into_iter().collect())
}

fn any_declared_type() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just(String::from("bar_chart")),
        Just(String::from("LINE")),
        Just(String::from("Donut")),
        "[a-zA-Z_]{0,12}",
    ])
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn resolution_is_deterministic(
        declared_type in any_declared_type(),
        rows in prop::collection::vec(any_row(), 0..60),
    ) {
        let descriptor = ChartDescriptor::new(declared_type.as_deref(), rows);

        prop_assert_eq!(resolve(&descriptor), resolve(&descriptor));
    }

    #[test]
    fn empty_rows_have_no_data(declared_type in any_declared_type()) {
        let descriptor = ChartDescriptor::new(declared_type.as_deref(), Vec::new());
        let kind = resolve_chart_type(declared_type.as_deref());

        prop_assert_eq!(resolve(&descriptor), ChartDirective::NoData { kind });
    }

    #[test]
    fn kind_ignores_rows(
        declared_type in any_declared_type(),
        rows in prop::collection::vec(any_row(), 0..10),
    ) {
        let descriptor = ChartDescriptor::new(declared_type.as_deref(), rows);

        prop_assert_eq!(resolve(&descriptor).kind(), resolve_chart_type(declared_type.as_deref()));
    }

    #[test]
    fn resolved_fields_are_distinct(
        declared_type in any_declared_type(),
        rows in prop::collection::vec(any_row(), 1..10),
    ) {
        let descriptor = ChartDescriptor::new(declared_type.as_deref(), rows);

        if let ChartDirective::Resolved(spec) = resolve(&descriptor) {
            prop_assert_ne!(&spec.category_field, &spec.value_field);
            prop_assert!(descriptor.rows[0].contains_key(&spec.category_field));
            prop_assert!(descriptor.rows[0].contains_key(&spec.value_field));
        }
    }

    #[test]
    fn tick_stride_bounds_visible_labels(row_count in 0_usize..100_000) {
        let stride = compute_tick_stride(row_count);

        if stride == 0 {
            prop_assert!(row_count <= 40);
        } else {
            prop_assert!(row_count.div_ceil(stride) <= MAX_VISIBLE_TICKS);
        }
    }

    #[test]
    fn labels_never_exceed_seven_characters(text in "\\PC{0,40}") {
        let label = format_label(Some(&Value::from(text)), false);

        prop_assert!(label.chars().count() <= 7);
    }
}
