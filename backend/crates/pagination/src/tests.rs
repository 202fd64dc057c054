//! Regression coverage for filter normalisation.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn defaults() -> QuerySpec {
    QuerySpec::default()
}

fn filter_with_direction(direction: &str) -> RawFilter {
    RawFilter {
        sort_direction: Some(direction.to_owned()),
        ..RawFilter::default()
    }
}

#[rstest]
fn absent_filter_yields_defaults(defaults: QuerySpec) {
    let spec = normalize(None);
    assert_eq!(spec, defaults);
    assert_eq!(spec.page(), 0);
    assert_eq!(spec.page_size(), 20);
    assert_eq!(spec.sort_field(), DEFAULT_SORT_FIELD);
    assert_eq!(spec.sort_direction(), SortDirection::Asc);
}

#[rstest]
fn empty_filter_yields_defaults(defaults: QuerySpec) {
    assert_eq!(normalize(Some(&RawFilter::default())), defaults);
}

#[rstest]
fn out_of_range_values_fall_back_to_defaults(defaults: QuerySpec) {
    let filter = RawFilter {
        page: Some(-1),
        page_size: Some(0),
        sort_field: None,
        sort_direction: Some("sideways".to_owned()),
    };
    assert_eq!(normalize(Some(&filter)), defaults);
}

#[rstest]
fn valid_values_are_kept() {
    let filter = RawFilter {
        page: Some(3),
        page_size: Some(50),
        sort_field: Some("  title ".to_owned()),
        sort_direction: Some("DESC".to_owned()),
    };
    let spec = normalize(Some(&filter));

    assert_eq!(spec.page(), 3);
    assert_eq!(spec.page_size(), 50);
    assert_eq!(spec.sort_field(), "title");
    assert_eq!(spec.sort_direction(), SortDirection::Desc);
}

#[rstest]
#[case::negative(-5)]
#[case::beyond_u32(i64::from(u32::MAX) + 1)]
fn unrepresentable_pages_default_to_zero(#[case] page: i64) {
    let filter = RawFilter {
        page: Some(page),
        ..RawFilter::default()
    };
    assert_eq!(normalize(Some(&filter)).page(), 0);
}

#[rstest]
#[case::zero(0)]
#[case::negative(-20)]
fn non_positive_page_sizes_default(#[case] page_size: i64) {
    let filter = RawFilter {
        page_size: Some(page_size),
        ..RawFilter::default()
    };
    assert_eq!(normalize(Some(&filter)).page_size(), DEFAULT_PAGE_SIZE.get());
}

#[rstest]
#[case::empty("")]
#[case::spaces("   ")]
#[case::tabs("\t\n")]
fn blank_sort_fields_default(#[case] sort_field: &str) {
    let filter = RawFilter {
        sort_field: Some(sort_field.to_owned()),
        ..RawFilter::default()
    };
    assert_eq!(normalize(Some(&filter)).sort_field(), "dueDate");
}

#[rstest]
#[case::lower_desc("desc", SortDirection::Desc)]
#[case::mixed_desc(" DeSc ", SortDirection::Desc)]
#[case::lower_asc("asc", SortDirection::Asc)]
#[case::unknown("sideways", SortDirection::Asc)]
#[case::blank("  ", SortDirection::Asc)]
fn sort_direction_is_case_insensitive(#[case] raw: &str, #[case] expected: SortDirection) {
    let spec = normalize(Some(&filter_with_direction(raw)));
    assert_eq!(spec.sort_direction(), expected);
}

#[rstest]
#[case::absent(None)]
#[case::populated(Some(RawFilter {
    page: Some(2),
    page_size: Some(-1),
    sort_field: Some("createdAt".to_owned()),
    sort_direction: Some("desc".to_owned()),
}))]
fn normalisation_is_idempotent(#[case] filter: Option<RawFilter>) {
    let first = normalize(filter.as_ref());
    let second = normalize(filter.as_ref());
    assert_eq!(first, second);
}

#[rstest]
fn offset_and_limit_follow_page_geometry() {
    let filter = RawFilter {
        page: Some(i64::from(u32::MAX)),
        page_size: Some(i64::from(u32::MAX)),
        ..RawFilter::default()
    };
    let spec = normalize(Some(&filter));

    assert_eq!(spec.limit(), u64::from(u32::MAX));
    assert_eq!(spec.offset(), u64::from(u32::MAX) * u64::from(u32::MAX));
}

#[rstest]
fn raw_filter_deserialises_from_camel_case() {
    let filter: RawFilter = serde_json::from_str(r#"{"pageSize": 5, "sortDirection": "desc"}"#)
        .expect("filter JSON should decode");
    let spec = normalize(Some(&filter));

    assert_eq!(spec.page_size(), 5);
    assert_eq!(spec.sort_direction(), SortDirection::Desc);
}

#[rstest]
fn query_spec_serialises_with_upper_case_direction() {
    let value = serde_json::to_value(normalize(None)).expect("spec should serialise");
    assert_eq!(
        value,
        serde_json::json!({
            "page": 0,
            "pageSize": 20,
            "sortField": "dueDate",
            "sortDirection": "ASC",
        })
    );
}

#[rstest]
fn parse_error_reports_rejected_value() {
    let error = "up".parse::<SortDirection>().expect_err("unknown direction");
    assert_eq!(error.value, "up");
    assert_eq!(error.to_string(), "unrecognised sort direction: \"up\"");
}
