use folio_core::{CollectionFilter, FilterError, FilterKey, FilterableRecord};
use proptest::prelude::*;

fn record(tags: &[&str], name: &'static str) -> FilterableRecord<&'static str> {
    FilterableRecord::new(tags.iter().copied(), name).unwrap()
}

fn sample() -> CollectionFilter<&'static str> {
    CollectionFilter::new(vec![
        record(&["web"], "A"),
        record(&["web", "frontend"], "B"),
        record(&["frontend"], "C"),
    ])
}

fn view(filter: &CollectionFilter<&'static str>) -> Vec<&'static str> {
    filter.current_view().map(|record| *record.payload()).collect()
}

#[test]
fn starts_with_everything_under_all() {
    let filter = sample();
    assert_eq!(filter.active_key(), &FilterKey::All);
    assert_eq!(view(&filter), vec!["A", "B", "C"]);
}

#[test]
fn tag_then_all_scenario() {
    let mut filter = sample();
    filter.set_filter(FilterKey::tag("frontend")).unwrap();
    assert_eq!(view(&filter), vec!["B", "C"]);
    assert_eq!(filter.view_len(), 2);

    filter.set_filter(FilterKey::All).unwrap();
    assert_eq!(view(&filter), vec!["A", "B", "C"]);
}

#[test]
fn unknown_key_leaves_state_untouched() {
    let mut filter = sample();
    filter.set_filter(FilterKey::tag("web")).unwrap();
    let err = filter.set_filter(FilterKey::tag("mobile")).unwrap_err();
    assert_eq!(
        err,
        FilterError::InvalidFilterKey {
            key: "mobile".to_string()
        }
    );
    assert_eq!(filter.active_key(), &FilterKey::tag("web"));
    assert_eq!(view(&filter), vec!["A", "B"]);
}

#[test]
fn tags_are_case_sensitive() {
    let mut filter = sample();
    assert!(filter.set_filter(FilterKey::tag("Web")).is_err());
}

#[test]
fn vocabulary_is_union_in_first_appearance_order() {
    let filter = sample();
    assert_eq!(filter.vocabulary(), ["web".to_string(), "frontend".to_string()]);
    let keys: Vec<String> = filter.keys().map(|key| key.to_string()).collect();
    assert_eq!(keys, vec!["all", "web", "frontend"]);
}

#[test]
fn empty_tag_set_is_rejected() {
    let err = FilterableRecord::new(Vec::<String>::new(), ()).unwrap_err();
    assert_eq!(err, FilterError::EmptyTagSet);
}

#[test]
fn reserved_and_blank_tags_are_rejected() {
    for tag in ["all", " ALL ", "", "   "] {
        let err = FilterableRecord::new(["web", tag], "A").unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidTag {
                tag: tag.trim().to_string()
            }
        );
    }
}

#[test]
fn record_tags_are_trimmed() {
    let record = record(&[" web", "web "], "X");
    assert_eq!(record.tags(), ["web".to_string()]);
}

#[test]
fn all_key_always_restores_full_collection() {
    let mut filter = CollectionFilter::new(vec![record(&["web"], "A"), record(&["mobile"], "B")]);
    filter.set_filter(FilterKey::tag("mobile")).unwrap();
    assert_eq!(view(&filter), vec!["B"]);

    filter.set_filter(FilterKey::tag("all")).unwrap();
    assert_eq!(filter.active_key(), &FilterKey::All);
    assert_eq!(view(&filter), vec!["A", "B"]);

    filter.set_filter(FilterKey::tag("mobile")).unwrap();
    filter.set_filter(FilterKey::Tag("All".to_string())).unwrap();
    assert_eq!(filter.active_key(), &FilterKey::All);
    assert_eq!(view(&filter), vec!["A", "B"]);

    let keys: Vec<String> = filter.keys().map(|key| key.to_string()).collect();
    assert_eq!(keys, vec!["all", "web", "mobile"]);
}

#[test]
fn duplicate_tags_collapse() {
    let record = record(&["web", "ai", "web"], "X");
    assert_eq!(record.tags(), ["web".to_string(), "ai".to_string()]);
    assert!(record.has_tag("ai"));
}

#[test]
fn parse_recognises_all_sentinel() {
    assert_eq!(FilterKey::parse(" ALL "), FilterKey::All);
    assert_eq!(FilterKey::parse("mobile"), FilterKey::tag("mobile"));
    assert_eq!(FilterKey::tag("All"), FilterKey::All);
    assert_eq!("ai".parse::<FilterKey>().unwrap(), FilterKey::tag("ai"));
    assert_eq!(FilterKey::All.to_string(), "all");
}

#[test]
fn empty_collection_accepts_only_all() {
    let mut filter: CollectionFilter<()> = CollectionFilter::new(Vec::new());
    assert!(filter.is_empty());
    assert!(filter.set_filter(FilterKey::All).is_ok());
    assert!(filter.set_filter(FilterKey::tag("web")).is_err());
    assert_eq!(filter.current_view().count(), 0);
}

const TAGS: [&str; 4] = ["web", "mobile", "ai", "frontend"];

fn arb_records() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(TAGS.to_vec()), 1..4),
        0..12,
    )
}

proptest! {
    #[test]
    fn view_is_exactly_matching_records_in_order(tag_sets in arb_records()) {
        let records: Vec<FilterableRecord<usize>> = tag_sets
            .iter()
            .enumerate()
            .map(|(idx, tags)| FilterableRecord::new(tags.iter().copied(), idx).unwrap())
            .collect();
        let mut filter = CollectionFilter::new(records);

        for tag in filter.vocabulary().to_vec() {
            filter.set_filter(FilterKey::Tag(tag.clone())).unwrap();
            let got: Vec<usize> = filter.current_view().map(|record| *record.payload()).collect();
            let expected: Vec<usize> = tag_sets
                .iter()
                .enumerate()
                .filter(|(_, tags)| tags.contains(&tag.as_str()))
                .map(|(idx, _)| idx)
                .collect();
            prop_assert_eq!(got, expected);
        }

        filter.set_filter(FilterKey::All).unwrap();
        let all: Vec<usize> = filter.current_view().map(|record| *record.payload()).collect();
        prop_assert_eq!(all, (0..tag_sets.len()).collect::<Vec<_>>());
    }

    #[test]
    fn unknown_keys_never_change_the_active_key(tag_sets in arb_records(), unknown in "[A-Z]{1,6}") {
        let records: Vec<FilterableRecord<usize>> = tag_sets
            .iter()
            .enumerate()
            .map(|(idx, tags)| FilterableRecord::new(tags.iter().copied(), idx).unwrap())
            .collect();
        prop_assume!(!unknown.eq_ignore_ascii_case("all"));
        let mut filter = CollectionFilter::new(records);
        let before = filter.active_key().clone();
        let before_len = filter.view_len();
        prop_assert!(filter.set_filter(FilterKey::Tag(unknown)).is_err());
        prop_assert_eq!(filter.active_key(), &before);
        prop_assert_eq!(filter.view_len(), before_len);
    }
}
