use seqflow_core::optional::OptionalValue;
use seqflow_stream::prelude::*;

fn string_collection() -> Sequence<String> {
    ["ddd2", "aaa2", "bbb1", "aaa1", "bbb3", "ccc", "bbb2", "ddd1"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn starts_with_a(s: &String) -> bool {
    s.starts_with('a')
}

#[test]
fn filter_keeps_source_order() {
    let result = string_collection()
        .pipeline()
        .filter(starts_with_a)
        .collect()
        .unwrap();
    assert_eq!(result, vec!["aaa2", "aaa1"]);
}

#[test]
fn sorted_then_filter() {
    let collection = string_collection();
    let result = collection
        .pipeline()
        .sorted()
        .filter(starts_with_a)
        .collect()
        .unwrap();
    assert_eq!(result, vec!["aaa1", "aaa2"]);

    // Sorting a pipeline never reorders the source.
    assert_eq!(
        collection.as_slice(),
        &["ddd2", "aaa2", "bbb1", "aaa1", "bbb3", "ccc", "bbb2", "ddd1"]
    );
}

#[test]
fn map_to_upper_then_sort_descending() {
    let result = string_collection()
        .pipeline()
        .map(|s| s.to_uppercase())
        .sorted_by(|a: &String, b: &String| b.cmp(a))
        .collect()
        .unwrap();
    assert_eq!(
        result,
        vec!["DDD2", "DDD1", "CCC", "BBB3", "BBB2", "BBB1", "AAA2", "AAA1"]
    );
}

#[test]
fn map_then_reverse_order_matches_explicit_comparator() {
    let explicit = string_collection()
        .pipeline()
        .map(|s| s.to_uppercase())
        .sorted_by(|a: &String, b: &String| b.cmp(a))
        .collect()
        .unwrap();
    let reversed = string_collection()
        .pipeline()
        .map(|s| s.to_uppercase())
        .sorted_by(reverse_order::<String>())
        .collect()
        .unwrap();
    assert_eq!(explicit, reversed);
}

#[test]
fn match_operations() {
    let pipeline = string_collection().pipeline();
    assert!(pipeline.any_match(|s| s.starts_with('a')).unwrap());
    assert!(!pipeline.all_match(|s| s.starts_with('a')).unwrap());
    assert!(pipeline.none_match(|s| s.starts_with('z')).unwrap());
}

#[test]
fn count_after_filter() {
    let count = string_collection()
        .pipeline()
        .filter(|s| s.starts_with('b'))
        .count()
        .unwrap();
    assert_eq!(count, 3);
}

#[test]
fn sorted_reduce_joins_with_hash() {
    let reduced = string_collection()
        .pipeline()
        .sorted()
        .reduce(|a, b| format!("{a}#{b}"))
        .unwrap();
    assert_eq!(
        reduced,
        OptionalValue::of("aaa1#aaa2#bbb1#bbb2#bbb3#ccc#ddd1#ddd2".to_string())
    );

    let mut printed = Vec::new();
    reduced.if_present(|s| printed.push(s.clone()));
    assert_eq!(printed.len(), 1);
}

#[test]
fn reduce_on_filtered_out_pipeline_is_absent() {
    let reduced = string_collection()
        .pipeline()
        .filter(|s| s.starts_with('z'))
        .reduce(|a, b| format!("{a}#{b}"))
        .unwrap();
    assert!(reduced.is_absent());
    assert_eq!(reduced.or_else("fallback".into()), "fallback");
}

#[test]
fn names_sorted_descending() {
    let names = Sequence::new(vec!["peter", "anna", "mike", "xenia"]);
    let sorted = names
        .pipeline()
        .sorted_by(|a: &&str, b: &&str| b.cmp(a))
        .collect()
        .unwrap();
    assert_eq!(sorted, vec!["xenia", "peter", "mike", "anna"]);
}
