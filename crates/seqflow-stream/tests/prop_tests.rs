use proptest::prelude::*;

use seqflow_stream::prelude::*;
use seqflow_stream::sort::stable_sort_by;

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{1,4}", 0..24)
}

proptest! {
    // 1. Everything that survives a filter satisfies its predicate.
    #[test]
    fn filtered_elements_all_match(words in arb_words(), prefix in "[a-d]") {
        let seq = Sequence::new(words);
        let keep = move |s: &String| s.starts_with(prefix.as_str());
        let filtered = seq.pipeline().filter(keep.clone());
        prop_assert!(filtered.all_match(keep).unwrap());
    }

    // 2. Sorting is idempotent.
    #[test]
    fn sorted_is_idempotent(words in arb_words()) {
        let seq = Sequence::new(words);
        let once = seq.pipeline().sorted().collect().unwrap();
        let twice = seq.pipeline().sorted().sorted().collect().unwrap();
        prop_assert_eq!(once, twice);
    }

    // 3. A predicate and its negation partition the sequence.
    #[test]
    fn filter_and_negation_partition_count(numbers in prop::collection::vec(any::<i32>(), 0..64), m in 1i32..7) {
        let seq = Sequence::new(numbers);
        let base = seq.pipeline();
        let hits = base.clone().filter(move |n| n % m == 0).count().unwrap();
        let misses = base.clone().filter(move |n| n % m != 0).count().unwrap();
        prop_assert_eq!(hits + misses, base.count().unwrap());
    }

    // 4. Seedless reduce: absent on empty, identity on a singleton.
    #[test]
    fn reduce_empty_and_singleton(value in any::<i64>()) {
        let empty: Sequence<i64> = Sequence::default();
        prop_assert!(empty.pipeline().reduce(|a, b| a.wrapping_add(b)).unwrap().is_absent());

        let single = Sequence::new(vec![value]);
        let reduced = single.pipeline().reduce(|a, b| a.wrapping_mul(b)).unwrap();
        prop_assert_eq!(reduced.into_value().unwrap(), value);
    }

    // 5. The pipeline sort agrees with std's stable sort.
    #[test]
    fn sort_matches_std_stable_sort(pairs in prop::collection::vec((0u8..4, any::<u16>()), 0..64)) {
        let mut expected = pairs.clone();
        expected.sort_by_key(|p| p.0);

        let seq = Sequence::new(pairs);
        let sorted = seq
            .pipeline()
            .sorted_by(comparing(|p: &(u8, u16)| p.0))
            .collect()
            .unwrap();
        prop_assert_eq!(sorted, expected);
    }

    // 6. Any comparator, consistent or not, yields a permutation of the input.
    #[test]
    fn arbitrary_comparator_yields_permutation(
        numbers in prop::collection::vec(any::<i16>(), 0..64),
        answers in prop::collection::vec(0u8..3, 1..16),
    ) {
        let mut items = numbers.clone();
        let mut i = 0usize;
        stable_sort_by(&mut items, |_, _| {
            i += 1;
            match answers[i % answers.len()] {
                0 => std::cmp::Ordering::Less,
                1 => std::cmp::Ordering::Equal,
                _ => std::cmp::Ordering::Greater,
            }
        });
        let mut got = items;
        let mut want = numbers;
        got.sort();
        want.sort();
        prop_assert_eq!(got, want);
    }

    // 7. Re-running a terminal operation gives the same answer.
    #[test]
    fn terminal_operations_rerun_consistently(words in arb_words()) {
        let seq = Sequence::new(words);
        let pipeline = seq.pipeline().map(|s| s.to_uppercase()).sorted();
        prop_assert_eq!(pipeline.collect().unwrap(), pipeline.collect().unwrap());
        prop_assert_eq!(pipeline.count().unwrap(), seq.len());
    }

    // 8. Map preserves count and order.
    #[test]
    fn map_preserves_count_and_order(numbers in prop::collection::vec(any::<i32>(), 0..64)) {
        let seq = Sequence::new(numbers.clone());
        let mapped = seq.pipeline().map(|n| i64::from(n) * 2).collect().unwrap();
        let expected: Vec<i64> = numbers.iter().map(|n| i64::from(*n) * 2).collect();
        prop_assert_eq!(mapped, expected);
    }
}
