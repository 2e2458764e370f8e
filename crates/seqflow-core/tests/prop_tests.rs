use proptest::prelude::*;

use seqflow_core::error::{SeqflowError, ValueError};
use seqflow_core::optional::OptionalValue;

fn arb_optional() -> impl Strategy<Value = OptionalValue<i64>> {
    prop_oneof![
        Just(OptionalValue::absent()),
        any::<i64>().prop_map(OptionalValue::of),
    ]
}

proptest! {
    // 1. Exactly one of present / absent holds.
    #[test]
    fn present_xor_absent(opt in arb_optional()) {
        prop_assert!(opt.is_present() != opt.is_absent());
    }

    // 2. or_else returns the contained value when present and the fallback otherwise.
    #[test]
    fn or_else_law(opt in arb_optional(), fallback in any::<i64>()) {
        let expected = opt.into_option().unwrap_or(fallback);
        prop_assert_eq!(opt.or_else(fallback), expected);
    }

    // 3. get fails exactly when absent, with the empty-value error.
    #[test]
    fn get_fails_only_when_absent(opt in arb_optional()) {
        match opt.get() {
            Ok(value) => prop_assert_eq!(Some(*value), opt.into_option()),
            Err(SeqflowError::Value(ValueError::Empty)) => prop_assert!(opt.is_absent()),
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }

    // 4. Option round trip is lossless.
    #[test]
    fn option_round_trip(value in proptest::option::of(any::<i64>())) {
        let opt = OptionalValue::from(value);
        prop_assert_eq!(opt.into_option(), value);
    }

    // 5. JSON round trip is lossless.
    #[test]
    fn json_round_trip(opt in arb_optional()) {
        let json = serde_json::to_string(&opt).unwrap();
        let back: OptionalValue<i64> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, opt);
    }
}
