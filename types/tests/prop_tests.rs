use proptest::prelude::*;

use ogmios_types::{Amount, Point, Value};

proptest! {
    /// Any base-10 literal parses and prints back to the same digits.
    #[test]
    fn amount_literal_roundtrip(literal in "-?[1-9][0-9]{0,60}") {
        let amount: Amount = literal.parse().unwrap();
        prop_assert_eq!(amount.to_string(), literal);
    }

    /// A quantity decoded from a JSON string re-encodes to the same digits as a JSON number.
    #[test]
    fn amount_string_reencodes_as_number(digits in "[1-9][0-9]{0,60}") {
        let amount: Amount = serde_json::from_str(&format!("\"{digits}\"")).unwrap();
        prop_assert_eq!(serde_json::to_string(&amount).unwrap(), digits);
    }

    /// A quantity decoded from a JSON number decodes equal to the string form.
    #[test]
    fn amount_number_and_string_agree(digits in "[1-9][0-9]{0,60}") {
        let from_number: Amount = serde_json::from_str(&digits).unwrap();
        let from_string: Amount = serde_json::from_str(&format!("\"{digits}\"")).unwrap();
        prop_assert_eq!(from_number, from_string);
    }

    /// Amounts beyond 2^63 keep every digit.
    #[test]
    fn amount_beyond_i64(high in any::<u64>(), low in any::<u64>()) {
        let wide = ((high as u128) << 64) | low as u128;
        let amount = Amount::from(wide);
        let back: Amount = serde_json::from_str(&serde_json::to_string(&amount).unwrap()).unwrap();
        prop_assert_eq!(back.to_string(), wide.to_string());
    }

    /// A specific point decodes identically from either schema's spelling.
    #[test]
    fn point_spellings_agree(slot in any::<u64>(), hash in "[0-9a-f]{64}") {
        let legacy = Point::from_json(&serde_json::json!({ "slot": slot, "hash": hash.clone() })).unwrap();
        let current = Point::from_json(&serde_json::json!({ "slot": slot, "id": hash.clone() })).unwrap();
        prop_assert_eq!(&legacy, &current);
        prop_assert_eq!(legacy, Point::specific(slot, hash));
    }

    /// Value::get returns exactly what was inserted, zero elsewhere.
    #[test]
    fn value_get_after_insert(policy in "[0-9a-f]{8}", asset in "[a-z]{1,8}", qty in any::<u64>()) {
        let mut value = Value::new();
        value.insert(policy.clone(), asset.clone(), Amount::from(qty));
        prop_assert_eq!(value.get(&policy, &asset), Amount::from(qty));
        prop_assert!(value.get(&policy, "MISSING").is_zero());
        prop_assert!(value.coins().is_zero());
    }
}
