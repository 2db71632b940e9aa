//! Property-based tests for pack/unpack

use proptest::prelude::*;
use pystruct::{Struct, Value, calcsize, pack, unpack};

// One item: its format token and a value that fits it exactly
fn item_strategy() -> impl Strategy<Value = (String, Value)> {
    prop_oneof![
        any::<u8>().prop_map(|v| ("c".to_string(), Value::Char(v))),
        any::<i8>().prop_map(|v| ("b".to_string(), Value::I8(v))),
        any::<u8>().prop_map(|v| ("B".to_string(), Value::U8(v))),
        any::<i16>().prop_map(|v| ("h".to_string(), Value::I16(v))),
        any::<u16>().prop_map(|v| ("H".to_string(), Value::U16(v))),
        any::<i32>().prop_map(|v| ("i".to_string(), Value::I32(v))),
        any::<u32>().prop_map(|v| ("L".to_string(), Value::U32(v))),
        any::<i64>().prop_map(|v| ("q".to_string(), Value::I64(v))),
        any::<u64>().prop_map(|v| ("Q".to_string(), Value::U64(v))),
        any::<u32>().prop_map(|v| ("f".to_string(), Value::F32(f32::from_bits(v)))),
        any::<u64>().prop_map(|v| ("d".to_string(), Value::F64(f64::from_bits(v)))),
        prop::collection::vec(any::<u8>(), 0..9)
            .prop_map(|v| (format!("{}s", v.len()), Value::Bytes(v))),
    ]
}

fn record_strategy() -> impl Strategy<Value = (String, Vec<Value>)> {
    let mode = prop::sample::select(vec!["", "@", "=", "<", ">", "!"]);
    (mode, prop::collection::vec(item_strategy(), 0..10)).prop_map(|(mode, items)| {
        let mut format = mode.to_string();
        let mut values = Vec::with_capacity(items.len());
        for (token, value) in items {
            format.push_str(&token);
            values.push(value);
        }
        (format, values)
    })
}

proptest! {
    // -------------------------------------------------------------
    // 1. unpack(pack(v)) == v for values that fit their items.
    // -------------------------------------------------------------
    #[test]
    fn prop_roundtrip((format, values) in record_strategy()) {
        let bytes = pack(&format, &values).unwrap();
        prop_assert_eq!(unpack(&format, &bytes).unwrap(), values);
    }

    // -------------------------------------------------------------
    // 2. A packed record is exactly calcsize bytes long.
    // -------------------------------------------------------------
    #[test]
    fn prop_size_law((format, values) in record_strategy()) {
        let bytes = pack(&format, &values).unwrap();
        prop_assert_eq!(bytes.len(), calcsize(&format).unwrap());
    }

    // -------------------------------------------------------------
    // 3. Big-endian output is little-endian with every field reversed.
    // -------------------------------------------------------------
    #[test]
    fn prop_endianness_symmetry((format, values) in record_strategy()) {
        let body = format.trim_start_matches(['@', '=', '<', '>', '!']);
        let little = Struct::new(&format!("<{body}")).unwrap();
        let big = Struct::new(&format!(">{body}")).unwrap();

        let mut swapped = little.pack(&values).unwrap();
        for field in little.layout().fields() {
            if !field.code.is_string() {
                swapped[field.offset..field.offset + field.width].reverse();
            }
        }
        prop_assert_eq!(swapped, big.pack(&values).unwrap());
    }

    // -------------------------------------------------------------
    // 4. Padding bytes written by pack are zero.
    // -------------------------------------------------------------
    #[test]
    fn prop_padding_is_zero((format, values) in record_strategy()) {
        let record = Struct::new(&format).unwrap();
        let bytes = record.pack(&values).unwrap();
        let mut covered = vec![false; bytes.len()];
        for field in record.layout().fields() {
            covered[field.offset..field.offset + field.width].fill(true);
        }
        for (byte, covered) in bytes.iter().zip(covered) {
            if !covered {
                prop_assert_eq!(*byte, 0);
            }
        }
    }

    // -------------------------------------------------------------
    // 5. Wrong arity is rejected whatever the values are.
    // -------------------------------------------------------------
    #[test]
    fn prop_arity_checked((format, mut values) in record_strategy(), extra in any::<i32>()) {
        values.push(Value::I32(extra));
        prop_assert!(pack(&format, &values).is_err());
    }
}
