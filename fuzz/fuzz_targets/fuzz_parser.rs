#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use leptjson::{ParserOptions, Value as LeptValue, ValueKind, parse_with_options};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // flags

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r"];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8);

        let limit = max_size - HEADER;
        let mut written = HEADER;
        written += append_whitespace(&mut data[written..], limit);
        written += append_value(&mut data[written..], size, max_size - written);
        written += append_whitespace(&mut data[written..], max_size - written);
        written
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 1‒N whitespace bytes (N chosen randomly) to `buf`, but never exceed
/// `limit`. Returns the number of bytes written.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n = rng.random_range(1..=limit.min(8));
        for b in &mut buf[..n] {
            *b = WS_TABLE[rng.random_range(0..WS_TABLE.len())][0];
        }
        n
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }

    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..=size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(false) => ValueKind::False,
        Value::Bool(true) => ValueKind::True,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

fn parser(data: &[u8]) {
    let Some((&flags, json)) = data.split_first() else {
        return;
    };

    // A shallow limit exercises the depth guard; serde_json allows 128 levels.
    let options = if flags & 1 != 0 {
        ParserOptions { max_depth: usize::from(flags >> 1) }
    } else {
        ParserOptions::default()
    };

    let mut value = LeptValue::Boolean(true);
    let result = parse_with_options(&mut value, json, options);
    if result.is_err() {
        assert!(value.is_null(), "failed parse left {value:?}");
    }

    // Everything serde_json accepts is strict JSON without NUL bytes, so it
    // must parse here too unless the depth limit was lowered.
    if flags & 1 == 0 {
        if let Ok(expected) = serde_json::from_slice::<Value>(json) {
            assert_eq!(result, Ok(()), "rejected input serde_json accepts");
            assert_eq!(value.kind(), kind_of(&expected));
        }
    }
}

fuzz_target!(|data: &[u8]| parser(data));
