//! Property-based tests for the accessor contract.
//!
//! Test coverage:
//! - Unset keys always return the default.
//! - Valid encodings always win over the default.
//! - Empty values fall back for every non-string type.
//! - Unsigned widths accept exactly their range.

use proptest::prelude::*;
use std::time::Duration;

use typed_env::{Env, MapEnv};

fn env_with(key: &str, value: impl Into<String>) -> Env<MapEnv> {
    Env::new(MapEnv::new().with(key, value.into()))
}

/// Strategy for variable names in the style of real configuration keys.
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,24}".prop_map(String::from)
}

/// Strategy for compound duration strings plus their expected value.
fn duration_strategy() -> impl Strategy<Value = (String, Duration)> {
    (0u64..48, 0u64..60, 0u64..60, 0u64..1000).prop_map(|(h, m, s, ms)| {
        let text = format!("{h}h{m}m{s}s{ms}ms");
        let expected = Duration::from_secs(h * 3600 + m * 60 + s) + Duration::from_millis(ms);
        (text, expected)
    })
}

proptest! {
    #[test]
    fn prop_unset_returns_default(key in key_strategy(), d_u64 in any::<u64>(), d_i64 in any::<i64>(), d_bool in any::<bool>()) {
        let env = Env::new(MapEnv::new());
        prop_assert_eq!(env.u64(&key, d_u64), d_u64);
        prop_assert_eq!(env.i64(&key, d_i64), d_i64);
        prop_assert_eq!(env.bool(&key, d_bool), d_bool);
        prop_assert_eq!(env.string(&key, "fallback"), "fallback");
    }

    #[test]
    fn prop_valid_values_ignore_default(key in key_strategy(), v in any::<i64>(), d in any::<i64>()) {
        prop_assert_eq!(env_with(&key, v.to_string()).i64(&key, d), v);
    }

    #[test]
    fn prop_valid_u32_ignores_default(key in key_strategy(), v in any::<u32>(), d in any::<u32>()) {
        prop_assert_eq!(env_with(&key, v.to_string()).u32(&key, d), v);
    }

    #[test]
    fn prop_finite_floats_parse(key in key_strategy(), v in proptest::num::f64::NORMAL, d in any::<f64>()) {
        prop_assert_eq!(env_with(&key, v.to_string()).f64(&key, d), v);
    }

    #[test]
    fn prop_strings_are_returned_verbatim(key in key_strategy(), v in "[ -~]{0,32}") {
        prop_assert_eq!(env_with(&key, v.clone()).string(&key, "default"), v);
    }

    #[test]
    fn prop_empty_falls_back(key in key_strategy(), d in any::<u16>(), secs in any::<u32>()) {
        let env = env_with(&key, "");
        let default = Duration::from_secs(u64::from(secs));
        prop_assert_eq!(env.u16(&key, d), d);
        prop_assert_eq!(env.duration(&key, default), default);
        prop_assert!(env.bool(&key, true));
        prop_assert!(!env.bool(&key, false));
    }

    #[test]
    fn prop_u8_accepts_exactly_its_range(key in key_strategy(), v in 0u32..1024, d in any::<u8>()) {
        let got = env_with(&key, v.to_string()).u8(&key, d);
        match u8::try_from(v) {
            Ok(expected) => prop_assert_eq!(got, expected),
            Err(_) => prop_assert_eq!(got, d),
        }
    }

    #[test]
    fn prop_compound_durations((text, expected) in duration_strategy()) {
        let env = env_with("TIMEOUT", text);
        prop_assert_eq!(env.duration("TIMEOUT", Duration::MAX), expected);
    }

    #[test]
    fn prop_garbage_never_panics(key in key_strategy(), raw in "\\PC{0,16}") {
        let env = env_with(&key, raw);
        let _ = env.u64(&key, 0);
        let _ = env.f64(&key, 0.0);
        let _ = env.duration(&key, Duration::ZERO);
        let _ = env.bool(&key, false);
    }
}

#[test]
fn test_unsigned_boundaries() {
    let cases: [(&str, &str, &str); 4] = [
        ("255", "256", "u8"),
        ("65535", "65536", "u16"),
        ("4294967295", "4294967296", "u32"),
        ("18446744073709551615", "18446744073709551616", "u64"),
    ];

    for (max, past_max, width) in cases {
        let at_max = env_with("N", max);
        let over = env_with("N", past_max);
        match width {
            "u8" => {
                assert_eq!(at_max.u8("N", 1), u8::MAX);
                assert_eq!(over.u8("N", 1), 1);
            }
            "u16" => {
                assert_eq!(at_max.u16("N", 1), u16::MAX);
                assert_eq!(over.u16("N", 1), 1);
            }
            "u32" => {
                assert_eq!(at_max.u32("N", 1), u32::MAX);
                assert_eq!(over.u32("N", 1), 1);
            }
            _ => {
                assert_eq!(at_max.u64("N", 1), u64::MAX);
                assert_eq!(over.u64("N", 1), 1);
            }
        }
    }
}
