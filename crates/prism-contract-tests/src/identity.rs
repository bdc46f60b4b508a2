//! 同一性律套件：源类型与目标类型一致时，往返不得改变值。

use crate::case::{TckCase, TckSuite};
use crate::executor::{round_trip, round_trip_value};
use futures::executor::block_on;
use prism_codec_bin::BinCodec;
use prism_core::{EncodeOptions, IntoValue, ScalarKind, Shape, Value, erased_expectation};

const CASES: &[TckCase] = &[
    TckCase {
        name: "root_scalars_round_trip_unchanged",
        test: root_scalars_round_trip_unchanged,
    },
    TckCase {
        name: "typed_destinations_match_their_sources",
        test: typed_destinations_match_their_sources,
    },
    TckCase {
        name: "char_and_single_char_string_stay_distinct",
        test: char_and_single_char_string_stay_distinct,
    },
    TckCase {
        name: "identity_round_trip_is_idempotent",
        test: identity_round_trip_is_idempotent,
    },
];

const SUITE: TckSuite = TckSuite {
    name: "identity",
    cases: CASES,
};

/// 返回“同一性”主题的测试套件。
pub const fn suite() -> &'static TckSuite {
    &SUITE
}

fn scalar_samples() -> Vec<(Value, ScalarKind)> {
    vec![
        (Value::Bool(true), ScalarKind::Bool),
        (Value::I8(-8), ScalarKind::I8),
        (Value::I16(-1600), ScalarKind::I16),
        (Value::I32(-320_000), ScalarKind::I32),
        (Value::I64(-64_000_000_000), ScalarKind::I64),
        (Value::U8(200), ScalarKind::U8),
        (Value::U16(60_000), ScalarKind::U16),
        (Value::U32(4_000_000_000), ScalarKind::U32),
        (Value::U64(u64::MAX), ScalarKind::U64),
        (Value::F32(1.5), ScalarKind::F32),
        (Value::F64(-2.25), ScalarKind::F64),
        (Value::Char('中'), ScalarKind::Char),
        (Value::Str("prism".to_string()), ScalarKind::Str),
    ]
}

/// 每种标量类别在根位置做同类别往返：具型结果与擦除结果都等于源值。
fn root_scalars_round_trip_unchanged() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();
    for (source, kind) in scalar_samples() {
        let (shaped, erased) = block_on(round_trip_value(
            &codec,
            &source,
            &Shape::Scalar(kind),
            &options,
        ))
        .expect("同类别往返不应失败");
        assert_eq!(shaped, source, "具型结果应保持不变：{kind:?}");
        assert_eq!(erased, erased_expectation(&source), "擦除结果应命中预言机");
    }
}

/// 泛型具型路径抽查：Rust 原生目标类型直接还原源值。
fn typed_destinations_match_their_sources() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();

    let (typed, erased) =
        block_on(round_trip::<i32, _>(&codec, &Value::I32(42), &options)).expect("i32 往返");
    assert_eq!(typed, 42);
    assert_eq!(erased, Value::I32(42));

    let (typed, _) = block_on(round_trip::<String, _>(
        &codec,
        &Value::Str("往返".to_string()),
        &options,
    ))
    .expect("String 往返");
    assert_eq!(typed, "往返");

    let (typed, _) =
        block_on(round_trip::<bool, _>(&codec, &Value::Bool(true), &options)).expect("bool 往返");
    assert!(typed);

    let (typed, _) = block_on(round_trip::<u64, _>(
        &codec,
        &Value::U64(u64::MAX),
        &options,
    ))
    .expect("u64 往返");
    assert_eq!(typed, u64::MAX);
}

/// 字符与单字符字符串在擦除表示下保持类别区分。
fn char_and_single_char_string_stay_distinct() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();
    let (_, erased_char) = block_on(round_trip::<char, _>(&codec, &Value::Char('A'), &options))
        .expect("char 往返");
    let (_, erased_str) = block_on(round_trip::<String, _>(
        &codec,
        &Value::Str("A".to_string()),
        &options,
    ))
    .expect("str 往返");
    assert_eq!(erased_char, Value::Char('A'));
    assert_eq!(erased_str, Value::Str("A".to_string()));
    assert_ne!(erased_char, erased_str);
}

/// 同一性用例的幂等律：把具型结果再编码、再解码，值不再变化。
fn identity_round_trip_is_idempotent() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();
    let (first, _) =
        block_on(round_trip::<i32, _>(&codec, &Value::I32(-7), &options)).expect("第一次往返");
    let (second, erased) = block_on(round_trip::<i32, _>(
        &codec,
        &first.into_value(),
        &options,
    ))
    .expect("第二次往返");
    assert_eq!(first, second);
    assert_eq!(erased, Value::I32(-7));
}
