//! 可选目标套件：定义良好的转换产出值，未定义的转换产出缺席，绝不截断。

use crate::case::{TckCase, TckSuite};
use crate::executor::{round_trip, round_trip_value};
use crate::fixtures::{DocRecord, WITNESS_MILLIS};
use futures::executor::block_on;
use prism_codec_bin::BinCodec;
use prism_core::{EncodeOptions, Record, ScalarKind, Shape, Value};

const CASES: &[TckCase] = &[
    TckCase {
        name: "optional_wrapper_round_trips_for_every_scalar_kind",
        test: optional_wrapper_round_trips_for_every_scalar_kind,
    },
    TckCase {
        name: "char_field_into_optional_int_resolves_absent",
        test: char_field_into_optional_int_resolves_absent,
    },
    TckCase {
        name: "narrowing_into_optional_resolves_absent",
        test: narrowing_into_optional_resolves_absent,
    },
    TckCase {
        name: "widening_into_optional_resolves_coerced_value",
        test: widening_into_optional_resolves_coerced_value,
    },
    TckCase {
        name: "absent_source_round_trips_absent",
        test: absent_source_round_trips_absent,
    },
];

const SUITE: TckSuite = TckSuite {
    name: "optionals",
    cases: CASES,
};

/// 返回“可选目标”主题的测试套件。
pub const fn suite() -> &'static TckSuite {
    &SUITE
}

/// 每种标量类别的可选包装做同类别往返：载荷保持不变。
fn optional_wrapper_round_trips_for_every_scalar_kind() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();
    let samples = [
        (Value::Bool(true), ScalarKind::Bool),
        (Value::I8(-8), ScalarKind::I8),
        (Value::I16(-16), ScalarKind::I16),
        (Value::I32(-32), ScalarKind::I32),
        (Value::I64(-64), ScalarKind::I64),
        (Value::U8(8), ScalarKind::U8),
        (Value::U16(16), ScalarKind::U16),
        (Value::U32(32), ScalarKind::U32),
        (Value::U64(64), ScalarKind::U64),
        (Value::F32(0.5), ScalarKind::F32),
        (Value::F64(-0.25), ScalarKind::F64),
        (Value::Char('光'), ScalarKind::Char),
        (Value::Str("棱".to_string()), ScalarKind::Str),
    ];
    for (payload, kind) in samples {
        let source = Value::some(payload.clone());
        let target = Shape::optional(Shape::Scalar(kind));
        let (shaped, erased) = block_on(round_trip_value(&codec, &source, &target, &options))
            .expect("可选往返不应失败");
        assert_eq!(shaped, Value::some(payload.clone()), "{kind:?}");
        assert_eq!(erased, payload, "线上格式应坍缩可选包装");
    }
}

/// 记录字段为字符 `'A'`、目标字段为 `Option<i32>`：不存在定义良好的字符到整数转换，
/// 结果必须是缺席而非截断或重释。
fn char_field_into_optional_int_resolves_absent() {
    let codec = BinCodec::new();
    let source = Value::Record(
        Record::new()
            .with_field("root_value", Value::I64(WITNESS_MILLIS))
            .with_field("value", Value::Char('A')),
    );
    let (typed, erased) = block_on(round_trip::<DocRecord<Option<i32>>, _>(
        &codec,
        &source,
        &EncodeOptions::new(),
    ))
    .expect("字符到可选整数");
    assert_eq!(typed.root_value, WITNESS_MILLIS);
    assert_eq!(typed.value, None);
    match erased {
        Value::Record(record) => {
            assert_eq!(record.get("value"), Some(&Value::Char('A')));
        }
        other => panic!("期望记录，得到 {other:?}"),
    }
}

/// 收窄类转换一律未定义：64 位源落入 32 位可选目标缺席，跨符号与浮点收窄同理。
fn narrowing_into_optional_resolves_absent() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();
    let cases = [
        (Value::I64(9), Shape::optional(Shape::Scalar(ScalarKind::I32))),
        (Value::U64(9), Shape::optional(Shape::Scalar(ScalarKind::U32))),
        (Value::I8(-1), Shape::optional(Shape::Scalar(ScalarKind::U8))),
        (Value::F64(0.5), Shape::optional(Shape::Scalar(ScalarKind::F32))),
        (Value::Bool(true), Shape::optional(Shape::Scalar(ScalarKind::U8))),
    ];
    for (source, target) in cases {
        let (shaped, _) = block_on(round_trip_value(&codec, &source, &target, &options))
            .expect("收窄往返不应失败");
        assert_eq!(shaped, Value::absent(), "{source:?} 应缺席");
    }
}

/// 加宽类转换定义良好：结果是被转换的值而非缺席。
fn widening_into_optional_resolves_coerced_value() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();
    let cases = [
        (
            Value::U8(9),
            Shape::optional(Shape::Scalar(ScalarKind::U16)),
            Value::some(Value::U16(9)),
        ),
        (
            Value::I16(-300),
            Shape::optional(Shape::Scalar(ScalarKind::F32)),
            Value::some(Value::F32(-300.0)),
        ),
        (
            Value::U32(7),
            Shape::optional(Shape::Scalar(ScalarKind::I64)),
            Value::some(Value::I64(7)),
        ),
        (
            Value::F32(1.5),
            Shape::optional(Shape::Scalar(ScalarKind::F64)),
            Value::some(Value::F64(1.5)),
        ),
    ];
    for (source, target, expected) in cases {
        let (shaped, _) = block_on(round_trip_value(&codec, &source, &target, &options))
            .expect("加宽往返不应失败");
        assert_eq!(shaped, expected);
    }
}

/// 缺席的可选源：具型结果缺席，擦除结果为空。
fn absent_source_round_trips_absent() {
    let codec = BinCodec::new();
    let (typed, erased) = block_on(round_trip::<Option<u32>, _>(
        &codec,
        &Value::absent(),
        &EncodeOptions::new(),
    ))
    .expect("缺席往返");
    assert_eq!(typed, None);
    assert_eq!(erased, Value::Null);
}
