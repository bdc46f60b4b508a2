//! 空值套件：空/缺席按目标的值语义或引用/可选语义分流，绝不是错误。

use crate::case::{TckCase, TckSuite};
use crate::executor::{round_trip, round_trip_value};
use crate::fixtures::{Action, DocBlock, DocRecord, WITNESS_MILLIS};
use futures::executor::block_on;
use prism_codec_bin::BinCodec;
use prism_core::{
    EncodeOptions, Record, ScalarKind, Shape, Shaped, Value, zero_scalar, zero_value,
};

const CASES: &[TckCase] = &[
    TckCase {
        name: "root_null_into_scalars_yields_zero_values",
        test: root_null_into_scalars_yields_zero_values,
    },
    TckCase {
        name: "root_null_into_enum_yields_zero_member",
        test: root_null_into_enum_yields_zero_member,
    },
    TckCase {
        name: "root_null_into_optional_and_erased_stays_null",
        test: root_null_into_optional_and_erased_stays_null,
    },
    TckCase {
        name: "null_field_into_bare_int_field_yields_zero",
        test: null_field_into_bare_int_field_yields_zero,
    },
    TckCase {
        name: "null_into_reference_shape_stays_null",
        test: null_into_reference_shape_stays_null,
    },
    TckCase {
        name: "null_into_value_shape_yields_default_block",
        test: null_into_value_shape_yields_default_block,
    },
    TckCase {
        name: "omitted_null_fields_decode_like_null_fields",
        test: omitted_null_fields_decode_like_null_fields,
    },
];

const SUITE: TckSuite = TckSuite {
    name: "nullability",
    cases: CASES,
};

/// 返回“空值分流”主题的测试套件。
pub const fn suite() -> &'static TckSuite {
    &SUITE
}

/// 根位置的空值落入每种非可选标量目标：结果是该类别的零值。
fn root_null_into_scalars_yields_zero_values() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();
    let kinds = [
        ScalarKind::Bool,
        ScalarKind::I8,
        ScalarKind::I16,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::U8,
        ScalarKind::U16,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::F32,
        ScalarKind::F64,
        ScalarKind::Char,
        ScalarKind::Str,
    ];
    for kind in kinds {
        let (shaped, erased) = block_on(round_trip_value(
            &codec,
            &Value::Null,
            &Shape::Scalar(kind),
            &options,
        ))
        .expect("空值往返不应失败");
        assert_eq!(shaped, zero_scalar(kind), "{kind:?} 应落为零值");
        assert_eq!(erased, Value::Null, "擦除槽位应保持空");
    }
}

/// 空值落入枚举目标：还原为数值 0 对应的成员。
fn root_null_into_enum_yields_zero_member() {
    let codec = BinCodec::new();
    let (typed, erased) = block_on(round_trip::<Action, _>(
        &codec,
        &Value::Null,
        &EncodeOptions::new(),
    ))
    .expect("空值到枚举");
    assert_eq!(typed, Action::Start);
    assert_eq!(erased, Value::Null);
}

/// 空值落入可选包装与擦除槽位：保持缺席/空。
fn root_null_into_optional_and_erased_stays_null() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();
    let (typed, erased) =
        block_on(round_trip::<Option<i32>, _>(&codec, &Value::Null, &options)).expect("空值往返");
    assert_eq!(typed, None);
    assert_eq!(erased, Value::Null);

    let (typed, erased) =
        block_on(round_trip::<Value, _>(&codec, &Value::Null, &options)).expect("擦除往返");
    assert_eq!(typed, Value::Null);
    assert_eq!(erased, Value::Null);
}

/// 记录 `{root_value: 时间戳, value: null}` 解码进 `value` 为非可选 i32 的目标：
/// `root_value` 不变，`value == 0`；擦除侧的 `value` 字段保持空。
fn null_field_into_bare_int_field_yields_zero() {
    let codec = BinCodec::new();
    let source = Value::Record(
        Record::new()
            .with_field("root_value", Value::I64(WITNESS_MILLIS))
            .with_field("value", Value::Null),
    );
    let (typed, erased) = block_on(round_trip::<DocRecord<i32>, _>(
        &codec,
        &source,
        &EncodeOptions::new(),
    ))
    .expect("空字段往返");
    assert_eq!(typed.root_value, WITNESS_MILLIS);
    assert_eq!(typed.value, 0);
    match erased {
        Value::Record(record) => {
            assert_eq!(record.get("root_value"), Some(&Value::I64(WITNESS_MILLIS)));
            assert_eq!(record.get("value"), Some(&Value::Null));
        }
        other => panic!("期望记录，得到 {other:?}"),
    }

    // 值语义目标同样把空字段落为零，见证字段不受影响。
    let (typed, _) = block_on(round_trip::<DocBlock<i32>, _>(
        &codec,
        &source,
        &EncodeOptions::new(),
    ))
    .expect("值语义空字段往返");
    assert_eq!(typed.root_value, WITNESS_MILLIS);
    assert_eq!(typed.value, 0);
}

/// 根位置的空值落入引用语义聚合形状：解码结果保持空。
fn null_into_reference_shape_stays_null() {
    let codec = BinCodec::new();
    let shape = DocRecord::<i32>::shape();
    let (shaped, erased) = block_on(round_trip_value(
        &codec,
        &Value::Null,
        &shape,
        &EncodeOptions::new(),
    ))
    .expect("空值到引用语义");
    assert_eq!(shaped, Value::Null);
    assert_eq!(erased, Value::Null);
}

/// 根位置的空值落入值语义聚合形状：解码结果是全默认字段的聚合。
fn null_into_value_shape_yields_default_block() {
    let codec = BinCodec::new();
    let shape = DocBlock::<i32>::shape();
    let (shaped, _) = block_on(round_trip_value(
        &codec,
        &Value::Null,
        &shape,
        &EncodeOptions::new(),
    ))
    .expect("空值到值语义");
    assert_eq!(shaped, zero_value(&shape));
    match shaped {
        Value::Record(record) => {
            assert_eq!(record.get("root_value"), Some(&Value::I64(0)));
            assert_eq!(record.get("value"), Some(&Value::I32(0)));
        }
        other => panic!("期望记录，得到 {other:?}"),
    }
}

/// 开启“省略空字段”后：具型解码把缺失字段当作空字段分流，擦除侧则看不到该字段。
fn omitted_null_fields_decode_like_null_fields() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new().omit_null_fields(true);
    let source = Value::Record(
        Record::new()
            .with_field("root_value", Value::I64(WITNESS_MILLIS))
            .with_field("value", Value::Null),
    );

    let (typed, erased) = block_on(round_trip::<DocRecord<Option<i32>>, _>(
        &codec, &source, &options,
    ))
    .expect("省略空字段往返");
    assert_eq!(typed.root_value, WITNESS_MILLIS);
    assert_eq!(typed.value, None);
    match erased {
        Value::Record(record) => {
            assert_eq!(record.len(), 1, "被省略的字段不应出现在擦除结果中");
            assert_eq!(record.get("value"), None);
        }
        other => panic!("期望记录，得到 {other:?}"),
    }

    let (typed, _) = block_on(round_trip::<DocRecord<i32>, _>(&codec, &source, &options))
        .expect("省略空字段到非可选目标");
    assert_eq!(typed.value, 0);
}
