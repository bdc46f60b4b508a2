//! 枚举擦除套件：类型擦除往返产出底层数值，具型往返精确还原符号成员。

use crate::case::{TckCase, TckSuite};
use crate::executor::round_trip;
use crate::fixtures::{Action, DocBlock, DocRecord, Offset, Priority, WITNESS_MILLIS};
use futures::executor::block_on;
use prism_codec_bin::BinCodec;
use prism_core::{EncodeOptions, IntoValue, Value, erased_expectation};

const CASES: &[TckCase] = &[
    TckCase {
        name: "action_at_root_erases_to_numeric_zero",
        test: action_at_root_erases_to_numeric_zero,
    },
    TckCase {
        name: "enum_round_trips_into_its_own_type",
        test: enum_round_trips_into_its_own_type,
    },
    TckCase {
        name: "enum_into_optional_enum_reproduces_member",
        test: enum_into_optional_enum_reproduces_member,
    },
    TckCase {
        name: "unsigned_and_wide_underlying_kinds_erase_exactly",
        test: unsigned_and_wide_underlying_kinds_erase_exactly,
    },
    TckCase {
        name: "enum_fields_erase_inside_both_aggregates",
        test: enum_fields_erase_inside_both_aggregates,
    },
];

const SUITE: TckSuite = TckSuite {
    name: "erasure",
    cases: CASES,
};

/// 返回“枚举擦除”主题的测试套件。
pub const fn suite() -> &'static TckSuite {
    &SUITE
}

/// 根位置的 `Action::Start`（底层 i32，数值 0）擦除后必须是整数 0，而非符号成员。
fn action_at_root_erases_to_numeric_zero() {
    let codec = BinCodec::new();
    let source = Action::Start.into_value();
    let (typed, erased) = block_on(round_trip::<Action, _>(
        &codec,
        &source,
        &EncodeOptions::new(),
    ))
    .expect("枚举往返");
    assert_eq!(typed, Action::Start);
    assert_eq!(erased, Value::I32(0));
    assert_eq!(erased, erased_expectation(&source));
}

/// 解码回同一枚举类型必须精确还原符号成员。
fn enum_round_trips_into_its_own_type() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();
    for member in [Action::Start, Action::Pause, Action::Stop] {
        let (typed, _) = block_on(round_trip::<Action, _>(
            &codec,
            &member.into_value(),
            &options,
        ))
        .expect("枚举往返");
        assert_eq!(typed, member);
    }
}

/// 解码进同一枚举类型的可选包装同样精确还原符号成员。
fn enum_into_optional_enum_reproduces_member() {
    let codec = BinCodec::new();
    let (typed, erased) = block_on(round_trip::<Option<Action>, _>(
        &codec,
        &Action::Stop.into_value(),
        &EncodeOptions::new(),
    ))
    .expect("可选枚举往返");
    assert_eq!(typed, Some(Action::Stop));
    assert_eq!(erased, Value::I32(2));
}

/// 无符号与 64 位底层类别按各自宽度擦除：数值类别与数值都不得漂移。
fn unsigned_and_wide_underlying_kinds_erase_exactly() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();

    let (typed, erased) = block_on(round_trip::<Priority, _>(
        &codec,
        &Priority::High.into_value(),
        &options,
    ))
    .expect("Priority 往返");
    assert_eq!(typed, Priority::High);
    assert_eq!(erased, Value::U8(200));

    let (typed, erased) = block_on(round_trip::<Offset, _>(
        &codec,
        &Offset::Ahead.into_value(),
        &options,
    ))
    .expect("Offset 往返");
    assert_eq!(typed, Offset::Ahead);
    assert_eq!(erased, Value::I64(9_000_000_000));

    let (typed, erased) = block_on(round_trip::<Offset, _>(
        &codec,
        &Offset::Behind.into_value(),
        &options,
    ))
    .expect("负数成员往返");
    assert_eq!(typed, Offset::Behind);
    assert_eq!(erased, Value::I64(-5));
}

/// 聚合字段位置的枚举与根位置遵循完全相同的擦除规则，外层记录形状不变。
fn enum_fields_erase_inside_both_aggregates() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();

    let record_source = DocRecord {
        root_value: WITNESS_MILLIS,
        value: Action::Pause,
    }
    .into_value();
    let (typed, erased) = block_on(round_trip::<DocRecord<Action>, _>(
        &codec,
        &record_source,
        &options,
    ))
    .expect("引用语义往返");
    assert_eq!(typed.root_value, WITNESS_MILLIS);
    assert_eq!(typed.value, Action::Pause);
    assert_eq!(erased, erased_expectation(&record_source));

    let block_source = DocBlock {
        root_value: WITNESS_MILLIS,
        value: Priority::Low,
    }
    .into_value();
    let (typed, erased) = block_on(round_trip::<DocBlock<Priority>, _>(
        &codec,
        &block_source,
        &options,
    ))
    .expect("值语义往返");
    assert_eq!(typed.value, Priority::Low);
    match erased {
        Value::Record(record) => {
            assert_eq!(record.get("value"), Some(&Value::U8(1)));
        }
        other => panic!("期望记录，得到 {other:?}"),
    }
}
