//! 聚合体套件：跨表示解码、嵌套聚合、缺席可选聚合与致命不相容。

use crate::case::{TckCase, TckSuite};
use crate::executor::round_trip;
use crate::fixtures::{DocBlock, DocRecord, WITNESS_MILLIS};
use futures::executor::block_on;
use prism_codec_bin::BinCodec;
use prism_core::{
    ByteTransport, CodecError, EncodeOptions, IntoValue, MemTransport, ObjectDecoder,
    ObjectEncoder, ScalarKind, Shape, Shaped, Value,
};

const CASES: &[TckCase] = &[
    TckCase {
        name: "reference_source_decodes_into_value_destination",
        test: reference_source_decodes_into_value_destination,
    },
    TckCase {
        name: "value_source_decodes_into_reference_destination",
        test: value_source_decodes_into_reference_destination,
    },
    TckCase {
        name: "both_representations_decode_identically_from_one_encoding",
        test: both_representations_decode_identically_from_one_encoding,
    },
    TckCase {
        name: "nested_block_decodes_typed_and_erased",
        test: nested_block_decodes_typed_and_erased,
    },
    TckCase {
        name: "optional_block_keeps_absence_distinct_from_defaults",
        test: optional_block_keeps_absence_distinct_from_defaults,
    },
    TckCase {
        name: "undefined_coercion_propagates_as_failure",
        test: undefined_coercion_propagates_as_failure,
    },
];

const SUITE: TckSuite = TckSuite {
    name: "aggregates",
    cases: CASES,
};

/// 返回“聚合体”主题的测试套件。
pub const fn suite() -> &'static TckSuite {
    &SUITE
}

/// 引用语义源编码后解码进值语义目标：逐字段相等。
fn reference_source_decodes_into_value_destination() {
    let codec = BinCodec::new();
    let source = DocRecord {
        root_value: WITNESS_MILLIS,
        value: 1i32,
    };
    let (typed, _) = block_on(round_trip::<DocBlock<i32>, _>(
        &codec,
        &source.clone().into_value(),
        &EncodeOptions::new(),
    ))
    .expect("跨表示往返");
    assert_eq!(typed.root_value, source.root_value);
    assert_eq!(typed.value, source.value);
}

/// 值语义源编码后解码进引用语义目标：逐字段相等。
fn value_source_decodes_into_reference_destination() {
    let codec = BinCodec::new();
    let source = DocBlock {
        root_value: WITNESS_MILLIS,
        value: 1i32,
    };
    let (typed, _) = block_on(round_trip::<DocRecord<i32>, _>(
        &codec,
        &source.clone().into_value(),
        &EncodeOptions::new(),
    ))
    .expect("跨表示往返");
    assert_eq!(typed.root_value, source.root_value);
    assert_eq!(typed.value, source.value);
}

/// 同一份编码字节分别解码进两种表示：两个结果逐字段相等，且互不影响。
fn both_representations_decode_identically_from_one_encoding() {
    let codec = BinCodec::new();
    let source = DocRecord {
        root_value: WITNESS_MILLIS,
        value: 42u16,
    }
    .into_value();

    let mut transport = MemTransport::new();
    block_on(codec.encode(&source, &mut transport, &EncodeOptions::new())).expect("编码");

    transport.rewind();
    let as_reference = block_on(codec.decode_shaped(&mut transport, &DocRecord::<u16>::shape()))
        .expect("引用语义解码");
    transport.rewind();
    let as_value =
        block_on(codec.decode_shaped(&mut transport, &DocBlock::<u16>::shape())).expect("值语义解码");

    assert_eq!(as_reference, as_value);
    assert_eq!(as_reference, source);
}

/// 嵌套的值语义聚合：显式具型与擦除槽位各自还原出一致的字段内容。
fn nested_block_decodes_typed_and_erased() {
    let codec = BinCodec::new();
    let source = DocRecord {
        root_value: WITNESS_MILLIS,
        value: DocBlock {
            root_value: 0,
            value: 1i32,
        },
    }
    .into_value();

    let (typed, erased) = block_on(round_trip::<DocRecord<DocBlock<i32>>, _>(
        &codec,
        &source,
        &EncodeOptions::new(),
    ))
    .expect("嵌套往返");
    assert_eq!(typed.value.value, 1);
    match erased {
        Value::Record(outer) => match outer.get("value") {
            Some(Value::Record(inner)) => {
                assert_eq!(inner.get("value"), Some(&Value::I32(1)));
            }
            other => panic!("期望嵌套记录，得到 {other:?}"),
        },
        other => panic!("期望记录，得到 {other:?}"),
    }
}

/// 缺席的可选值语义聚合保持缺席，与“全默认字段的聚合”可区分。
fn optional_block_keeps_absence_distinct_from_defaults() {
    let codec = BinCodec::new();
    let options = EncodeOptions::new();

    let absent_source = DocRecord {
        root_value: WITNESS_MILLIS,
        value: None::<DocBlock<i32>>,
    }
    .into_value();
    let (typed, _) = block_on(round_trip::<DocRecord<Option<DocBlock<i32>>>, _>(
        &codec,
        &absent_source,
        &options,
    ))
    .expect("缺席聚合往返");
    assert_eq!(typed.value, None, "缺席不得落为默认聚合");

    let default_source = DocRecord {
        root_value: WITNESS_MILLIS,
        value: Some(DocBlock {
            root_value: 0,
            value: 0i32,
        }),
    }
    .into_value();
    let (typed, _) = block_on(round_trip::<DocRecord<Option<DocBlock<i32>>>, _>(
        &codec,
        &default_source,
        &options,
    ))
    .expect("默认聚合往返");
    assert_eq!(
        typed.value,
        Some(DocBlock {
            root_value: 0,
            value: 0
        }),
        "显式的全默认聚合必须以值的形式出现"
    );
}

/// 规则表之外的不相容（聚合体落入标量目标）必须以失败冒泡，绝不静默产出值。
fn undefined_coercion_propagates_as_failure() {
    let codec = BinCodec::new();
    let source = DocRecord {
        root_value: WITNESS_MILLIS,
        value: 1i32,
    }
    .into_value();

    let mut transport = MemTransport::new();
    block_on(codec.encode(&source, &mut transport, &EncodeOptions::new())).expect("编码");
    transport.rewind();
    let outcome = block_on(codec.decode_shaped(&mut transport, &Shape::Scalar(ScalarKind::I32)));
    assert!(
        matches!(outcome, Err(CodecError::ShapeMismatch { .. })),
        "期望致命失败，得到 {outcome:?}"
    );
}
