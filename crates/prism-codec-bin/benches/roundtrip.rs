//! 二进制实现与文本基线的往返吞吐对比。
//!
//! # 设计目的（Why）
//! - 为“二进制格式相对文本基线的开销”提供持续可观测的数字；基线不参与契约验证，
//!   仅作为性能对照存在。
//!
//! # 执行逻辑（How）
//! - 构造一份带嵌套记录与各类标量的代表性文档，分别以 `BinCodec` 与 `JsonCodec`
//!   完成“编码 + 擦除解码”的完整往返；异步边界由 `futures` 的本地执行器驱动。
//!
//! # 契约说明（What）
//! - 两个基准使用同一份源值与全新的传输实例，互不共享状态。

use criterion::{Criterion, criterion_group, criterion_main};
use futures::executor::block_on;
use prism_codec_bin::BinCodec;
use prism_codec_json::JsonCodec;
use prism_core::{
    EncodeOptions, MemTransport, ObjectCodec, ObjectDecoder, ObjectEncoder, Record, Value,
};

fn representative_document() -> Value {
    let nested = Record::new()
        .with_field("root_value", Value::I64(1_700_000_000_000))
        .with_field("value", Value::some(Value::U16(7)));
    Value::Record(
        Record::new()
            .with_field("root_value", Value::I64(1_700_000_000_000))
            .with_field("flag", Value::Bool(true))
            .with_field("weight", Value::F64(0.75))
            .with_field("label", Value::Str("往返基准".to_string()))
            .with_field("nested", Value::Record(nested))
            .with_field("missing", Value::Null),
    )
}

fn run_round_trip<C: ObjectCodec>(codec: &C, source: &Value) -> Value {
    let mut transport = MemTransport::with_capacity(256);
    block_on(codec.encode(source, &mut transport, &EncodeOptions::new())).expect("编码失败");
    transport.rewind();
    block_on(codec.decode_erased(&mut transport)).expect("解码失败")
}

fn bench_binary_round_trip(c: &mut Criterion) {
    let codec = BinCodec::new();
    let source = representative_document();
    c.bench_function("bin_round_trip", |b| {
        b.iter(|| run_round_trip(&codec, &source))
    });
}

fn bench_json_round_trip(c: &mut Criterion) {
    let codec = JsonCodec::new();
    let source = representative_document();
    c.bench_function("json_round_trip", |b| {
        b.iter(|| run_round_trip(&codec, &source))
    });
}

criterion_group!(roundtrip_benches, bench_binary_round_trip, bench_json_round_trip);
criterion_main!(roundtrip_benches);
