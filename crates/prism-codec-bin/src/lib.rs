#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc = "prism-codec-bin: prism 值契约的自描述二进制编解码实现。"]
#![doc = ""]
#![doc = "每个值由一个标签字节加小端载荷构成；记录写出字段数与（字段名, 值）序列。"]
#![doc = "枚举按底层整数类别写出（符号身份有意不落盘），可选包装坍缩为载荷或空标签，"]
#![doc = "因此擦除解码天然重建“编码实际记录的最窄值类别”。"]

extern crate alloc;

mod decode;
mod encode;
mod wire;

use alloc::boxed::Box;
use async_trait::async_trait;
use prism_core::{
    ByteTransport, CodecError, EncodeOptions, ObjectDecoder, ObjectEncoder, Shape, Value, coerce,
};

/// 自描述二进制编解码器；无状态，可在线程间共享。
#[derive(Debug, Default, Clone, Copy)]
pub struct BinCodec;

impl BinCodec {
    /// 构造编解码器实例。
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ObjectEncoder for BinCodec {
    async fn encode(
        &self,
        value: &Value,
        sink: &mut dyn ByteTransport,
        options: &EncodeOptions,
    ) -> Result<(), CodecError> {
        encode::encode_value(value, sink, options)
    }
}

#[async_trait]
impl ObjectDecoder for BinCodec {
    async fn decode_erased(&self, source: &mut dyn ByteTransport) -> Result<Value, CodecError> {
        decode::decode_value(source)
    }

    /// 带形状解码 = 擦除读取 + 规则表解析；规则表之外的不相容在此冒泡。
    async fn decode_shaped(
        &self,
        source: &mut dyn ByteTransport,
        shape: &Shape,
    ) -> Result<Value, CodecError> {
        let recorded = decode::decode_value(source)?;
        coerce(&recorded, shape)
    }
}
