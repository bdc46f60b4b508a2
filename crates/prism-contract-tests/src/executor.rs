//! 往返执行器：驱动编解码边界完成一次“编码一次、解码两次”的试验。
//!
//! ## 模块目的（Why）
//! - 矩阵的每个用例都需要同一套流程：按选项编码一次，再从同一份字节独立解码两次
//!   （一次进声明了形状的目标，一次进擦除槽位）；集中实现以免各用例私自变体。
//!
//! ## 契约说明（What）
//! - 每次试验构造私有的 [`MemTransport`]：单次往返之外不存在共享可变资源，
//!   并发安全由构造保证；实例随作用域结束释放，即使解码失败也不例外。
//! - 编码完成后、以及两次解码之间，读指针都会显式复位；两次解码读取同一份字节，
//!   互不观察、互不改写。
//! - 规则表未覆盖的类型不匹配（如聚合体落入标量目标）原样向调用方冒泡，
//!   由用例作为断言失败上报，执行器不做任何就地恢复。

use prism_core::{
    ByteTransport, CodecError, EncodeOptions, FromValue, MemTransport, ObjectCodec, ObjectDecoder,
    ObjectEncoder, Shape, Shaped, Value, decode_as,
};

/// 执行一次往返：具型目标由 `T` 的组合期形状声明。
///
/// # 返回契约
/// - 元组左侧是具型解码结果，右侧是擦除解码结果；两者来自同一份编码字节。
pub async fn round_trip<T, C>(
    codec: &C,
    source: &Value,
    options: &EncodeOptions,
) -> Result<(T, Value), CodecError>
where
    T: Shaped + FromValue,
    C: ObjectCodec + ?Sized,
{
    let mut transport = MemTransport::new();
    codec.encode(source, &mut transport, options).await?;
    transport.rewind();
    let typed = decode_as::<T, C>(codec, &mut transport).await?;
    transport.rewind();
    let erased = codec.decode_erased(&mut transport).await?;
    Ok((typed, erased))
}

/// 执行一次往返：具型目标以显式形状给出，结果保持在值模型层。
pub async fn round_trip_value<C>(
    codec: &C,
    source: &Value,
    shape: &Shape,
    options: &EncodeOptions,
) -> Result<(Value, Value), CodecError>
where
    C: ObjectCodec + ?Sized,
{
    let mut transport = MemTransport::new();
    codec.encode(source, &mut transport, options).await?;
    transport.rewind();
    let shaped = codec.decode_shaped(&mut transport, shape).await?;
    transport.rewind();
    let erased = codec.decode_erased(&mut transport).await?;
    Ok((shaped, erased))
}
