//! 编解码边界契约。
//!
//! ## 模块目的（Why）
//! - 核心只消费外部编解码器的两类操作：`encode(value, sink, options)` 与按目标解码；
//!   本模块把这条系统边界固化为对象安全的异步 trait，实现 crate
//!   （二进制实现、文本基线）各自落地。
//!
//! ## 契约说明（What）
//! - **输入**：编码消费只读的 [`Value`] 与每次往返私有的 [`ByteTransport`]；
//! - **后置条件**：擦除解码必须重建“编码实际记录的最窄值类别”；带形状解码必须满足
//!   [`crate::coerce`] 的规则表；规则表之外的不相容按 [`CodecError`] 致命冒泡，
//!   绝不静默产出值。
//! - **并发**：trait 对象要求 `Send + Sync`，往返之间不共享传输实例。
//!
//! ## 实现策略（How）
//! - 借鉴泛型层/对象层双轨：trait 本身保持对象安全（`&mut dyn ByteTransport`），
//!   泛型便利入口以自由函数 [`decode_as`] 提供。

use alloc::boxed::Box;

use async_trait::async_trait;

use crate::convert::{FromValue, Shaped};
use crate::error::CodecError;
use crate::shape::Shape;
use crate::transport::ByteTransport;
use crate::value::Value;

/// 编码选项。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// 为真时，记录中的空/缺席字段不写入编码；解码侧将缺失字段视同空值字段。
    pub omit_null_fields: bool,
}

impl EncodeOptions {
    /// 默认选项：空字段照常写入。
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder 风格开启“省略空字段”。
    pub fn omit_null_fields(mut self, omit: bool) -> Self {
        self.omit_null_fields = omit;
        self
    }
}

/// 编码侧边界操作。
#[async_trait]
pub trait ObjectEncoder: Send + Sync {
    /// 将值按选项编码进传输。
    async fn encode(
        &self,
        value: &Value,
        sink: &mut dyn ByteTransport,
        options: &EncodeOptions,
    ) -> Result<(), CodecError>;
}

/// 解码侧边界操作。
#[async_trait]
pub trait ObjectDecoder: Send + Sync {
    /// 解码进完全类型擦除的槽位：重建编码记录的最窄值类别。
    async fn decode_erased(&self, source: &mut dyn ByteTransport) -> Result<Value, CodecError>;

    /// 解码进声明了形状的目标：结果满足强制转换规则表。
    async fn decode_shaped(
        &self,
        source: &mut dyn ByteTransport,
        shape: &Shape,
    ) -> Result<Value, CodecError>;
}

/// 完整的编解码器边界：编码与两种解码。
pub trait ObjectCodec: ObjectEncoder + ObjectDecoder {}

impl<T> ObjectCodec for T where T: ObjectEncoder + ObjectDecoder {}

/// 泛型便利入口：按 `T` 的组合期形状解码并落为具体类型。
pub async fn decode_as<T, C>(codec: &C, source: &mut dyn ByteTransport) -> Result<T, CodecError>
where
    T: Shaped + FromValue,
    C: ObjectDecoder + ?Sized,
{
    let value = codec.decode_shaped(source, &T::shape()).await?;
    T::from_value(value)
}
