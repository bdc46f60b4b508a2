#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc = "prism-core: 无模式二进制对象编解码的值强制转换契约核心。"]
#![doc = ""]
#![doc = "== 契约范围 =="]
#![doc = "本 crate 只定义“同一份编码在不同静态类型下解码时必须满足的关系”：值模型、形状描述符、强制转换规则表、期望求解器与编解码边界。"]
#![doc = "具体的字节布局由实现 crate（如 `prism-codec-bin`）承担；任何实现都必须通过 `prism-contract-tests` 的全量矩阵。"]
#![doc = ""]
#![doc = "== 内存分配依赖 =="]
#![doc = "核心契约依赖 [`alloc`] 中的 `Box`、`Vec`、`String` 表达记录与可选包装，纯 `no_std`（无分配器）环境暂不支持。"]

extern crate alloc;

pub use async_trait::async_trait;

pub mod codec;
pub mod coerce;
pub mod convert;
pub mod error;
pub mod expect;
pub mod shape;
pub mod transport;
pub mod value;

pub use codec::{EncodeOptions, ObjectCodec, ObjectDecoder, ObjectEncoder, decode_as};
pub use coerce::{coerce, erase_enum, scalar_cast, zero_scalar, zero_value};
pub use convert::{FromValue, IntoValue, Shaped};
pub use error::CodecError;
pub use expect::erased_expectation;
pub use shape::{
    AggregateRepr, AggregateShape, EnumMember, EnumShape, FieldShape, IntKind, ScalarKind, Shape,
};
pub use transport::{ByteTransport, MemTransport};
pub use value::{EnumValue, IntScalar, Record, Value, ValueKind};

/// 框架统一的 `Result` 别名，错误位默认为 [`CodecError`]。
pub type Result<T, E = CodecError> = core::result::Result<T, E>;
