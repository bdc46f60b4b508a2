//! 错误类型模块。
//!
//! ## 模块目的（Why）
//! - 将编码/解码阶段的所有失败分门别类，便于调用方通过模式匹配采取补救措施。
//! - 统一错误展示文案，配合 `Display`/`Error` trait，方便在上层错误栈中串联。
//!
//! ## 使用契约（What）
//! - 所有边界操作统一返回 [`CodecError`]；“按规则表可解析”的不匹配（如空值落入值语义目标）
//!   不是错误，而是规则表定义的结果，详见 [`crate::coerce`]。
//! - 错误枚举不携带对输入缓冲的引用，避免生命周期难题，且可在日志中安全复制。
//!
//! ## 实现策略（How）
//! - 枚举按失败来源分类：传输层（EOF）、字节格式（标签/布尔/字符/UTF-8）、形状层（类别不符）。
//! - `ShapeMismatch` 对应规则表之外的“未定义强制转换”，按契约必须向上冒泡为致命失败，
//!   绝不静默产出一个值。
//!
//! ## 风险提示（Trade-offs）
//! - 当前实现偏重于分类而非精确定位，调用方若需字节偏移，可在更高层自行补充。

use crate::value::ValueKind;
use core::fmt;

/// 编解码边界可能出现的错误枚举。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// 输入在值或长度前缀读取完成之前结束。
    UnexpectedEof,
    /// 遇到未登记的值标签字节。
    UnknownTag(u8),
    /// 布尔载荷既不是 0 也不是 1。
    InvalidBool(u8),
    /// 字符载荷不是合法的 Unicode 标量值。
    InvalidChar(u32),
    /// 字符串或字段名载荷不是合法的 UTF-8。
    InvalidUtf8,
    /// 记录的值类别与目标形状完全不相容（例如聚合体落入标量目标）。
    ShapeMismatch {
        /// 目标形状期望的类别描述。
        expected: &'static str,
        /// 实际记录的值类别。
        found: ValueKind,
    },
    /// 实现不支持的构造（例如文本基线遇到值模型之外的节点）。
    Unsupported(&'static str),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "输入过早结束，载荷不完整"),
            Self::UnknownTag(tag) => write!(f, "未知的值标签字节 {tag:#04x}"),
            Self::InvalidBool(byte) => write!(f, "布尔载荷非法，期望 0/1，实际 {byte}"),
            Self::InvalidChar(scalar) => {
                write!(f, "字符载荷 {scalar:#x} 不是合法的 Unicode 标量值")
            }
            Self::InvalidUtf8 => write!(f, "字符串载荷不是合法的 UTF-8"),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "记录类别 {found:?} 与目标形状不相容，期望{expected}")
            }
            Self::Unsupported(what) => write!(f, "实现不支持的构造：{what}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}
