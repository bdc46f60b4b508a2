//! 目标类型的结构化形状描述符。
//!
//! ## 模块目的（Why）
//! - 解码目标的“静态类型”不能依赖运行期反射来发现；取而代之的是在组合期由每个目标类型
//!   给出一份结构描述（字段名 + 类别），规则表据此派发。
//! - 引用语义与值语义聚合体在线上格式中不可区分，仅在形状中以 [`AggregateRepr`] 标记，
//!   两者对空值的解码结果因此不同（引用保持空、值语义落为全默认）。
//!
//! ## 契约说明（What）
//! - [`Shape::Erased`] 表示完全类型擦除的目标：没有任何声明形状，解码结果只能由编码
//!   实际记录的内容重建。
//! - [`EnumShape`] 的成员表以 `i128` 存储原始数值，足以覆盖全部八种底层整数类别；
//!   成员表的数值必须落在底层类别的表示范围内。
//!
//! ## 实现策略（How）
//! - 枚举形状使用 `&'static` 引用：夹具在静态存储中定义一次，组合期零成本复用。
//! - 聚合与可选形状持有堆上的子形状，按需在 `Shaped::shape()` 中组合构造。

use alloc::boxed::Box;
use alloc::vec::Vec;
use serde::Serialize;

/// 八种原生整数类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntKind {
    /// 8 位有符号。
    I8,
    /// 16 位有符号。
    I16,
    /// 32 位有符号。
    I32,
    /// 64 位有符号。
    I64,
    /// 8 位无符号。
    U8,
    /// 16 位无符号。
    U16,
    /// 32 位无符号。
    U32,
    /// 64 位无符号。
    U64,
}

/// 标量类别：布尔、八种整数、两种浮点、字符与字符串。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScalarKind {
    /// 布尔。
    Bool,
    /// 8 位有符号整数。
    I8,
    /// 16 位有符号整数。
    I16,
    /// 32 位有符号整数。
    I32,
    /// 64 位有符号整数。
    I64,
    /// 8 位无符号整数。
    U8,
    /// 16 位无符号整数。
    U16,
    /// 32 位无符号整数。
    U32,
    /// 64 位无符号整数。
    U64,
    /// 32 位浮点数。
    F32,
    /// 64 位浮点数。
    F64,
    /// Unicode 标量值。
    Char,
    /// UTF-8 字符串。
    Str,
}

impl From<IntKind> for ScalarKind {
    fn from(kind: IntKind) -> Self {
        match kind {
            IntKind::I8 => Self::I8,
            IntKind::I16 => Self::I16,
            IntKind::I32 => Self::I32,
            IntKind::I64 => Self::I64,
            IntKind::U8 => Self::U8,
            IntKind::U16 => Self::U16,
            IntKind::U32 => Self::U32,
            IntKind::U64 => Self::U64,
        }
    }
}

/// 枚举成员的符号名与原始数值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    /// 成员符号名。
    pub name: &'static str,
    /// 成员在底层类别中的原始数值。
    pub repr: i128,
}

/// 枚举类型的形状：类型名、底层整数类别与成员表。
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct EnumShape {
    /// 枚举类型名，参与成员值的相等性判定。
    pub type_name: &'static str,
    /// 底层整数类别，同时决定擦除后的数值类别。
    pub underlying: IntKind,
    /// 成员表；允许解码出未登记的数值（符号名缺席）。
    pub members: &'static [EnumMember],
}

/// 聚合体的表示语义。
///
/// # 契约说明
/// - `Reference`：堆分配、可为空；空值解码保持为空（规则 4）。
/// - `Value`：按字段复制、不可为空；空值解码落为全默认字段（规则 3）。
/// - 两种表示对同一份编码聚合必须产出逐字段相等的内容（规则 6）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AggregateRepr {
    /// 引用语义：携带身份、可为空。
    Reference,
    /// 值语义：按字段复制、以零值兜底。
    Value,
}

/// 聚合体形状：表示语义加有序字段表。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateShape {
    /// 表示语义。
    pub repr: AggregateRepr,
    /// 按声明顺序排列的字段形状。
    pub fields: Vec<FieldShape>,
}

/// 单个字段的名称与形状。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldShape {
    /// 字段名，与线上记录的字段名逐字节匹配。
    pub name: &'static str,
    /// 字段的目标形状。
    pub shape: Shape,
}

/// 解码目标的形状描述符。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    /// 标量目标。
    Scalar(ScalarKind),
    /// 枚举目标。
    Enum(&'static EnumShape),
    /// 可选包装目标。
    Optional(Box<Shape>),
    /// 聚合体目标。
    Aggregate(AggregateShape),
    /// 完全类型擦除的目标。
    Erased,
}

impl Shape {
    /// 构造可选包装形状。
    pub fn optional(inner: Shape) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// 构造指定表示语义的聚合形状。
    pub fn aggregate(repr: AggregateRepr, fields: Vec<FieldShape>) -> Self {
        Self::Aggregate(AggregateShape { repr, fields })
    }
}
