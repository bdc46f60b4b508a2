//! 运行期带标签的值模型。
//!
//! ## 模块目的（Why）
//! - 类型擦除目标（“any 槽位”）需要一个封闭的变体类型来表达“编码实际记录了什么”，
//!   而不是开放式的动态类型；强制转换规则表因此可以写成穷尽的 match 分支。
//! - 测试矩阵构造源值、期望求解器计算期望值、擦除解码产出结果值，三者共享同一模型，
//!   相等性比较即为验证动作。
//!
//! ## 契约说明（What）
//! - 枚举成员永远同时携带符号身份与底层整数类别的数值表示；一旦类型信息被擦除，
//!   编解码只须保留数值表示，绝不要求保留符号身份。
//! - 记录（[`Record`]）是字段名到值的**有序**映射；线上格式不区分引用语义与值语义，
//!   该区分只存在于形状描述符（[`crate::shape::AggregateRepr`]）。
//! - 可选包装是显式的 [`Value::Optional`] 变体：`Optional(None)` 表示“缺席”，
//!   与 `Null` 仅在形状层面才产生不同的解码结果。
//!
//! ## 风险提示（Trade-offs）
//! - 浮点变体使用派生的 `PartialEq`，NaN 不自反；矩阵与夹具只使用正常值。

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

use crate::shape::{EnumShape, IntKind};

/// 覆盖八种原生整数宽度的标量，供枚举底层表示与转换表共用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntScalar {
    /// 8 位有符号整数。
    I8(i8),
    /// 16 位有符号整数。
    I16(i16),
    /// 32 位有符号整数。
    I32(i32),
    /// 64 位有符号整数。
    I64(i64),
    /// 8 位无符号整数。
    U8(u8),
    /// 16 位无符号整数。
    U16(u16),
    /// 32 位无符号整数。
    U32(u32),
    /// 64 位无符号整数。
    U64(u64),
}

impl IntScalar {
    /// 返回标量所属的整数类别。
    pub fn kind(&self) -> IntKind {
        match self {
            Self::I8(_) => IntKind::I8,
            Self::I16(_) => IntKind::I16,
            Self::I32(_) => IntKind::I32,
            Self::I64(_) => IntKind::I64,
            Self::U8(_) => IntKind::U8,
            Self::U16(_) => IntKind::U16,
            Self::U32(_) => IntKind::U32,
            Self::U64(_) => IntKind::U64,
        }
    }

    /// 以 `i128` 读出数值，供成员查找与跨宽度比较使用。
    pub fn as_i128(&self) -> i128 {
        match self {
            Self::I8(v) => i128::from(*v),
            Self::I16(v) => i128::from(*v),
            Self::I32(v) => i128::from(*v),
            Self::I64(v) => i128::from(*v),
            Self::U8(v) => i128::from(*v),
            Self::U16(v) => i128::from(*v),
            Self::U32(v) => i128::from(*v),
            Self::U64(v) => i128::from(*v),
        }
    }

    /// 按指定类别构造标量。
    ///
    /// # 契约说明
    /// - **前置条件**：`raw` 必须落在 `kind` 的表示范围内；枚举成员表在定义期即满足该约束。
    /// - **后置条件**：返回标量的 `kind()` 与入参一致，数值不发生截断。
    pub fn from_raw(kind: IntKind, raw: i128) -> Self {
        match kind {
            IntKind::I8 => Self::I8(raw as i8),
            IntKind::I16 => Self::I16(raw as i16),
            IntKind::I32 => Self::I32(raw as i32),
            IntKind::I64 => Self::I64(raw as i64),
            IntKind::U8 => Self::U8(raw as u8),
            IntKind::U16 => Self::U16(raw as u16),
            IntKind::U32 => Self::U32(raw as u32),
            IntKind::U64 => Self::U64(raw as u64),
        }
    }

    /// 返回指定类别的零值。
    pub fn zero(kind: IntKind) -> Self {
        Self::from_raw(kind, 0)
    }
}

/// 枚举成员值：符号身份与底层数值表示的组合。
///
/// # 契约说明（What）
/// - `type_name` 与 `repr` 共同构成相等性判定；`member` 只是按成员表反查出的符号名，
///   当数值未命中任何成员时为 `None`（解码侧允许未登记的数值通过）。
/// - 擦除路径只保留 `repr`，见 [`crate::coerce::erase_enum`]。
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnumValue {
    type_name: &'static str,
    member: Option<&'static str>,
    repr: IntScalar,
}

impl EnumValue {
    /// 按底层标量构造成员值，并在成员表中反查符号名。
    pub fn new(shape: &EnumShape, repr: IntScalar) -> Self {
        let raw = repr.as_i128();
        let member = shape.members.iter().find(|m| m.repr == raw).map(|m| m.name);
        Self {
            type_name: shape.type_name,
            member,
            repr,
        }
    }

    /// 按原始数值构造成员值，宽度由形状的底层类别决定。
    pub fn from_raw(shape: &EnumShape, raw: i128) -> Self {
        Self::new(shape, IntScalar::from_raw(shape.underlying, raw))
    }

    /// 枚举类型名。
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// 命中的成员符号名；未命中任何成员时为 `None`。
    pub fn member(&self) -> Option<&'static str> {
        self.member
    }

    /// 底层整数表示。
    pub fn repr(&self) -> IntScalar {
        self.repr
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.repr == other.repr
    }
}

/// 字段名到值的有序映射，即聚合体的擦除表示。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    fields: Vec<(Cow<'static, str>, Value)>,
}

impl Record {
    /// 构造空记录。
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder 风格追加字段并返回自身。
    pub fn with_field(mut self, name: impl Into<Cow<'static, str>>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// 在末尾追加字段，保持插入顺序。
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: Value) {
        self.fields.push((name.into(), value));
    }

    /// 按名称查找字段值，命中第一个同名字段。
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// 以切片视图遍历全部字段。
    pub fn fields(&self) -> &[(Cow<'static, str>, Value)] {
        &self.fields
    }

    /// 字段数量。
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 判断记录是否为空。
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// 值类别标签，供错误报告与规则表分类使用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    /// 空值。
    Null,
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
    /// 枚举成员。
    Enum,
    /// 聚合体记录。
    Record,
    /// 可选包装。
    Optional,
}

/// 运行期带标签的数据单元，编码消费、解码产出的统一形态。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// 空值；在文档根与聚合字段位置均可出现。
    Null,
    /// 布尔值。
    Bool(bool),
    /// 8 位有符号整数。
    I8(i8),
    /// 16 位有符号整数。
    I16(i16),
    /// 32 位有符号整数。
    I32(i32),
    /// 64 位有符号整数。
    I64(i64),
    /// 8 位无符号整数。
    U8(u8),
    /// 16 位无符号整数。
    U16(u16),
    /// 32 位无符号整数。
    U32(u32),
    /// 64 位无符号整数。
    U64(u64),
    /// 32 位浮点数。
    F32(f32),
    /// 64 位浮点数。
    F64(f64),
    /// Unicode 标量值；与数值类别互不相容。
    Char(char),
    /// UTF-8 字符串。
    Str(String),
    /// 枚举成员，携带符号身份与底层数值表示。
    Enum(EnumValue),
    /// 聚合体记录。
    Record(Record),
    /// 可选包装；`None` 表示缺席。
    Optional(Option<Box<Value>>),
}

impl Value {
    /// 返回值的类别标签。
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::I8(_) => ValueKind::I8,
            Self::I16(_) => ValueKind::I16,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::U8(_) => ValueKind::U8,
            Self::U16(_) => ValueKind::U16,
            Self::U32(_) => ValueKind::U32,
            Self::U64(_) => ValueKind::U64,
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::Char(_) => ValueKind::Char,
            Self::Str(_) => ValueKind::Str,
            Self::Enum(_) => ValueKind::Enum,
            Self::Record(_) => ValueKind::Record,
            Self::Optional(_) => ValueKind::Optional,
        }
    }

    /// 判断值在编码语义下是否等同于空（`Null` 或缺席的可选包装）。
    pub fn is_null_like(&self) -> bool {
        matches!(self, Self::Null | Self::Optional(None))
    }

    /// 以 `Optional(Some(..))` 包装给定值。
    pub fn some(value: Value) -> Self {
        Self::Optional(Some(Box::new(value)))
    }

    /// 缺席的可选包装。
    pub fn absent() -> Self {
        Self::Optional(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{EnumMember, EnumShape};

    static COLOR: EnumShape = EnumShape {
        type_name: "Color",
        underlying: IntKind::U8,
        members: &[
            EnumMember {
                name: "Red",
                repr: 0,
            },
            EnumMember {
                name: "Blue",
                repr: 7,
            },
        ],
    };

    #[test]
    fn enum_value_resolves_member_by_repr() {
        let value = EnumValue::from_raw(&COLOR, 7);
        assert_eq!(value.member(), Some("Blue"));
        assert_eq!(value.repr(), IntScalar::U8(7));
    }

    #[test]
    fn enum_value_tolerates_unregistered_repr() {
        let value = EnumValue::from_raw(&COLOR, 42);
        assert_eq!(value.member(), None);
        assert_eq!(value.repr().as_i128(), 42);
    }

    #[test]
    fn enum_equality_ignores_member_name() {
        let named = EnumValue::from_raw(&COLOR, 7);
        let raw = EnumValue::new(&COLOR, IntScalar::U8(7));
        assert_eq!(named, raw);
    }

    #[test]
    fn record_preserves_field_order() {
        let record = Record::new()
            .with_field("b", Value::I32(2))
            .with_field("a", Value::I32(1));
        let names: alloc::vec::Vec<_> =
            record.fields().iter().map(|(name, _)| name.as_ref()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn null_like_covers_absent_optional() {
        assert!(Value::Null.is_null_like());
        assert!(Value::absent().is_null_like());
        assert!(!Value::some(Value::Bool(true)).is_null_like());
    }
}
