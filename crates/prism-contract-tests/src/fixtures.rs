//! 测试矩阵使用的领域夹具。
//!
//! ## 模块目的（Why）
//! - 矩阵需要真实的 Rust 目标类型来驱动泛型解码路径：三个不同底层类别的枚举、
//!   一对字段布局相同但表示语义不同的泛型聚合体。
//!
//! ## 契约说明（What）
//! - [`DocRecord`]（引用语义）与 [`DocBlock`]（值语义）字段布局完全一致，
//!   仅 `Shaped::shape()` 返回的 [`AggregateRepr`] 不同；两者对同一份编码
//!   必须产出逐字段相等的内容。
//! - `root_value` 统一为 Unix 毫秒时间戳（`i64` 标量），在所有用例中作为
//!   “往返不得触碰”的见证字段。

use prism_core::{
    AggregateRepr, CodecError, EnumMember, EnumShape, EnumValue, FieldShape, FromValue, IntKind,
    IntoValue, Record, Shape, Shaped, Value,
};

/// `Action`：32 位有符号底层类别的三成员枚举。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 数值 0。
    Start,
    /// 数值 1。
    Pause,
    /// 数值 2。
    Stop,
}

/// `Action` 的静态形状。
pub static ACTION_SHAPE: EnumShape = EnumShape {
    type_name: "Action",
    underlying: IntKind::I32,
    members: &[
        EnumMember {
            name: "Start",
            repr: 0,
        },
        EnumMember {
            name: "Pause",
            repr: 1,
        },
        EnumMember {
            name: "Stop",
            repr: 2,
        },
    ],
};

impl Action {
    fn raw(self) -> i128 {
        match self {
            Self::Start => 0,
            Self::Pause => 1,
            Self::Stop => 2,
        }
    }
}

impl Shaped for Action {
    fn shape() -> Shape {
        Shape::Enum(&ACTION_SHAPE)
    }
}

impl IntoValue for Action {
    fn into_value(self) -> Value {
        Value::Enum(EnumValue::from_raw(&ACTION_SHAPE, self.raw()))
    }
}

impl FromValue for Action {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Enum(member) if member.type_name() == ACTION_SHAPE.type_name => {
                match member.repr().as_i128() {
                    0 => Ok(Self::Start),
                    1 => Ok(Self::Pause),
                    2 => Ok(Self::Stop),
                    _ => Err(CodecError::Unsupported("Action 之外的枚举数值")),
                }
            }
            other => Err(CodecError::ShapeMismatch {
                expected: "Action 枚举成员",
                found: other.kind(),
            }),
        }
    }
}

/// `Priority`：8 位无符号底层类别的枚举，最大成员贴近 `u8` 上界。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// 数值 1。
    Low,
    /// 数值 5。
    Normal,
    /// 数值 200。
    High,
}

/// `Priority` 的静态形状。
pub static PRIORITY_SHAPE: EnumShape = EnumShape {
    type_name: "Priority",
    underlying: IntKind::U8,
    members: &[
        EnumMember {
            name: "Low",
            repr: 1,
        },
        EnumMember {
            name: "Normal",
            repr: 5,
        },
        EnumMember {
            name: "High",
            repr: 200,
        },
    ],
};

impl Priority {
    fn raw(self) -> i128 {
        match self {
            Self::Low => 1,
            Self::Normal => 5,
            Self::High => 200,
        }
    }
}

impl Shaped for Priority {
    fn shape() -> Shape {
        Shape::Enum(&PRIORITY_SHAPE)
    }
}

impl IntoValue for Priority {
    fn into_value(self) -> Value {
        Value::Enum(EnumValue::from_raw(&PRIORITY_SHAPE, self.raw()))
    }
}

impl FromValue for Priority {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Enum(member) if member.type_name() == PRIORITY_SHAPE.type_name => {
                match member.repr().as_i128() {
                    1 => Ok(Self::Low),
                    5 => Ok(Self::Normal),
                    200 => Ok(Self::High),
                    _ => Err(CodecError::Unsupported("Priority 之外的枚举数值")),
                }
            }
            other => Err(CodecError::ShapeMismatch {
                expected: "Priority 枚举成员",
                found: other.kind(),
            }),
        }
    }
}

/// `Offset`：64 位有符号底层类别的枚举，含负数与超出 32 位的成员。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// 数值 -5。
    Behind,
    /// 数值 0。
    Zero,
    /// 数值 9_000_000_000。
    Ahead,
}

/// `Offset` 的静态形状。
pub static OFFSET_SHAPE: EnumShape = EnumShape {
    type_name: "Offset",
    underlying: IntKind::I64,
    members: &[
        EnumMember {
            name: "Behind",
            repr: -5,
        },
        EnumMember {
            name: "Zero",
            repr: 0,
        },
        EnumMember {
            name: "Ahead",
            repr: 9_000_000_000,
        },
    ],
};

impl Offset {
    fn raw(self) -> i128 {
        match self {
            Self::Behind => -5,
            Self::Zero => 0,
            Self::Ahead => 9_000_000_000,
        }
    }
}

impl Shaped for Offset {
    fn shape() -> Shape {
        Shape::Enum(&OFFSET_SHAPE)
    }
}

impl IntoValue for Offset {
    fn into_value(self) -> Value {
        Value::Enum(EnumValue::from_raw(&OFFSET_SHAPE, self.raw()))
    }
}

impl FromValue for Offset {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Enum(member) if member.type_name() == OFFSET_SHAPE.type_name => {
                match member.repr().as_i128() {
                    -5 => Ok(Self::Behind),
                    0 => Ok(Self::Zero),
                    9_000_000_000 => Ok(Self::Ahead),
                    _ => Err(CodecError::Unsupported("Offset 之外的枚举数值")),
                }
            }
            other => Err(CodecError::ShapeMismatch {
                expected: "Offset 枚举成员",
                found: other.kind(),
            }),
        }
    }
}

/// 引用语义聚合体：堆上身份、空值解码保持为空。
#[derive(Debug, Clone, PartialEq)]
pub struct DocRecord<T> {
    /// 见证字段：Unix 毫秒时间戳，往返不得改变。
    pub root_value: i64,
    /// 受试字段。
    pub value: T,
}

/// 值语义聚合体：按字段复制，空值解码落为全默认字段。
#[derive(Debug, Clone, PartialEq)]
pub struct DocBlock<T> {
    /// 见证字段：Unix 毫秒时间戳，往返不得改变。
    pub root_value: i64,
    /// 受试字段。
    pub value: T,
}

fn pair_fields<T: Shaped>() -> Vec<FieldShape> {
    vec![
        FieldShape {
            name: "root_value",
            shape: i64::shape(),
        },
        FieldShape {
            name: "value",
            shape: T::shape(),
        },
    ]
}

fn pair_record<T: IntoValue>(root_value: i64, value: T) -> Value {
    Value::Record(
        Record::new()
            .with_field("root_value", Value::I64(root_value))
            .with_field("value", value.into_value()),
    )
}

fn pair_from_record<T: FromValue>(value: Value) -> Result<(i64, T), CodecError> {
    let record = match value {
        Value::Record(record) => record,
        other => {
            return Err(CodecError::ShapeMismatch {
                expected: "聚合体记录",
                found: other.kind(),
            });
        }
    };
    let root_value = match record.get("root_value") {
        Some(field) => i64::from_value(field.clone())?,
        None => 0,
    };
    let field = record
        .get("value")
        .cloned()
        .ok_or(CodecError::Unsupported("记录缺少 value 字段"))?;
    Ok((root_value, T::from_value(field)?))
}

impl<T: Shaped> Shaped for DocRecord<T> {
    fn shape() -> Shape {
        Shape::aggregate(AggregateRepr::Reference, pair_fields::<T>())
    }
}

impl<T: IntoValue> IntoValue for DocRecord<T> {
    fn into_value(self) -> Value {
        pair_record(self.root_value, self.value)
    }
}

impl<T: FromValue> FromValue for DocRecord<T> {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        let (root_value, field) = pair_from_record(value)?;
        Ok(Self {
            root_value,
            value: field,
        })
    }
}

impl<T: Shaped> Shaped for DocBlock<T> {
    fn shape() -> Shape {
        Shape::aggregate(AggregateRepr::Value, pair_fields::<T>())
    }
}

impl<T: IntoValue> IntoValue for DocBlock<T> {
    fn into_value(self) -> Value {
        pair_record(self.root_value, self.value)
    }
}

impl<T: FromValue> FromValue for DocBlock<T> {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        let (root_value, field) = pair_from_record(value)?;
        Ok(Self {
            root_value,
            value: field,
        })
    }
}

/// 所有用例共用的见证时间戳（2023-11-14T22:13:20Z 的毫秒值）。
pub const WITNESS_MILLIS: i64 = 1_700_000_000_000;
