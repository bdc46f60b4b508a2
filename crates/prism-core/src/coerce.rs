//! 值强制转换规则表。
//!
//! ## 模块目的（Why）
//! - 同一份编码在不同静态类型下解码时，结果值与原值之间的关系由一张纯函数规则表约束；
//!   实现 crate 的带形状解码与测试矩阵的期望比较都以本模块为唯一事实来源。
//!
//! ## 规则优先级（What）
//! 1. **同一性**：源类别与目标类别一致时，值保持不变；
//! 2. **枚举擦除**：枚举按底层整数类别穷举映射为数值（[`erase_enum`]），
//!    解码回同一枚举类型或其可选包装时必须精确还原符号成员；
//! 3. **空值落入值语义目标**：空/缺席落入非可选的值类别（标量、枚举、值语义聚合）时
//!    解析为该类型的零值，绝不是错误；
//! 4. **空值落入引用/可选目标**：空/缺席落入引用语义聚合、可选包装或擦除槽位时保持空/缺席；
//! 5. **标量到可选的收窄**：[`scalar_cast`] 为每一对标量类别穷举给出“存在无损嵌入”或
//!    “不存在定义良好的转换”；后者落入可选目标时解析为缺席，绝不截断或重释；
//! 6. **聚合跨表示**：同一份编码聚合解码进引用语义或值语义目标必须逐字段相等；
//!    嵌套的缺席可选值语义聚合与“全默认字段的聚合”保持可区分。
//!
//! ## 附加裁定（How）
//! - 非空且不相容的标量落入**非可选**标量目标时，与规则 3 同策略解析为目标零值；
//!   致命失败只保留给类别层面完全不相容的情形（聚合体落入标量等），见 [`CodecError::ShapeMismatch`]。
//! - 枚举目标接受任何可无损嵌入其底层类别的整数；未命中成员表的数值保留数值表示，符号名缺席。
//!
//! ## 风险提示（Trade-offs）
//! - 转换表是类别级而非值级：`I64 → I32` 即使当前数值能放下也不算定义良好，
//!   换取一张有限、可审计的格。

use alloc::string::String;

use crate::error::CodecError;
use crate::shape::{AggregateRepr, AggregateShape, EnumShape, ScalarKind, Shape};
use crate::value::{EnumValue, IntScalar, Record, Value};

/// 返回目标形状的零值/默认值。
///
/// # 契约说明
/// - 标量按类别取零（`false`、`0`、`0.0`、`'\0'`、空串）；枚举取底层数值 0 对应的成员；
/// - 值语义聚合逐字段取零；引用语义聚合、可选包装与擦除槽位的“零”即空/缺席。
pub fn zero_value(shape: &Shape) -> Value {
    match shape {
        Shape::Scalar(kind) => zero_scalar(*kind),
        Shape::Enum(enum_shape) => Value::Enum(EnumValue::from_raw(enum_shape, 0)),
        Shape::Optional(_) => Value::absent(),
        Shape::Aggregate(aggregate) => match aggregate.repr {
            AggregateRepr::Reference => Value::Null,
            AggregateRepr::Value => {
                let mut record = Record::new();
                for field in &aggregate.fields {
                    record.insert(field.name, zero_value(&field.shape));
                }
                Value::Record(record)
            }
        },
        Shape::Erased => Value::Null,
    }
}

/// 标量类别的零值。
pub fn zero_scalar(kind: ScalarKind) -> Value {
    match kind {
        ScalarKind::Bool => Value::Bool(false),
        ScalarKind::I8 => Value::I8(0),
        ScalarKind::I16 => Value::I16(0),
        ScalarKind::I32 => Value::I32(0),
        ScalarKind::I64 => Value::I64(0),
        ScalarKind::U8 => Value::U8(0),
        ScalarKind::U16 => Value::U16(0),
        ScalarKind::U32 => Value::U32(0),
        ScalarKind::U64 => Value::U64(0),
        ScalarKind::F32 => Value::F32(0.0),
        ScalarKind::F64 => Value::F64(0.0),
        ScalarKind::Char => Value::Char('\0'),
        ScalarKind::Str => Value::Str(String::new()),
    }
}

/// 枚举擦除表：底层整数类别到擦除数值类别的穷举映射（规则 2）。
pub fn erase_enum(repr: IntScalar) -> Value {
    match repr {
        IntScalar::I8(v) => Value::I8(v),
        IntScalar::I16(v) => Value::I16(v),
        IntScalar::I32(v) => Value::I32(v),
        IntScalar::I64(v) => Value::I64(v),
        IntScalar::U8(v) => Value::U8(v),
        IntScalar::U16(v) => Value::U16(v),
        IntScalar::U32(v) => Value::U32(v),
        IntScalar::U64(v) => Value::U64(v),
    }
}

/// 标量间的转换表（规则 5 的判定基础）。
///
/// # 契约说明（What）
/// - 返回 `Some` 当且仅当源类别到目标类别存在**无损嵌入**：同类别恒等、同号加宽、
///   无符号嵌入严格更宽的有符号、可精确表示的整数到浮点（`i8/u8/i16/u16 → f32`，
///   另有 `i32/u32 → f64`）、`f32 → f64`；
/// - `Char`、`Bool`、`Str` 只与自身相容——特别地，字符到**任何**数值宽度都不存在
///   定义良好的转换，每一对均为显式表项；
/// - 返回 `None` 表示“不存在定义良好的转换”，调用方据规则 5/附加裁定决定缺席或零值。
pub fn scalar_cast(value: &Value, target: ScalarKind) -> Option<Value> {
    match (value, target) {
        // 恒等表项。
        (Value::Bool(v), ScalarKind::Bool) => Some(Value::Bool(*v)),
        (Value::I8(v), ScalarKind::I8) => Some(Value::I8(*v)),
        (Value::I16(v), ScalarKind::I16) => Some(Value::I16(*v)),
        (Value::I32(v), ScalarKind::I32) => Some(Value::I32(*v)),
        (Value::I64(v), ScalarKind::I64) => Some(Value::I64(*v)),
        (Value::U8(v), ScalarKind::U8) => Some(Value::U8(*v)),
        (Value::U16(v), ScalarKind::U16) => Some(Value::U16(*v)),
        (Value::U32(v), ScalarKind::U32) => Some(Value::U32(*v)),
        (Value::U64(v), ScalarKind::U64) => Some(Value::U64(*v)),
        (Value::F32(v), ScalarKind::F32) => Some(Value::F32(*v)),
        (Value::F64(v), ScalarKind::F64) => Some(Value::F64(*v)),
        (Value::Char(v), ScalarKind::Char) => Some(Value::Char(*v)),
        (Value::Str(v), ScalarKind::Str) => Some(Value::Str(v.clone())),
        // 有符号加宽。
        (Value::I8(v), ScalarKind::I16) => Some(Value::I16(i16::from(*v))),
        (Value::I8(v), ScalarKind::I32) => Some(Value::I32(i32::from(*v))),
        (Value::I8(v), ScalarKind::I64) => Some(Value::I64(i64::from(*v))),
        (Value::I8(v), ScalarKind::F32) => Some(Value::F32(f32::from(*v))),
        (Value::I8(v), ScalarKind::F64) => Some(Value::F64(f64::from(*v))),
        (Value::I16(v), ScalarKind::I32) => Some(Value::I32(i32::from(*v))),
        (Value::I16(v), ScalarKind::I64) => Some(Value::I64(i64::from(*v))),
        (Value::I16(v), ScalarKind::F32) => Some(Value::F32(f32::from(*v))),
        (Value::I16(v), ScalarKind::F64) => Some(Value::F64(f64::from(*v))),
        (Value::I32(v), ScalarKind::I64) => Some(Value::I64(i64::from(*v))),
        (Value::I32(v), ScalarKind::F64) => Some(Value::F64(f64::from(*v))),
        // 无符号加宽与跨符号嵌入。
        (Value::U8(v), ScalarKind::U16) => Some(Value::U16(u16::from(*v))),
        (Value::U8(v), ScalarKind::U32) => Some(Value::U32(u32::from(*v))),
        (Value::U8(v), ScalarKind::U64) => Some(Value::U64(u64::from(*v))),
        (Value::U8(v), ScalarKind::I16) => Some(Value::I16(i16::from(*v))),
        (Value::U8(v), ScalarKind::I32) => Some(Value::I32(i32::from(*v))),
        (Value::U8(v), ScalarKind::I64) => Some(Value::I64(i64::from(*v))),
        (Value::U8(v), ScalarKind::F32) => Some(Value::F32(f32::from(*v))),
        (Value::U8(v), ScalarKind::F64) => Some(Value::F64(f64::from(*v))),
        (Value::U16(v), ScalarKind::U32) => Some(Value::U32(u32::from(*v))),
        (Value::U16(v), ScalarKind::U64) => Some(Value::U64(u64::from(*v))),
        (Value::U16(v), ScalarKind::I32) => Some(Value::I32(i32::from(*v))),
        (Value::U16(v), ScalarKind::I64) => Some(Value::I64(i64::from(*v))),
        (Value::U16(v), ScalarKind::F32) => Some(Value::F32(f32::from(*v))),
        (Value::U16(v), ScalarKind::F64) => Some(Value::F64(f64::from(*v))),
        (Value::U32(v), ScalarKind::U64) => Some(Value::U64(u64::from(*v))),
        (Value::U32(v), ScalarKind::I64) => Some(Value::I64(i64::from(*v))),
        (Value::U32(v), ScalarKind::F64) => Some(Value::F64(f64::from(*v))),
        // 浮点加宽。
        (Value::F32(v), ScalarKind::F64) => Some(Value::F64(f64::from(*v))),
        // 其余每一对均不存在定义良好的转换，含 Char/Bool/Str 到全部数值宽度。
        _ => None,
    }
}

/// 规则表入口：将解码记录的值解析到目标形状。
///
/// # 教案式说明
/// - **意图 (Why)**：带形状解码与测试断言共用同一套解析逻辑，避免语义漂移。
/// - **逻辑 (How)**：对 `(记录值, 目标形状)` 做穷举匹配，按模块头列出的优先级套用规则 1–6。
/// - **契约 (What)**：
///   - **输入**：`recorded` 为擦除表示下的记录值；`target` 为组合期构造的目标形状；
///   - **后置条件**：返回值的类别与目标形状一致；类别层面完全不相容时返回
///     [`CodecError::ShapeMismatch`]，绝不静默产出值。
pub fn coerce(recorded: &Value, target: &Shape) -> Result<Value, CodecError> {
    match target {
        Shape::Erased => Ok(recorded.clone()),
        Shape::Scalar(kind) => coerce_scalar(recorded, *kind),
        Shape::Enum(enum_shape) => coerce_enum(recorded, enum_shape),
        Shape::Optional(inner) => coerce_optional(recorded, inner),
        Shape::Aggregate(aggregate) => coerce_aggregate(recorded, aggregate),
    }
}

fn coerce_scalar(recorded: &Value, kind: ScalarKind) -> Result<Value, CodecError> {
    match recorded {
        value if value.is_null_like() => Ok(zero_scalar(kind)),
        Value::Optional(Some(inner)) => coerce_scalar(inner, kind),
        Value::Record(_) => Err(CodecError::ShapeMismatch {
            expected: "标量",
            found: recorded.kind(),
        }),
        Value::Enum(member) => {
            let erased = erase_enum(member.repr());
            Ok(scalar_cast(&erased, kind).unwrap_or_else(|| zero_scalar(kind)))
        }
        value => Ok(scalar_cast(value, kind).unwrap_or_else(|| zero_scalar(kind))),
    }
}

fn coerce_enum(recorded: &Value, enum_shape: &EnumShape) -> Result<Value, CodecError> {
    match recorded {
        value if value.is_null_like() => Ok(Value::Enum(EnumValue::from_raw(enum_shape, 0))),
        Value::Optional(Some(inner)) => coerce_enum(inner, enum_shape),
        Value::Record(_) => Err(CodecError::ShapeMismatch {
            expected: "枚举底层整数",
            found: recorded.kind(),
        }),
        Value::Enum(member) if member.type_name() == enum_shape.type_name => {
            Ok(Value::Enum(*member))
        }
        value => match cast_to_int(value, enum_shape) {
            Some(repr) => Ok(Value::Enum(EnumValue::new(enum_shape, repr))),
            None => Ok(Value::Enum(EnumValue::from_raw(enum_shape, 0))),
        },
    }
}

fn coerce_optional(recorded: &Value, inner: &Shape) -> Result<Value, CodecError> {
    if recorded.is_null_like() {
        return Ok(Value::absent());
    }
    let payload = match recorded {
        Value::Optional(Some(boxed)) => boxed.as_ref(),
        other => other,
    };
    match inner {
        // 规则 5：不存在定义良好的标量转换时解析为缺席，绝不截断。
        Shape::Scalar(kind) => match payload {
            Value::Record(_) => Err(CodecError::ShapeMismatch {
                expected: "标量",
                found: payload.kind(),
            }),
            Value::Enum(member) => Ok(wrap_optional(scalar_cast(
                &erase_enum(member.repr()),
                *kind,
            ))),
            value => Ok(wrap_optional(scalar_cast(value, *kind))),
        },
        Shape::Enum(enum_shape) => match payload {
            Value::Record(_) => Err(CodecError::ShapeMismatch {
                expected: "枚举底层整数",
                found: payload.kind(),
            }),
            Value::Enum(member) if member.type_name() == enum_shape.type_name => {
                Ok(Value::some(Value::Enum(*member)))
            }
            value => match cast_to_int(value, enum_shape) {
                Some(repr) => Ok(Value::some(Value::Enum(EnumValue::new(enum_shape, repr)))),
                None => Ok(Value::absent()),
            },
        },
        other => Ok(Value::some(coerce(payload, other)?)),
    }
}

fn coerce_aggregate(recorded: &Value, aggregate: &AggregateShape) -> Result<Value, CodecError> {
    match recorded {
        // 规则 3/4：空值按表示语义分流。
        value if value.is_null_like() => Ok(match aggregate.repr {
            AggregateRepr::Reference => Value::Null,
            AggregateRepr::Value => zero_value(&Shape::Aggregate(aggregate.clone())),
        }),
        Value::Optional(Some(inner)) => coerce_aggregate(inner, aggregate),
        // 规则 6：逐字段按声明顺序解析；记录中多余的字段被跳过，缺失字段按空值处理。
        Value::Record(record) => {
            let mut fields = Record::new();
            for field in &aggregate.fields {
                let coerced = match record.get(field.name) {
                    Some(value) => coerce(value, &field.shape)?,
                    None => coerce(&Value::Null, &field.shape)?,
                };
                fields.insert(field.name, coerced);
            }
            Ok(Value::Record(fields))
        }
        other => Err(CodecError::ShapeMismatch {
            expected: "聚合体记录",
            found: other.kind(),
        }),
    }
}

fn wrap_optional(cast: Option<Value>) -> Value {
    match cast {
        Some(value) => Value::some(value),
        None => Value::absent(),
    }
}

fn cast_to_int(value: &Value, enum_shape: &EnumShape) -> Option<IntScalar> {
    let cast = scalar_cast(value, ScalarKind::from(enum_shape.underlying))?;
    match cast {
        Value::I8(v) => Some(IntScalar::I8(v)),
        Value::I16(v) => Some(IntScalar::I16(v)),
        Value::I32(v) => Some(IntScalar::I32(v)),
        Value::I64(v) => Some(IntScalar::I64(v)),
        Value::U8(v) => Some(IntScalar::U8(v)),
        Value::U16(v) => Some(IntScalar::U16(v)),
        Value::U32(v) => Some(IntScalar::U32(v)),
        Value::U64(v) => Some(IntScalar::U64(v)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{EnumMember, FieldShape, IntKind};
    use alloc::string::ToString;
    use alloc::vec;

    static ACTION: EnumShape = EnumShape {
        type_name: "Action",
        underlying: IntKind::I32,
        members: &[
            EnumMember {
                name: "Start",
                repr: 0,
            },
            EnumMember {
                name: "Stop",
                repr: 1,
            },
        ],
    };

    const NUMERIC_KINDS: [ScalarKind; 10] = [
        ScalarKind::I8,
        ScalarKind::I16,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::U8,
        ScalarKind::U16,
        ScalarKind::U32,
        ScalarKind::U64,
        ScalarKind::F32,
        ScalarKind::F64,
    ];

    fn pair_shape(repr: AggregateRepr, value_shape: Shape) -> Shape {
        Shape::aggregate(
            repr,
            vec![
                FieldShape {
                    name: "root_value",
                    shape: Shape::Scalar(ScalarKind::I64),
                },
                FieldShape {
                    name: "value",
                    shape: value_shape,
                },
            ],
        )
    }

    #[test]
    fn identity_rule_keeps_scalars_unchanged() {
        let samples = [
            Value::Bool(true),
            Value::I8(-3),
            Value::U64(u64::MAX),
            Value::F64(2.5),
            Value::Char('中'),
            Value::Str("prism".to_string()),
        ];
        for sample in samples {
            let shape = match &sample {
                Value::Bool(_) => Shape::Scalar(ScalarKind::Bool),
                Value::I8(_) => Shape::Scalar(ScalarKind::I8),
                Value::U64(_) => Shape::Scalar(ScalarKind::U64),
                Value::F64(_) => Shape::Scalar(ScalarKind::F64),
                Value::Char(_) => Shape::Scalar(ScalarKind::Char),
                Value::Str(_) => Shape::Scalar(ScalarKind::Str),
                _ => unreachable!(),
            };
            assert_eq!(coerce(&sample, &shape).unwrap(), sample);
        }
    }

    #[test]
    fn erase_enum_covers_all_eight_kinds() {
        assert_eq!(erase_enum(IntScalar::I8(-1)), Value::I8(-1));
        assert_eq!(erase_enum(IntScalar::I16(-2)), Value::I16(-2));
        assert_eq!(erase_enum(IntScalar::I32(3)), Value::I32(3));
        assert_eq!(erase_enum(IntScalar::I64(-4)), Value::I64(-4));
        assert_eq!(erase_enum(IntScalar::U8(5)), Value::U8(5));
        assert_eq!(erase_enum(IntScalar::U16(6)), Value::U16(6));
        assert_eq!(erase_enum(IntScalar::U32(7)), Value::U32(7));
        assert_eq!(erase_enum(IntScalar::U64(8)), Value::U64(8));
    }

    #[test]
    fn char_has_no_cast_to_any_numeric_kind() {
        for kind in NUMERIC_KINDS {
            assert_eq!(scalar_cast(&Value::Char('A'), kind), None, "{kind:?}");
        }
    }

    #[test]
    fn bool_and_str_only_embed_into_themselves() {
        for kind in NUMERIC_KINDS {
            assert_eq!(scalar_cast(&Value::Bool(true), kind), None);
            assert_eq!(scalar_cast(&Value::Str("1".to_string()), kind), None);
        }
        assert_eq!(
            scalar_cast(&Value::I32(1), ScalarKind::Bool),
            None,
            "数值到布尔同样未定义"
        );
    }

    #[test]
    fn narrowing_casts_are_undefined() {
        assert_eq!(scalar_cast(&Value::I64(1), ScalarKind::I32), None);
        assert_eq!(scalar_cast(&Value::U64(1), ScalarKind::U32), None);
        assert_eq!(scalar_cast(&Value::F64(1.0), ScalarKind::F32), None);
        assert_eq!(scalar_cast(&Value::I8(-1), ScalarKind::U8), None);
        assert_eq!(scalar_cast(&Value::U32(1), ScalarKind::F32), None);
        assert_eq!(scalar_cast(&Value::I64(1), ScalarKind::F64), None);
    }

    #[test]
    fn widening_casts_preserve_value() {
        assert_eq!(
            scalar_cast(&Value::U8(200), ScalarKind::I16),
            Some(Value::I16(200))
        );
        assert_eq!(
            scalar_cast(&Value::I16(-300), ScalarKind::F32),
            Some(Value::F32(-300.0))
        );
        assert_eq!(
            scalar_cast(&Value::U32(u32::MAX), ScalarKind::F64),
            Some(Value::F64(f64::from(u32::MAX)))
        );
    }

    #[test]
    fn null_into_value_kinds_yields_zero() {
        assert_eq!(
            coerce(&Value::Null, &Shape::Scalar(ScalarKind::I32)).unwrap(),
            Value::I32(0)
        );
        assert_eq!(
            coerce(&Value::Null, &Shape::Scalar(ScalarKind::Str)).unwrap(),
            Value::Str(String::new())
        );
        let zero_action = coerce(&Value::Null, &Shape::Enum(&ACTION)).unwrap();
        match zero_action {
            Value::Enum(member) => assert_eq!(member.member(), Some("Start")),
            other => panic!("期望枚举零值，得到 {other:?}"),
        }
        let block = pair_shape(AggregateRepr::Value, Shape::Scalar(ScalarKind::I32));
        let defaults = coerce(&Value::Null, &block).unwrap();
        assert_eq!(defaults, zero_value(&block));
    }

    #[test]
    fn null_into_reference_and_optional_stays_null() {
        let record = pair_shape(AggregateRepr::Reference, Shape::Scalar(ScalarKind::I32));
        assert_eq!(coerce(&Value::Null, &record).unwrap(), Value::Null);
        assert_eq!(
            coerce(&Value::Null, &Shape::optional(Shape::Scalar(ScalarKind::I32))).unwrap(),
            Value::absent()
        );
        assert_eq!(coerce(&Value::Null, &Shape::Erased).unwrap(), Value::Null);
    }

    #[test]
    fn incompatible_scalar_into_optional_resolves_absent() {
        let target = Shape::optional(Shape::Scalar(ScalarKind::I32));
        assert_eq!(coerce(&Value::Char('A'), &target).unwrap(), Value::absent());
        assert_eq!(coerce(&Value::I64(9), &target).unwrap(), Value::absent());
        assert_eq!(
            coerce(&Value::U8(9), &target).unwrap(),
            Value::some(Value::I32(9))
        );
    }

    #[test]
    fn incompatible_scalar_into_bare_scalar_resolves_zero() {
        assert_eq!(
            coerce(&Value::Char('A'), &Shape::Scalar(ScalarKind::I32)).unwrap(),
            Value::I32(0)
        );
        assert_eq!(
            coerce(&Value::I64(9), &Shape::Scalar(ScalarKind::I8)).unwrap(),
            Value::I8(0)
        );
    }

    #[test]
    fn enum_round_trips_through_underlying_integer() {
        let recorded = Value::I32(1);
        match coerce(&recorded, &Shape::Enum(&ACTION)).unwrap() {
            Value::Enum(member) => {
                assert_eq!(member.member(), Some("Stop"));
                assert_eq!(member.repr(), IntScalar::I32(1));
            }
            other => panic!("期望枚举成员，得到 {other:?}"),
        }
        match coerce(&recorded, &Shape::optional(Shape::Enum(&ACTION))).unwrap() {
            Value::Optional(Some(inner)) => match *inner {
                Value::Enum(member) => assert_eq!(member.member(), Some("Stop")),
                other => panic!("期望枚举成员，得到 {other:?}"),
            },
            other => panic!("期望可选包装，得到 {other:?}"),
        }
    }

    #[test]
    fn enum_accepts_unregistered_repr() {
        match coerce(&Value::I32(42), &Shape::Enum(&ACTION)).unwrap() {
            Value::Enum(member) => {
                assert_eq!(member.member(), None);
                assert_eq!(member.repr().as_i128(), 42);
            }
            other => panic!("期望枚举成员，得到 {other:?}"),
        }
    }

    #[test]
    fn aggregate_decodes_into_either_representation() {
        let recorded = Value::Record(
            Record::new()
                .with_field("root_value", Value::I64(77))
                .with_field("value", Value::I32(5)),
        );
        let as_reference = coerce(
            &recorded,
            &pair_shape(AggregateRepr::Reference, Shape::Scalar(ScalarKind::I32)),
        )
        .unwrap();
        let as_value = coerce(
            &recorded,
            &pair_shape(AggregateRepr::Value, Shape::Scalar(ScalarKind::I32)),
        )
        .unwrap();
        assert_eq!(as_reference, as_value);
        assert_eq!(as_reference, recorded);
    }

    #[test]
    fn null_field_into_bare_scalar_field_yields_zero() {
        let recorded = Value::Record(
            Record::new()
                .with_field("root_value", Value::I64(77))
                .with_field("value", Value::Null),
        );
        let coerced = coerce(
            &recorded,
            &pair_shape(AggregateRepr::Reference, Shape::Scalar(ScalarKind::I32)),
        )
        .unwrap();
        match coerced {
            Value::Record(record) => {
                assert_eq!(record.get("root_value"), Some(&Value::I64(77)));
                assert_eq!(record.get("value"), Some(&Value::I32(0)));
            }
            other => panic!("期望记录，得到 {other:?}"),
        }
    }

    #[test]
    fn missing_field_behaves_like_null_field() {
        let recorded = Value::Record(Record::new().with_field("root_value", Value::I64(77)));
        let shape = pair_shape(
            AggregateRepr::Reference,
            Shape::optional(Shape::Scalar(ScalarKind::I32)),
        );
        match coerce(&recorded, &shape).unwrap() {
            Value::Record(record) => assert_eq!(record.get("value"), Some(&Value::absent())),
            other => panic!("期望记录，得到 {other:?}"),
        }
    }

    #[test]
    fn absent_optional_aggregate_stays_distinct_from_defaults() {
        let inner = pair_shape(AggregateRepr::Value, Shape::Scalar(ScalarKind::I32));
        let target = Shape::optional(inner.clone());
        assert_eq!(coerce(&Value::Null, &target).unwrap(), Value::absent());
        let defaults = zero_value(&inner);
        assert_ne!(Value::absent(), Value::some(defaults));
    }

    #[test]
    fn aggregate_into_scalar_is_fatal() {
        let recorded = Value::Record(Record::new().with_field("value", Value::I32(1)));
        let err = coerce(&recorded, &Shape::Scalar(ScalarKind::I32)).unwrap_err();
        assert!(matches!(err, CodecError::ShapeMismatch { .. }));
    }

    #[test]
    fn scalar_into_aggregate_is_fatal() {
        let shape = pair_shape(AggregateRepr::Value, Shape::Scalar(ScalarKind::I32));
        let err = coerce(&Value::I32(1), &shape).unwrap_err();
        assert!(matches!(err, CodecError::ShapeMismatch { .. }));
    }
}
