//! 具体 Rust 类型与值模型之间的组合期转换。
//!
//! ## 模块目的（Why）
//! - 解码目标的静态类型通过 [`Shaped`] 在组合期给出结构描述，配合
//!   [`FromValue`]/[`IntoValue`] 完成值模型与具体类型之间的落地与提升；
//!   运行期不做任何类型发现。
//!
//! ## 契约说明（What）
//! - [`FromValue::from_value`] 的入参是已按 [`crate::coerce`] 解析到目标形状的值，
//!   因此只须匹配精确变体；类别不符说明上游实现违约，按
//!   [`CodecError::ShapeMismatch`] 冒泡。
//! - `Option<T>` 即可选包装目标：`Optional(None)`/`Null` 落为 `None`。

use alloc::string::String;

use crate::error::CodecError;
use crate::shape::{ScalarKind, Shape};
use crate::value::Value;

/// 在组合期给出目标类型的形状描述。
pub trait Shaped {
    /// 返回该类型的结构描述符。
    fn shape() -> Shape;
}

/// 将具体类型提升为值模型。
pub trait IntoValue {
    /// 按值消费自身，产出带标签的值。
    fn into_value(self) -> Value;
}

/// 将已解析到目标形状的值落为具体类型。
pub trait FromValue: Sized {
    /// 匹配精确变体并构造自身。
    fn from_value(value: Value) -> Result<Self, CodecError>;
}

macro_rules! scalar_conversions {
    ($($ty:ty => $kind:ident, $variant:ident, $expected:literal;)*) => {
        $(
            impl Shaped for $ty {
                fn shape() -> Shape {
                    Shape::Scalar(ScalarKind::$kind)
                }
            }

            impl IntoValue for $ty {
                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, CodecError> {
                    match value {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(CodecError::ShapeMismatch {
                            expected: $expected,
                            found: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

scalar_conversions! {
    bool => Bool, Bool, "布尔";
    i8 => I8, I8, "8 位有符号整数";
    i16 => I16, I16, "16 位有符号整数";
    i32 => I32, I32, "32 位有符号整数";
    i64 => I64, I64, "64 位有符号整数";
    u8 => U8, U8, "8 位无符号整数";
    u16 => U16, U16, "16 位无符号整数";
    u32 => U32, U32, "32 位无符号整数";
    u64 => U64, U64, "64 位无符号整数";
    f32 => F32, F32, "32 位浮点数";
    f64 => F64, F64, "64 位浮点数";
    char => Char, Char, "Unicode 标量值";
    String => Str, Str, "UTF-8 字符串";
}

impl<T> Shaped for Option<T>
where
    T: Shaped,
{
    fn shape() -> Shape {
        Shape::optional(T::shape())
    }
}

impl<T> IntoValue for Option<T>
where
    T: IntoValue,
{
    fn into_value(self) -> Value {
        match self {
            Some(inner) => Value::some(inner.into_value()),
            None => Value::absent(),
        }
    }
}

impl<T> FromValue for Option<T>
where
    T: FromValue,
{
    fn from_value(value: Value) -> Result<Self, CodecError> {
        match value {
            Value::Optional(Some(inner)) => T::from_value(*inner).map(Some),
            Value::Optional(None) | Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// 将值提升进擦除槽位：`Value` 自身即目标。
impl Shaped for Value {
    fn shape() -> Shape {
        Shape::Erased
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, CodecError> {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn scalar_round_trips_through_value_model() {
        assert_eq!(i32::from_value(42i32.into_value()).unwrap(), 42);
        assert_eq!(
            String::from_value("prism".to_string().into_value()).unwrap(),
            "prism"
        );
        assert_eq!(char::from_value('A'.into_value()).unwrap(), 'A');
    }

    #[test]
    fn option_maps_to_optional_wrapper() {
        assert_eq!(Some(7u16).into_value(), Value::some(Value::U16(7)));
        assert_eq!(None::<u16>.into_value(), Value::absent());
        assert_eq!(Option::<u16>::from_value(Value::absent()).unwrap(), None);
        assert_eq!(
            Option::<u16>::from_value(Value::some(Value::U16(7))).unwrap(),
            Some(7)
        );
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let err = i32::from_value(Value::Bool(true)).unwrap_err();
        assert!(matches!(err, CodecError::ShapeMismatch { .. }));
    }
}
