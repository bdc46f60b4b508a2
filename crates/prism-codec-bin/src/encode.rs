//! 值到线上格式的编码。
//!
//! ## 契约说明（What）
//! - 编码只读消费值，不修改也不缓存；一次调用恰好写出一个完整值。
//! - 枚举写出其底层整数类别的标签与数值，符号身份有意不落盘（擦除由格式承担）；
//! - `Optional(Some(v))` 写出 `v` 本身，`Optional(None)` 与 `Null` 写出空标签；
//! - 开启 `omit_null_fields` 时，记录中等同于空的字段（`Null` 或缺席的可选包装）
//!   直接不写出，字段数相应减少。

use prism_core::{ByteTransport, CodecError, EncodeOptions, IntScalar, Value};

use crate::wire;

pub(crate) fn encode_value(
    value: &Value,
    sink: &mut dyn ByteTransport,
    options: &EncodeOptions,
) -> Result<(), CodecError> {
    match value {
        Value::Null | Value::Optional(None) => wire::write_u8(sink, wire::TAG_NULL),
        Value::Optional(Some(inner)) => encode_value(inner, sink, options),
        Value::Bool(v) => {
            wire::write_u8(sink, wire::TAG_BOOL)?;
            wire::write_u8(sink, u8::from(*v))
        }
        Value::I8(v) => {
            wire::write_u8(sink, wire::TAG_I8)?;
            wire::write_u8(sink, *v as u8)
        }
        Value::I16(v) => {
            wire::write_u8(sink, wire::TAG_I16)?;
            wire::write_u16(sink, *v as u16)
        }
        Value::I32(v) => {
            wire::write_u8(sink, wire::TAG_I32)?;
            wire::write_u32(sink, *v as u32)
        }
        Value::I64(v) => {
            wire::write_u8(sink, wire::TAG_I64)?;
            wire::write_u64(sink, *v as u64)
        }
        Value::U8(v) => {
            wire::write_u8(sink, wire::TAG_U8)?;
            wire::write_u8(sink, *v)
        }
        Value::U16(v) => {
            wire::write_u8(sink, wire::TAG_U16)?;
            wire::write_u16(sink, *v)
        }
        Value::U32(v) => {
            wire::write_u8(sink, wire::TAG_U32)?;
            wire::write_u32(sink, *v)
        }
        Value::U64(v) => {
            wire::write_u8(sink, wire::TAG_U64)?;
            wire::write_u64(sink, *v)
        }
        Value::F32(v) => {
            wire::write_u8(sink, wire::TAG_F32)?;
            wire::write_u32(sink, v.to_bits())
        }
        Value::F64(v) => {
            wire::write_u8(sink, wire::TAG_F64)?;
            wire::write_u64(sink, v.to_bits())
        }
        Value::Char(v) => {
            wire::write_u8(sink, wire::TAG_CHAR)?;
            wire::write_u32(sink, *v as u32)
        }
        Value::Str(v) => {
            wire::write_u8(sink, wire::TAG_STR)?;
            wire::write_str(sink, v)
        }
        Value::Enum(member) => encode_int(member.repr(), sink),
        Value::Record(record) => {
            wire::write_u8(sink, wire::TAG_RECORD)?;
            let retained = |value: &Value| !(options.omit_null_fields && value.is_null_like());
            let count = record
                .fields()
                .iter()
                .filter(|(_, value)| retained(value))
                .count();
            wire::write_u32(sink, count as u32)?;
            for (name, value) in record.fields() {
                if retained(value) {
                    wire::write_str(sink, name)?;
                    encode_value(value, sink, options)?;
                }
            }
            Ok(())
        }
    }
}

fn encode_int(repr: IntScalar, sink: &mut dyn ByteTransport) -> Result<(), CodecError> {
    match repr {
        IntScalar::I8(v) => {
            wire::write_u8(sink, wire::TAG_I8)?;
            wire::write_u8(sink, v as u8)
        }
        IntScalar::I16(v) => {
            wire::write_u8(sink, wire::TAG_I16)?;
            wire::write_u16(sink, v as u16)
        }
        IntScalar::I32(v) => {
            wire::write_u8(sink, wire::TAG_I32)?;
            wire::write_u32(sink, v as u32)
        }
        IntScalar::I64(v) => {
            wire::write_u8(sink, wire::TAG_I64)?;
            wire::write_u64(sink, v as u64)
        }
        IntScalar::U8(v) => {
            wire::write_u8(sink, wire::TAG_U8)?;
            wire::write_u8(sink, v)
        }
        IntScalar::U16(v) => {
            wire::write_u8(sink, wire::TAG_U16)?;
            wire::write_u16(sink, v)
        }
        IntScalar::U32(v) => {
            wire::write_u8(sink, wire::TAG_U32)?;
            wire::write_u32(sink, v)
        }
        IntScalar::U64(v) => {
            wire::write_u8(sink, wire::TAG_U64)?;
            wire::write_u64(sink, v)
        }
    }
}
