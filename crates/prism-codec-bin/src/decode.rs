//! 线上格式到擦除值的解码。
//!
//! ## 契约说明（What）
//! - 解码产出全新的值，不与编码侧共享任何状态；标签决定产出的最窄值类别，
//!   数值宽度与“字符 vs 数值”的区分随标签保留。
//! - 任何长度不足、未知标签、非法布尔/字符/UTF-8 载荷都按 [`CodecError`] 冒泡，
//!   绝不产出部分值。

use prism_core::{ByteTransport, CodecError, Record, Value};

use crate::wire;

pub(crate) fn decode_value(source: &mut dyn ByteTransport) -> Result<Value, CodecError> {
    let tag = wire::read_u8(source)?;
    match tag {
        wire::TAG_NULL => Ok(Value::Null),
        wire::TAG_BOOL => match wire::read_u8(source)? {
            0 => Ok(Value::Bool(false)),
            1 => Ok(Value::Bool(true)),
            other => Err(CodecError::InvalidBool(other)),
        },
        wire::TAG_I8 => Ok(Value::I8(wire::read_u8(source)? as i8)),
        wire::TAG_I16 => Ok(Value::I16(wire::read_u16(source)? as i16)),
        wire::TAG_I32 => Ok(Value::I32(wire::read_u32(source)? as i32)),
        wire::TAG_I64 => Ok(Value::I64(wire::read_u64(source)? as i64)),
        wire::TAG_U8 => Ok(Value::U8(wire::read_u8(source)?)),
        wire::TAG_U16 => Ok(Value::U16(wire::read_u16(source)?)),
        wire::TAG_U32 => Ok(Value::U32(wire::read_u32(source)?)),
        wire::TAG_U64 => Ok(Value::U64(wire::read_u64(source)?)),
        wire::TAG_F32 => Ok(Value::F32(f32::from_bits(wire::read_u32(source)?))),
        wire::TAG_F64 => Ok(Value::F64(f64::from_bits(wire::read_u64(source)?))),
        wire::TAG_CHAR => {
            let scalar = wire::read_u32(source)?;
            char::from_u32(scalar)
                .map(Value::Char)
                .ok_or(CodecError::InvalidChar(scalar))
        }
        wire::TAG_STR => Ok(Value::Str(wire::read_str(source)?)),
        wire::TAG_RECORD => {
            let count = wire::read_u32(source)? as usize;
            let mut record = Record::new();
            for _ in 0..count {
                let name = wire::read_str(source)?;
                let value = decode_value(source)?;
                record.insert(name, value);
            }
            Ok(Value::Record(record))
        }
        other => Err(CodecError::UnknownTag(other)),
    }
}
