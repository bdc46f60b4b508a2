#![deny(unsafe_code)]
#![doc = "prism-codec-json: prism 值契约的文本基线编解码。"]
#![doc = ""]
#![doc = "仅作为正确性与吞吐对照存在，不属于被验证的契约："]
#![doc = "JSON 不保留数值宽度（整数一律以 `i64`/`u64` 浮出，浮点以 `f64` 浮出），"]
#![doc = "字符与字符串在文本层合流。需要契约语义时请使用 `prism-codec-bin`。"]

use async_trait::async_trait;
use prism_core::{
    ByteTransport, CodecError, EncodeOptions, ObjectDecoder, ObjectEncoder, Record, Shape, Value,
    coerce, erase_enum,
};
use serde_json::{Map, Number};

/// 文本基线编解码器。
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl JsonCodec {
    /// 构造基线实例。
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ObjectEncoder for JsonCodec {
    async fn encode(
        &self,
        value: &Value,
        sink: &mut dyn ByteTransport,
        options: &EncodeOptions,
    ) -> Result<(), CodecError> {
        let node = to_json(value, options)?;
        let bytes = serde_json::to_vec(&node)
            .map_err(|_| CodecError::Unsupported("JSON 文本序列化失败"))?;
        sink.write_all(&bytes)
    }
}

#[async_trait]
impl ObjectDecoder for JsonCodec {
    async fn decode_erased(&self, source: &mut dyn ByteTransport) -> Result<Value, CodecError> {
        let mut bytes = vec![0u8; source.remaining()];
        source.read_exact(&mut bytes)?;
        let node: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|_| CodecError::InvalidUtf8)?;
        from_json(&node)
    }

    async fn decode_shaped(
        &self,
        source: &mut dyn ByteTransport,
        shape: &Shape,
    ) -> Result<Value, CodecError> {
        let recorded = self.decode_erased(source).await?;
        coerce(&recorded, shape)
    }
}

fn to_json(value: &Value, options: &EncodeOptions) -> Result<serde_json::Value, CodecError> {
    Ok(match value {
        Value::Null | Value::Optional(None) => serde_json::Value::Null,
        Value::Optional(Some(inner)) => to_json(inner, options)?,
        Value::Bool(v) => serde_json::Value::Bool(*v),
        Value::I8(v) => serde_json::Value::Number(Number::from(*v)),
        Value::I16(v) => serde_json::Value::Number(Number::from(*v)),
        Value::I32(v) => serde_json::Value::Number(Number::from(*v)),
        Value::I64(v) => serde_json::Value::Number(Number::from(*v)),
        Value::U8(v) => serde_json::Value::Number(Number::from(*v)),
        Value::U16(v) => serde_json::Value::Number(Number::from(*v)),
        Value::U32(v) => serde_json::Value::Number(Number::from(*v)),
        Value::U64(v) => serde_json::Value::Number(Number::from(*v)),
        Value::F32(v) => float_node(f64::from(*v)),
        Value::F64(v) => float_node(*v),
        Value::Char(v) => serde_json::Value::String(v.to_string()),
        Value::Str(v) => serde_json::Value::String(v.clone()),
        Value::Enum(member) => to_json(&erase_enum(member.repr()), options)?,
        Value::Record(record) => {
            let mut map = Map::new();
            for (name, field) in record.fields() {
                if options.omit_null_fields && field.is_null_like() {
                    continue;
                }
                map.insert(name.to_string(), to_json(field, options)?);
            }
            serde_json::Value::Object(map)
        }
    })
}

// 非有限浮点在 JSON 中没有表示，与 serde_json 的序列化约定一致地落为 null。
fn float_node(value: f64) -> serde_json::Value {
    match Number::from_f64(value) {
        Some(number) => serde_json::Value::Number(number),
        None => serde_json::Value::Null,
    }
}

fn from_json(node: &serde_json::Value) -> Result<Value, CodecError> {
    Ok(match node {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(v) => Value::Bool(*v),
        serde_json::Value::Number(number) => {
            if let Some(v) = number.as_i64() {
                Value::I64(v)
            } else if let Some(v) = number.as_u64() {
                Value::U64(v)
            } else if let Some(v) = number.as_f64() {
                Value::F64(v)
            } else {
                return Err(CodecError::Unsupported("JSON 数值超出模型表示范围"));
            }
        }
        serde_json::Value::String(v) => Value::Str(v.clone()),
        serde_json::Value::Object(map) => {
            let mut record = Record::new();
            for (name, value) in map {
                record.insert(name.clone(), from_json(value)?);
            }
            Value::Record(record)
        }
        serde_json::Value::Array(_) => {
            return Err(CodecError::Unsupported("值模型之外的 JSON 数组节点"));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use prism_core::MemTransport;

    #[test]
    fn baseline_round_trip_widens_numerics() {
        let codec = JsonCodec::new();
        let source = Value::Record(
            Record::new()
                .with_field("root_value", Value::I64(1_700_000_000_000))
                .with_field("value", Value::U16(7)),
        );
        let mut transport = MemTransport::new();
        block_on(codec.encode(&source, &mut transport, &EncodeOptions::new())).unwrap();
        transport.rewind();
        let decoded = block_on(codec.decode_erased(&mut transport)).unwrap();
        match decoded {
            Value::Record(record) => {
                assert_eq!(record.get("root_value"), Some(&Value::I64(1_700_000_000_000)));
                // 基线不保留宽度：u16 以 i64 浮出。
                assert_eq!(record.get("value"), Some(&Value::I64(7)));
            }
            other => panic!("期望记录，得到 {other:?}"),
        }
    }
}
