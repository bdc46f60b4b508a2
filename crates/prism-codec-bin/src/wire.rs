//! 线上格式的标签与原语读写。
//!
//! ## 模块目的（Why）
//! - 集中管理标签字节与小端原语的读写，编码/解码两侧共用，避免常量漂移。
//!
//! ## 契约说明（What）
//! - 所有多字节整数一律小端；字符串与字段名以 `u32` 长度前缀加 UTF-8 字节写出；
//!   字符以 `u32` 标量值写出。
//! - 读取端在任何长度不足时返回 [`CodecError::UnexpectedEof`]，绝不读出部分值。

use alloc::string::String;
use alloc::vec;

use prism_core::{ByteTransport, CodecError};

/// 空值/缺席。
pub(crate) const TAG_NULL: u8 = 0x00;
/// 布尔，载荷 1 字节（0/1）。
pub(crate) const TAG_BOOL: u8 = 0x01;
/// 8 位有符号整数。
pub(crate) const TAG_I8: u8 = 0x02;
/// 16 位有符号整数。
pub(crate) const TAG_I16: u8 = 0x03;
/// 32 位有符号整数。
pub(crate) const TAG_I32: u8 = 0x04;
/// 64 位有符号整数。
pub(crate) const TAG_I64: u8 = 0x05;
/// 8 位无符号整数。
pub(crate) const TAG_U8: u8 = 0x06;
/// 16 位无符号整数。
pub(crate) const TAG_U16: u8 = 0x07;
/// 32 位无符号整数。
pub(crate) const TAG_U32: u8 = 0x08;
/// 64 位无符号整数。
pub(crate) const TAG_U64: u8 = 0x09;
/// 32 位浮点数。
pub(crate) const TAG_F32: u8 = 0x0A;
/// 64 位浮点数。
pub(crate) const TAG_F64: u8 = 0x0B;
/// Unicode 标量值，载荷 `u32`。
pub(crate) const TAG_CHAR: u8 = 0x0C;
/// UTF-8 字符串，载荷 `u32` 长度 + 字节。
pub(crate) const TAG_STR: u8 = 0x0D;
/// 记录，载荷 `u32` 字段数 + (字段名, 值) 序列。
pub(crate) const TAG_RECORD: u8 = 0x0E;

pub(crate) fn write_u8(sink: &mut dyn ByteTransport, value: u8) -> Result<(), CodecError> {
    sink.write_all(&[value])
}

pub(crate) fn write_u16(sink: &mut dyn ByteTransport, value: u16) -> Result<(), CodecError> {
    sink.write_all(&value.to_le_bytes())
}

pub(crate) fn write_u32(sink: &mut dyn ByteTransport, value: u32) -> Result<(), CodecError> {
    sink.write_all(&value.to_le_bytes())
}

pub(crate) fn write_u64(sink: &mut dyn ByteTransport, value: u64) -> Result<(), CodecError> {
    sink.write_all(&value.to_le_bytes())
}

pub(crate) fn write_str(sink: &mut dyn ByteTransport, value: &str) -> Result<(), CodecError> {
    write_u32(sink, value.len() as u32)?;
    sink.write_all(value.as_bytes())
}

pub(crate) fn read_u8(source: &mut dyn ByteTransport) -> Result<u8, CodecError> {
    let mut buf = [0u8; 1];
    source.read_exact(&mut buf)?;
    Ok(buf[0])
}

pub(crate) fn read_u16(source: &mut dyn ByteTransport) -> Result<u16, CodecError> {
    let mut buf = [0u8; 2];
    source.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

pub(crate) fn read_u32(source: &mut dyn ByteTransport) -> Result<u32, CodecError> {
    let mut buf = [0u8; 4];
    source.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

pub(crate) fn read_u64(source: &mut dyn ByteTransport) -> Result<u64, CodecError> {
    let mut buf = [0u8; 8];
    source.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

pub(crate) fn read_str(source: &mut dyn ByteTransport) -> Result<String, CodecError> {
    let len = read_u32(source)? as usize;
    let mut buf = vec![0u8; len];
    source.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|_| CodecError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::MemTransport;

    #[test]
    fn primitives_round_trip_little_endian() {
        let mut transport = MemTransport::new();
        write_u16(&mut transport, 0x1234).unwrap();
        write_u64(&mut transport, u64::MAX - 1).unwrap();
        write_str(&mut transport, "编码").unwrap();
        assert_eq!(&transport.bytes()[..2], &[0x34, 0x12]);
        transport.rewind();
        assert_eq!(read_u16(&mut transport).unwrap(), 0x1234);
        assert_eq!(read_u64(&mut transport).unwrap(), u64::MAX - 1);
        assert_eq!(read_str(&mut transport).unwrap(), "编码");
    }

    #[test]
    fn truncated_string_reports_eof() {
        let mut transport = MemTransport::new();
        write_u32(&mut transport, 16).unwrap();
        transport.write_all(b"abc").unwrap();
        transport.rewind();
        assert_eq!(read_str(&mut transport), Err(CodecError::UnexpectedEof));
    }
}
