//! 单次往返私有的字节传输。
//!
//! ## 模块目的（Why）
//! - 编码写入一次、解码读取两次（先具型后擦除）共享同一份字节；读写位置必须能在
//!   阶段之间显式复位，且两次解码互不观察、互不改写对方状态。
//!
//! ## 契约说明（What）
//! - 传输实例是**单次往返内**唯一的共享可变资源；并发往返各自持有私有实例，
//!   并发安全由构造保证而非锁。
//! - 作用域化资源纪律：执行器按“获取 → 写入一次 → 复位 → 读取”的顺序使用，
//!   实例的释放由所有权承担，即使解码失败也会随作用域结束回收。
//!
//! ## 实现策略（How）
//! - [`MemTransport`] 以 `Vec<u8>` 加读指针实现；[`rewind`](ByteTransport::rewind)
//!   只复位读指针，已写入的字节保持不变。

use alloc::vec::Vec;

use crate::error::CodecError;

/// 往返内部使用的字节传输契约。
pub trait ByteTransport: Send {
    /// 在写入端追加全部字节。
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), CodecError>;

    /// 从读指针处读满 `dst`，长度不足时返回 [`CodecError::UnexpectedEof`]。
    fn read_exact(&mut self, dst: &mut [u8]) -> Result<(), CodecError>;

    /// 将读指针复位到起始位置。
    fn rewind(&mut self);

    /// 当前读指针位置。
    fn position(&self) -> usize;

    /// 剩余可读字节数。
    fn remaining(&self) -> usize;

    /// 已写入的总字节数。
    fn written(&self) -> usize;
}

/// 基于内存缓冲的传输实现，每次往返构造一个新实例。
#[derive(Debug, Default)]
pub struct MemTransport {
    buffer: Vec<u8>,
    position: usize,
}

impl MemTransport {
    /// 构造空传输。
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定容量预留写入空间。
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            position: 0,
        }
    }

    /// 以只读切片观察全部已写字节，供断言与基准使用。
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }
}

impl ByteTransport for MemTransport {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }

    fn read_exact(&mut self, dst: &mut [u8]) -> Result<(), CodecError> {
        let end = self.position.checked_add(dst.len()).ok_or(CodecError::UnexpectedEof)?;
        if end > self.buffer.len() {
            return Err(CodecError::UnexpectedEof);
        }
        dst.copy_from_slice(&self.buffer[self.position..end]);
        self.position = end;
        Ok(())
    }

    fn rewind(&mut self) {
        self.position = 0;
    }

    fn position(&self) -> usize {
        self.position
    }

    fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    fn written(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewind_resets_read_position_only() {
        let mut transport = MemTransport::new();
        transport.write_all(&[1, 2, 3]).unwrap();
        let mut first = [0u8; 2];
        transport.read_exact(&mut first).unwrap();
        assert_eq!(first, [1, 2]);
        transport.rewind();
        assert_eq!(transport.position(), 0);
        assert_eq!(transport.written(), 3);
        let mut again = [0u8; 3];
        transport.read_exact(&mut again).unwrap();
        assert_eq!(again, [1, 2, 3]);
    }

    #[test]
    fn short_read_reports_eof() {
        let mut transport = MemTransport::new();
        transport.write_all(&[1]).unwrap();
        let mut dst = [0u8; 2];
        assert_eq!(
            transport.read_exact(&mut dst),
            Err(CodecError::UnexpectedEof)
        );
    }
}
