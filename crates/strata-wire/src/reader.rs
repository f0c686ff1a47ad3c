//! Sequential read cursor.

use crate::error::{WireError, WireResult};

/// Reads values back out of a wire buffer in schema order.
///
/// Strings and byte runs borrow from the underlying buffer; nothing is
/// copied until a caller asks for an owned value.
#[derive(Debug)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.data.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    fn take(&mut self, n: usize) -> WireResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(WireError::UnexpectedEnd {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_bool(&mut self) -> WireResult<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(WireError::InvalidBool(other)),
        }
    }

    pub fn read_u8(&mut self) -> WireResult<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u32(&mut self) -> WireResult<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_f32(&mut self) -> WireResult<f32> {
        let b = self.take(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_f64(&mut self) -> WireResult<f64> {
        let b = self.take(8)?;
        Ok(f64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Read an unsigned variable-length integer.
    pub fn read_varint(&mut self) -> WireResult<u64> {
        let mut value: u64 = 0;
        let mut shift = 0u32;
        loop {
            let byte = self.read_u8()?;
            value |= u64::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
            if shift >= 64 {
                return Err(WireError::VarintOverflow);
            }
        }
    }

    /// Read a non-negative element count.
    pub fn read_count(&mut self) -> WireResult<usize> {
        let value = self.read_varint()?;
        usize::try_from(value).map_err(|_| WireError::LengthOverflow {
            length: value,
            remaining: self.remaining(),
        })
    }

    pub fn read_i32(&mut self) -> WireResult<i32> {
        let raw = self.read_varint()?;
        let z = u32::try_from(raw).map_err(|_| {
            WireError::invalid_value(format!("zigzag value {raw} does not fit in 32 bits"))
        })?;
        Ok(unzigzag32(z))
    }

    pub fn read_i64(&mut self) -> WireResult<i64> {
        Ok(unzigzag64(self.read_varint()?))
    }

    /// Read a length-prefixed UTF-8 string, borrowing from the buffer.
    pub fn read_str(&mut self) -> WireResult<&'a str> {
        let bytes = self.read_bytes()?;
        Ok(std::str::from_utf8(bytes)?)
    }

    /// Read a length-prefixed byte run.
    pub fn read_bytes(&mut self) -> WireResult<&'a [u8]> {
        let length = self.read_varint()?;
        // Validate before the cursor moves so the error carries the prefix.
        if length > self.remaining() as u64 {
            return Err(WireError::LengthOverflow {
                length,
                remaining: self.remaining(),
            });
        }
        self.take(length as usize)
    }

    /// Read exactly `n` raw bytes with no length prefix.
    pub fn read_raw(&mut self, n: usize) -> WireResult<&'a [u8]> {
        self.take(n)
    }
}

fn unzigzag32(z: u32) -> i32 {
    ((z >> 1) as i32) ^ -((z & 1) as i32)
}

fn unzigzag64(z: u64) -> i64 {
    ((z >> 1) as i64) ^ -((z & 1) as i64)
}
