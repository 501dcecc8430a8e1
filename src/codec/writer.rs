use byteorder::{ByteOrder, LittleEndian};

/// Little-endian writer producing a legacy park image
#[derive(Default)]
pub struct BinaryWriter {
    data: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn write_zeros(&mut self, n: usize) {
        self.data.resize(self.data.len() + n, 0);
    }

    /// Zero-fill up to an absolute offset from `start`
    pub fn pad_to(&mut self, start: usize, size: usize) {
        let end = start + size;
        if self.data.len() < end {
            self.data.resize(end, 0);
        }
    }

    pub fn write_u8(&mut self, v: u8) {
        self.data.push(v);
    }

    pub fn write_i8(&mut self, v: i8) {
        self.write_u8(v as u8);
    }

    pub fn write_u16_le(&mut self, v: u16) {
        let mut buf = [0u8; 2];
        LittleEndian::write_u16(&mut buf, v);
        self.data.extend_from_slice(&buf);
    }

    pub fn write_i16_le(&mut self, v: i16) {
        self.write_u16_le(v as u16);
    }

    pub fn write_u32_le(&mut self, v: u32) {
        let mut buf = [0u8; 4];
        LittleEndian::write_u32(&mut buf, v);
        self.data.extend_from_slice(&buf);
    }

    pub fn write_i32_le(&mut self, v: i32) {
        self.write_u32_le(v as u32);
    }

    pub fn write_u16_slice(&mut self, values: &[u16]) {
        for &v in values {
            self.write_u16_le(v);
        }
    }

    pub fn write_i32_slice(&mut self, values: &[i32]) {
        for &v in values {
            self.write_i32_le(v);
        }
    }

    /// Write a string into a fixed-size, NUL-padded field, truncating if needed
    pub fn write_fixed_string(&mut self, s: &str, len: usize) {
        let bytes = s.as_bytes();
        let n = bytes.len().min(len.saturating_sub(1));
        self.data.extend_from_slice(&bytes[..n]);
        self.write_zeros(len - n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::BinaryReader;

    #[test]
    fn test_write_primitives() {
        let mut writer = BinaryWriter::new();
        writer.write_u8(0x01);
        writer.write_u16_le(0x0302);
        writer.write_u32_le(0x07060504);
        assert_eq!(writer.as_slice(), &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
    }

    #[test]
    fn test_fixed_string_is_terminated() {
        let mut writer = BinaryWriter::new();
        writer.write_fixed_string("Paradise Pier", 8);
        assert_eq!(writer.len(), 8);
        assert_eq!(writer.as_slice()[7], 0);

        let data = writer.into_vec();
        let mut reader = BinaryReader::new(&data);
        assert_eq!(reader.read_fixed_string(8).unwrap(), "Paradis");
    }

    #[test]
    fn test_pad_to() {
        let mut writer = BinaryWriter::new();
        writer.write_u8(1);
        writer.pad_to(0, 16);
        assert_eq!(writer.len(), 16);
        writer.pad_to(0, 4);
        assert_eq!(writer.len(), 16);
    }
}
