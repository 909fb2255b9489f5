use byteorder::{ByteOrder, LE};

/// Sequential little-endian reader over a table image.
pub struct ByteReaderLE<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReaderLE<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn read_u8(&mut self) -> u8 {
        let res = self.bytes[self.pos];
        self.pos += 1;
        res
    }

    pub fn read_u16(&mut self) -> u16 {
        let res = LE::read_u16(&self.bytes[self.pos..]);
        self.pos += 2;
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_sequence() {
        let reader = &mut ByteReaderLE::new(&[7, 9, 0x34, 0x12]);
        assert_eq!(reader.read_u8(), 7);
        assert_eq!(reader.read_u8(), 9);
        assert_eq!(reader.read_u16(), 0x1234);
        assert_eq!(reader.pos(), 4);
    }
}
