use core::fmt;
use core::ops::{Index, IndexMut};

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Color32(pub [u8; 4]);

impl Color32 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    pub fn to_rgba_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }
}

impl fmt::Debug for Color32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:08X}", self.to_rgba_u32())
    }
}

impl Index<usize> for Color32 {
    type Output = u8;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for Color32 {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

/// Packs the RGB channels into a 5:5:5 value, red in the top bits.
///
/// With `scaled` the channels are treated as 8-bit and rounded down to 5 bits,
/// otherwise they are taken as 5-bit values and clamped to 31.
pub fn pack_color5(color: Color32, scaled: bool) -> u16 {
    let mut rgb = [color[0] as u32, color[1] as u32, color[2] as u32];
    for c in rgb.iter_mut() {
        if scaled {
            *c = (*c * 31 + 127) / 255;
        }
        *c = (*c).min(31);
    }
    (rgb[2] | rgb[1] << 5 | rgb[0] << 10) as u16
}

/// Inverse of [`pack_color5`]. With `scaled` the channels are extended to
/// 8 bits by bit replication. Alpha is always 255.
pub fn unpack_color5(packed: u16, scaled: bool) -> Color32 {
    fn extend_5_to_8(x: u8) -> u8 {
        (x << 3) | (x >> 2)
    }
    let mut color = Color32::new(
        ((packed >> 10) & 31) as u8,
        ((packed >> 5) & 31) as u8,
        (packed & 31) as u8,
        255,
    );
    if scaled {
        for c in 0..3 {
            color[c] = extend_5_to_8(color[c]);
        }
    }
    color
}
