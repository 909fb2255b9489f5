use crate::color::{unpack_color5, Color32};

pub const NUM_INTENSITIES: usize = 8;

/// Computes the four colors of an ETC1 diff mode subblock with the given
/// 5:5:5 base color and intensity table.
///
/// The returned colors are ordered by modifier, darkest first, which is also
/// the order of the ETC1 selector slots used by the conversion tables.
pub fn get_diff_subblock_colors(packed_color5: u16, inten: usize) -> [Color32; 4] {
    assert!(inten < NUM_INTENSITIES);
    apply_mod_to_base_color(unpack_color5(packed_color5, true), inten)
}

fn apply_mod_to_base_color(base: Color32, inten: usize) -> [Color32; 4] {
    let mut colors = [Color32::default(); 4];
    for (color, &modifier) in colors.iter_mut().zip(ETC1_MODIFIERS[inten].iter()) {
        *color = Color32::new(
            (base[0] as i16 + modifier).max(0).min(255) as u8,
            (base[1] as i16 + modifier).max(0).min(255) as u8,
            (base[2] as i16 + modifier).max(0).min(255) as u8,
            255,
        );
    }
    colors
}

#[rustfmt::skip]
pub static ETC1_MODIFIERS: [[i16; 4]; NUM_INTENSITIES] = [
    [   -8,  -2,  2,   8 ],
    [  -17,  -5,  5,  17 ],
    [  -29,  -9,  9,  29 ],
    [  -42, -13, 13,  42 ],
    [  -60, -18, 18,  60 ],
    [  -80, -24, 24,  80 ],
    [ -106, -33, 33, 106 ],
    [ -183, -47, 47, 183 ],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::pack_color5;

    fn greens(g: u8, inten: usize) -> [u8; 4] {
        let packed = pack_color5(Color32::new(g, g, g, 255), false);
        get_diff_subblock_colors(packed, inten).map(|c| c[1])
    }

    #[test]
    fn test_mid_gray() {
        // 16 expands to 132
        assert_eq!(greens(16, 0), [124, 130, 134, 140]);
        assert_eq!(greens(16, 7), [0, 85, 179, 255]);
    }

    #[test]
    fn test_clamped_at_black_and_white() {
        assert_eq!(greens(0, 0), [0, 0, 2, 8]);
        assert_eq!(greens(31, 0), [247, 253, 255, 255]);
    }

    #[test]
    fn test_channels_are_independent() {
        let packed = pack_color5(Color32::new(31, 0, 16, 255), false);
        let colors = get_diff_subblock_colors(packed, 1);
        assert_eq!(colors[0], Color32::new(238, 0, 115, 255));
        assert_eq!(colors[3], Color32::new(255, 17, 149, 255));
    }
}
