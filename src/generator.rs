use crate::{
    color::{pack_color5, Color32},
    dxt1::{gradient, SELECTOR_MAPPINGS},
    etc::{get_diff_subblock_colors, NUM_INTENSITIES},
    table::{SelectorRange, SolutionTable, TableIndex, NUM_GREEN_VALUES},
};

/// Allocates a table and fills it with [`create_etc1_to_dxt1_6_conversion_table`].
pub fn generate_table() -> SolutionTable {
    let mut table = SolutionTable::new();
    create_etc1_to_dxt1_6_conversion_table(&mut table);
    table
}

/// Fills `table` with the best 6-bit DXT1 green endpoints for every ETC1 diff
/// mode base color and intensity, per selector range and selector mapping.
///
/// Every `(lo, hi)` pair is tried, `hi` in the outer loop. Only a strictly
/// lower error replaces a cell, so ties keep the first pair found.
pub fn create_etc1_to_dxt1_6_conversion_table(table: &mut SolutionTable) {
    table.reset();

    for inten in 0..NUM_INTENSITIES {
        for green in 0..NUM_GREEN_VALUES {
            let g = green as u8;
            let block_colors =
                get_diff_subblock_colors(pack_color5(Color32::new(g, g, g, 255), false), inten);
            let block_greens = block_colors.map(|c| c[1] as i32);

            for hi in 0..64 {
                for lo in 0..64 {
                    let colors = gradient(lo, hi);

                    for (mapping, selectors) in SELECTOR_MAPPINGS.iter().enumerate() {
                        let mut errors = [0u32; 4];
                        for ((err, &block_green), &sel) in
                            errors.iter_mut().zip(block_greens.iter()).zip(selectors.iter())
                        {
                            let d = block_green - colors[sel as usize] as i32;
                            *err = (d * d) as u32;
                        }

                        for range in SelectorRange::ALL {
                            let index = TableIndex {
                                inten,
                                green,
                                range,
                                mapping,
                            };
                            table.update(index, lo, hi, range.total_error(&errors));
                        }
                    }
                }
            }
        }
    }
}
