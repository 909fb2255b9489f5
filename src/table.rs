use alloc::{boxed::Box, vec};
use core::ops::Index;

use crate::{
    bytereader::ByteReaderLE, dxt1::NUM_SELECTOR_MAPPINGS, etc::NUM_INTENSITIES, Error, Result,
};

pub const NUM_GREEN_VALUES: usize = 32;
pub const NUM_SELECTOR_RANGES: usize = 6;

pub const TABLE_SIZE: usize =
    NUM_INTENSITIES * NUM_GREEN_VALUES * NUM_SELECTOR_RANGES * NUM_SELECTOR_MAPPINGS;

/// Size of one cell in the little-endian table image: lo, hi, err (u16).
pub(crate) const SOLUTION_BYTES: usize = 4;

/// Best DXT1 endpoint pair found for one table cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution {
    pub lo: u8,
    pub hi: u8,
    pub err: u16,
}

impl Solution {
    /// Value of a cell no endpoint pair has been tried against yet.
    pub const UNSET: Self = Self {
        lo: 0,
        hi: 0,
        err: u16::MAX,
    };
}

impl Default for Solution {
    fn default() -> Self {
        Self::UNSET
    }
}

/// Subset of the four ETC1 selector slots the error is summed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SelectorRange {
    All = 0,
    Upper = 1,
    Lower = 2,
    Middle = 3,
    High = 4,
    Low = 5,
}

impl SelectorRange {
    /// All ranges in table order.
    pub const ALL: [SelectorRange; NUM_SELECTOR_RANGES] = [
        SelectorRange::All,
        SelectorRange::Upper,
        SelectorRange::Lower,
        SelectorRange::Middle,
        SelectorRange::High,
        SelectorRange::Low,
    ];

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// First and last selector slot, inclusive.
    pub fn bounds(self) -> (usize, usize) {
        match self {
            SelectorRange::All => (0, 3),
            SelectorRange::Upper => (1, 3),
            SelectorRange::Lower => (0, 2),
            SelectorRange::Middle => (1, 2),
            SelectorRange::High => (2, 3),
            SelectorRange::Low => (0, 1),
        }
    }

    pub fn slots(self) -> core::ops::RangeInclusive<usize> {
        let (lo, hi) = self.bounds();
        lo..=hi
    }

    /// Sums the per-slot errors over the slots of this range.
    #[inline]
    pub fn total_error(self, errors: &[u32; 4]) -> u32 {
        match self {
            SelectorRange::All => errors[0] + errors[1] + errors[2] + errors[3],
            SelectorRange::Upper => errors[1] + errors[2] + errors[3],
            SelectorRange::Lower => errors[0] + errors[1] + errors[2],
            SelectorRange::Middle => errors[1] + errors[2],
            SelectorRange::High => errors[2] + errors[3],
            SelectorRange::Low => errors[0] + errors[1],
        }
    }
}

/// Address of one cell in a [`SolutionTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableIndex {
    pub inten: usize,
    pub green: usize,
    pub range: SelectorRange,
    pub mapping: usize,
}

impl TableIndex {
    pub fn new(inten: usize, green: usize, range: SelectorRange, mapping: usize) -> Self {
        assert!(inten < NUM_INTENSITIES);
        assert!(green < NUM_GREEN_VALUES);
        assert!(mapping < NUM_SELECTOR_MAPPINGS);
        Self {
            inten,
            green,
            range,
            mapping,
        }
    }

    /// Position in the flat table. Mapping varies fastest, intensity slowest.
    #[inline]
    pub fn flat(self) -> usize {
        self.mapping
            + NUM_SELECTOR_MAPPINGS
                * (self.range.index()
                    + NUM_SELECTOR_RANGES * (self.green + NUM_GREEN_VALUES * self.inten))
    }

    pub fn from_flat(n: usize) -> Option<Self> {
        if n >= TABLE_SIZE {
            return None;
        }
        let mapping = n % NUM_SELECTOR_MAPPINGS;
        let n = n / NUM_SELECTOR_MAPPINGS;
        let range = SelectorRange::from_index(n % NUM_SELECTOR_RANGES)?;
        let n = n / NUM_SELECTOR_RANGES;
        let green = n % NUM_GREEN_VALUES;
        let inten = n / NUM_GREEN_VALUES;
        Some(Self {
            inten,
            green,
            range,
            mapping,
        })
    }
}

/// ETC1 to DXT1 conversion table for a single color channel.
#[derive(Clone, PartialEq, Eq)]
pub struct SolutionTable {
    cells: Box<[Solution]>,
}

impl SolutionTable {
    /// Allocates a table with every cell unset.
    pub fn new() -> Self {
        Self {
            cells: vec![Solution::UNSET; TABLE_SIZE].into_boxed_slice(),
        }
    }

    /// Parses a table image, `TABLE_SIZE` cells of [lo, hi, err_lo, err_hi].
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != TABLE_SIZE * SOLUTION_BYTES {
            return Err(Error::TableSize {
                expected: TABLE_SIZE,
                actual: bytes.len() / SOLUTION_BYTES,
            });
        }
        let reader = &mut ByteReaderLE::new(bytes);
        let mut table = Self::new();
        for cell in table.cells.iter_mut() {
            *cell = Solution {
                lo: reader.read_u8(),
                hi: reader.read_u8(),
                err: reader.read_u16(),
            };
        }
        debug_assert_eq!(reader.pos(), bytes.len());
        Ok(table)
    }

    pub fn reset(&mut self) {
        self.cells.fill(Solution::UNSET);
    }

    pub fn get(&self, index: TableIndex) -> Solution {
        self.cells[index.flat()]
    }

    /// Stores the endpoint pair if `err` is strictly lower than the stored error.
    /// Returns whether the cell changed.
    #[inline]
    pub fn update(&mut self, index: TableIndex, lo: u8, hi: u8, err: u32) -> bool {
        let cell = &mut self.cells[index.flat()];
        if err < cell.err as u32 {
            // err is below a u16, the cast is lossless
            *cell = Solution {
                lo,
                hi,
                err: err as u16,
            };
            true
        } else {
            false
        }
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TableIndex, &Solution)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(n, cell)| TableIndex::from_flat(n).map(|index| (index, cell)))
    }
}

impl Default for SolutionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SolutionTable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("SolutionTable")
            .field("len", &self.cells.len())
            .finish_non_exhaustive()
    }
}

impl Index<TableIndex> for SolutionTable {
    type Output = Solution;
    fn index(&self, index: TableIndex) -> &Self::Output {
        &self.cells[index.flat()]
    }
}
