//! Precomputed ETC1 to DXT1 endpoint tables.
//!
//! Transcoding an ETC1 block straight to DXT1 needs, for every diff mode base
//! color and intensity, the 6-bit DXT1 endpoint pair that best reproduces the
//! four ETC1 subblock colors. This crate builds the green channel table by
//! exhaustive search, verifies it against the shipped table and times it.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::all)]

extern crate alloc;

pub mod bench;
mod bytereader;
mod color;
mod dxt1;
mod etc;
mod generator;
mod reference;
mod table;
mod verify;

pub use color::{pack_color5, unpack_color5, Color32};
pub use dxt1::{expand_6_to_8, gradient, NUM_SELECTOR_MAPPINGS, SELECTOR_MAPPINGS};
pub use etc::{get_diff_subblock_colors, ETC1_MODIFIERS, NUM_INTENSITIES};
pub use generator::{create_etc1_to_dxt1_6_conversion_table, generate_table};
pub use reference::reference_table;
pub use table::{
    SelectorRange, Solution, SolutionTable, TableIndex, NUM_GREEN_VALUES, NUM_SELECTOR_RANGES,
    TABLE_SIZE,
};
pub use verify::verify_table;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("expected {expected} table cells, got {actual}")]
    TableSize { expected: usize, actual: usize },

    #[error("failed with n = {index}: expected {expected:?}, got {actual:?}")]
    Mismatch {
        index: usize,
        expected: Solution,
        actual: Solution,
    },
}
