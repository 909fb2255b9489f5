#![no_std]

use etc1_dxt1_tables::{generate_table, reference_table, verify_table, Result, SolutionTable};

pub fn build() -> SolutionTable {
    generate_table()
}

pub fn check() -> Result<()> {
    verify_table(&generate_table(), &reference_table()?)
}
