use crate::{table::SolutionTable, Error, Result};

/// Compares two tables cell by cell, stopping at the first difference.
///
/// All three fields of a cell must match exactly.
pub fn verify_table(generated: &SolutionTable, known: &SolutionTable) -> Result<()> {
    if generated.len() != known.len() {
        return Err(Error::TableSize {
            expected: known.len(),
            actual: generated.len(),
        });
    }

    for (index, (actual, expected)) in generated
        .as_slice()
        .iter()
        .zip(known.as_slice().iter())
        .enumerate()
    {
        if actual != expected {
            return Err(Error::Mismatch {
                index,
                expected: *expected,
                actual: *actual,
            });
        }
    }

    Ok(())
}
