use crate::error::{MotifError, Result};
use crate::types::{Pssm, PssmRows};
use ndarray::Array2;

/// Builds a typed matrix from row-major PSSM rows as carried on the wire.
///
/// Each row holds the scores of one motif position; all rows must have the
/// same length. Empty input yields a 0x0 matrix.
///
/// # Arguments
/// * `rows` - Row-major matrix values, one inner vector per motif position
///
/// # Returns
/// * `Result<Pssm>` - A 2-D array with one row per motif position
///
/// # Errors
/// * Returns `MotifError::RaggedPssm` if any row differs in length from the first
pub fn to_matrix(rows: &[Vec<f64>]) -> Result<Pssm> {
    let width = rows.first().map(Vec::len).unwrap_or(0);
    let mut flat = Vec::with_capacity(rows.len() * width);
    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(MotifError::ragged_pssm(row, width, values.len()));
        }
        flat.extend_from_slice(values);
    }

    // Shape and data length agree after the width check above
    Ok(Array2::from_shape_vec((rows.len(), width), flat).unwrap())
}

/// Extracts row-major wire-form rows from a typed matrix.
pub fn from_matrix(matrix: &Pssm) -> PssmRows {
    matrix.rows().into_iter().map(|row| row.to_vec()).collect()
}
