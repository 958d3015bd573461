use crate::motif::Motif;
use ndarray::Array2;

/// A single row of a position-specific scoring matrix
pub type PssmRow = Vec<f64>;

/// Row-major PSSM as carried on the wire
pub type PssmRows = Vec<PssmRow>;

/// Typed matrix view of a PSSM
pub type Pssm = Array2<f64>;

/// A set of motif records, e.g. the output of one detection run
pub type MotifSet = Vec<Motif>;
