use crate::error::{MotifError, Result};
use crate::motif::Motif;
use crate::types::MotifSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

/// Reads a single motif record from a JSON file.
///
/// Keys outside the declared schema do not fail the decode; they end up in
/// the record's additional-properties bag.
///
/// # Arguments
/// * `filename` - Path to the JSON file to read
///
/// # Returns
/// * `Result<Motif>` - The decoded record
///
/// # Errors
/// * Returns `MotifError::Json` if the file is not valid JSON or a declared
///   field has the wrong type
/// * Returns `MotifError::Io` for file reading issues
pub fn read_motif(filename: &str) -> Result<Motif> {
    let file = File::open(filename)?;
    let reader = BufReader::new(file);
    let motif = serde_json::from_reader(reader)?;
    Ok(motif)
}

/// Writes a single motif record to a JSON file.
///
/// Output is pretty-printed with a trailing newline; absent fields are
/// omitted from the encoding.
///
/// # Arguments
/// * `motif` - The record to encode
/// * `filename` - Path where the JSON file should be written
///
/// # Returns
/// * `Result<()>` - Unit type if successful
///
/// # Errors
/// * Returns `MotifError::Io` for file writing issues
pub fn write_motif(motif: &Motif, filename: &str) -> Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, motif)?;
    writeln!(writer)?;
    Ok(())
}

/// Reads a set of motif records from a JSON file holding an array.
///
/// # Arguments
/// * `filename` - Path to the JSON file to read
///
/// # Returns
/// * `Result<MotifSet>` - The decoded records
///
/// # Errors
/// * Returns `MotifError::InvalidFileFormat` if no records are found
/// * Returns `MotifError::Json` if the file is not valid JSON or a declared
///   field has the wrong type
/// * Returns `MotifError::Io` for file reading issues
pub fn read_motif_set(filename: &str) -> Result<MotifSet> {
    let file = File::open(filename)?;
    let reader = BufReader::new(file);
    let motifs: MotifSet = serde_json::from_reader(reader)?;

    if motifs.is_empty() {
        return Err(MotifError::invalid_file_format("No motifs found"));
    }

    Ok(motifs)
}

/// Writes a set of motif records to a JSON file as an array.
///
/// # Arguments
/// * `motifs` - The records to encode
/// * `filename` - Path where the JSON file should be written
///
/// # Returns
/// * `Result<()>` - Unit type if successful
///
/// # Errors
/// * Returns `MotifError::Io` for file writing issues
pub fn write_motif_set(motifs: &[Motif], filename: &str) -> Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, motifs)?;
    writeln!(writer)?;
    Ok(())
}
